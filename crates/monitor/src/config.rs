//! Per-instance monitor configuration.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use vitals::Budget;

/// Configuration for one [`QualityMonitor`](crate::QualityMonitor)
/// instance.
///
/// Each monitor owns its configuration outright; two monitors embedded on
/// the same host never share state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Analytics endpoint base URL. Empty disables outbound forwarding.
    pub endpoint: String,
    /// Budget ceilings merged over the defaults, caller winning per key.
    pub budget_overrides: HashMap<String, f64>,
    /// Period of the continuous accessibility scan.
    pub scan_interval: Duration,
    /// Quiet window that coalesces mutation bursts into one re-scan.
    pub quiet_window: Duration,
    /// Minimum interactive target edge length, in CSS pixels.
    pub touch_target_minimum: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            budget_overrides: HashMap::new(),
            scan_interval: Duration::from_secs(5),
            quiet_window: Duration::from_secs(1),
            touch_target_minimum: 44.0,
        }
    }
}

impl MonitorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the analytics endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Override a single budget ceiling.
    pub fn with_budget_limit(mut self, name: &str, limit_ms: f64) -> Self {
        self.budget_overrides.insert(name.to_string(), limit_ms);
        self
    }

    /// Set the continuous scan period.
    pub fn with_scan_interval(mut self, interval: Duration) -> Self {
        self.scan_interval = interval;
        self
    }

    /// Set the mutation quiet window.
    pub fn with_quiet_window(mut self, window: Duration) -> Self {
        self.quiet_window = window;
        self
    }

    /// Set the touch-target minimum.
    pub fn with_touch_target_minimum(mut self, minimum: f64) -> Self {
        self.touch_target_minimum = minimum;
        self
    }

    /// The active budget: defaults with this config's overrides merged on
    /// top.
    pub fn budget(&self) -> Budget {
        Budget::merged(&self.budget_overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MonitorConfig::default();
        assert!(config.endpoint.is_empty());
        assert_eq!(config.scan_interval, Duration::from_secs(5));
        assert_eq!(config.quiet_window, Duration::from_secs(1));
        assert_eq!(config.touch_target_minimum, 44.0);
    }

    #[test]
    fn test_config_builder() {
        let config = MonitorConfig::new()
            .with_endpoint("https://telemetry.example.com")
            .with_budget_limit("LCP", 2000.0)
            .with_scan_interval(Duration::from_secs(10))
            .with_quiet_window(Duration::from_millis(500));

        assert_eq!(config.endpoint, "https://telemetry.example.com");
        assert_eq!(config.scan_interval, Duration::from_secs(10));
        assert_eq!(config.quiet_window, Duration::from_millis(500));
    }

    #[test]
    fn test_budget_merges_overrides() {
        let config = MonitorConfig::new().with_budget_limit("LCP", 2000.0);
        let budget = config.budget();

        assert_eq!(budget.limit("LCP"), Some(2000.0));
        assert_eq!(budget.limit("FID"), Some(100.0));
    }
}
