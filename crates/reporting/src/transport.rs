//! Best-effort delivery to the analytics endpoint.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{ReportError, ReportResult};
use crate::payload::AnalyticsPayload;

/// Fixed path performance reports are POSTed to, relative to the endpoint.
pub const ANALYTICS_PATH: &str = "/api/analytics/vitals";

/// Configuration for the analytics transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Analytics endpoint base URL. Empty disables delivery.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl TransportConfig {
    /// Create a transport config with the specified endpoint.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Fire-and-forget POST transport for performance payloads.
///
/// Delivery is strictly best-effort: a failed or rejected send is logged
/// and dropped, never retried, and never surfaced to the host.
#[derive(Debug)]
pub struct AnalyticsTransport {
    config: TransportConfig,
    client: reqwest::Client,
}

impl AnalyticsTransport {
    /// Create a transport posting to the given endpoint.
    pub fn new(endpoint: &str) -> Self {
        Self::with_config(TransportConfig::new(endpoint))
    }

    /// Create a transport with full configuration.
    pub fn with_config(config: TransportConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Full URL reports are POSTed to.
    pub fn url(&self) -> String {
        format!(
            "{}{}",
            self.config.endpoint.trim_end_matches('/'),
            ANALYTICS_PATH
        )
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Send one payload. A missing endpoint silently succeeds, which keeps
    /// dev setups without a backend quiet.
    pub async fn send(&self, payload: &AnalyticsPayload) -> ReportResult<()> {
        if self.config.endpoint.is_empty() {
            return Ok(());
        }

        let response = self
            .client
            .post(self.url())
            .timeout(self.config.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| ReportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Status(status.as_u16()));
        }
        Ok(())
    }

    /// Fire-and-forget variant: spawns the send and logs any failure.
    pub fn send_detached(self: &Arc<Self>, payload: AnalyticsPayload) {
        let transport = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(error) = transport.send(&payload).await {
                tracing::warn!(
                    target: "reporting::transport",
                    error = %error,
                    metric = payload.metric.name.as_str(),
                    "analytics delivery failed, dropping report"
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_model::PageContext;
    use vitals::{evaluate, Budget, Metric, MetricFamily};

    fn payload() -> AnalyticsPayload {
        let metric = Metric::new(MetricFamily::Lcp, 1000.0, 1000.0, "https://example.com");
        let report = evaluate(&metric, &Budget::default()).unwrap();
        AnalyticsPayload::from_report(&report, &PageContext::default())
    }

    #[test]
    fn test_transport_config_default() {
        let config = TransportConfig::default();
        assert!(config.endpoint.is_empty());
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_url_joins_endpoint_and_path() {
        let transport = AnalyticsTransport::new("https://telemetry.example.com/");
        assert_eq!(
            transport.url(),
            "https://telemetry.example.com/api/analytics/vitals"
        );
    }

    #[tokio::test]
    async fn test_send_without_endpoint_succeeds() {
        let transport = AnalyticsTransport::new("");
        assert!(transport.send(&payload()).await.is_ok());
    }

    #[tokio::test]
    async fn test_send_detached_never_propagates_failure() {
        // Unroutable endpoint: the spawned send fails and is dropped.
        let transport = Arc::new(AnalyticsTransport::with_config(
            TransportConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_millis(50)),
        ));
        transport.send_detached(payload());
        tokio::task::yield_now().await;
    }
}
