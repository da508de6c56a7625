//! Metric records and rating classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four metric families the collector instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricFamily {
    /// Largest contentful paint. The platform revises this upward as more
    /// content paints, so the latest observation wins.
    Lcp,
    /// First contentful paint. The first observation is authoritative.
    Fcp,
    /// First input delay. Measured once, on the first user input.
    Fid,
    /// Time to first byte. Read synchronously from navigation timing.
    Ttfb,
}

impl MetricFamily {
    /// Canonical metric name used in budgets and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lcp => "LCP",
            Self::Fcp => "FCP",
            Self::Fid => "FID",
            Self::Ttfb => "TTFB",
        }
    }

    /// Fixed classification thresholds for this family, in milliseconds.
    ///
    /// These are constants of the metric definition, not configuration;
    /// budgets are configured separately and independently.
    pub const fn thresholds(self) -> RatingThresholds {
        match self {
            Self::Lcp => RatingThresholds::new(2500.0, 4000.0),
            Self::Fcp => RatingThresholds::new(1800.0, 3000.0),
            Self::Fid => RatingThresholds::new(100.0, 300.0),
            Self::Ttfb => RatingThresholds::new(800.0, 1800.0),
        }
    }

    /// Classify a measured value against this family's thresholds.
    pub fn rate(self, value_ms: f64) -> Rating {
        self.thresholds().rate(value_ms)
    }
}

impl std::fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The two ceilings that split a metric's value range into three ratings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingThresholds {
    /// Values at or below this are rated good.
    pub good_ceiling: f64,
    /// Values at or below this (but above the good ceiling) need
    /// improvement; anything beyond is poor.
    pub needs_improvement_ceiling: f64,
}

impl RatingThresholds {
    pub const fn new(good_ceiling: f64, needs_improvement_ceiling: f64) -> Self {
        Self {
            good_ceiling,
            needs_improvement_ceiling,
        }
    }

    /// Classify a value. Monotonic: a larger value never yields a better
    /// rating.
    pub fn rate(&self, value_ms: f64) -> Rating {
        if value_ms <= self.good_ceiling {
            Rating::Good
        } else if value_ms <= self.needs_improvement_ceiling {
            Rating::NeedsImprovement
        } else {
            Rating::Poor
        }
    }
}

/// Three-tier classification of a metric value.
///
/// Ordered from best to worst, so `Ord` expresses "at least as good as".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    pub fn is_good(self) -> bool {
        matches!(self, Self::Good)
    }
}

/// One normalized measurement of a metric family on a page.
///
/// Produced once per instrumentation event and not persisted beyond the
/// report built from it. The rating is derived from the family thresholds
/// at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Canonical metric name, e.g. "LCP".
    pub name: String,
    /// Measured value in milliseconds.
    pub value: f64,
    /// Classification of the value against the family thresholds.
    pub rating: Rating,
    /// Change from the previously observed value of the same name; equal to
    /// `value` for the first observation.
    pub delta: f64,
    /// Unique identifier for this measurement.
    pub id: String,
    /// URL of the observed page.
    pub url: String,
    /// When the measurement was normalized.
    pub timestamp: DateTime<Utc>,
}

impl Metric {
    /// Build a metric from a raw measurement.
    pub fn new(family: MetricFamily, value: f64, delta: f64, url: &str) -> Self {
        Self {
            name: family.name().to_string(),
            value,
            rating: family.rate(value),
            delta,
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_family_names() {
        assert_eq!(MetricFamily::Lcp.name(), "LCP");
        assert_eq!(MetricFamily::Ttfb.to_string(), "TTFB");
    }

    #[test]
    fn test_rating_boundaries() {
        // Ceilings are inclusive.
        assert_eq!(MetricFamily::Lcp.rate(2500.0), Rating::Good);
        assert_eq!(MetricFamily::Lcp.rate(2500.1), Rating::NeedsImprovement);
        assert_eq!(MetricFamily::Lcp.rate(4000.0), Rating::NeedsImprovement);
        assert_eq!(MetricFamily::Lcp.rate(4000.1), Rating::Poor);

        assert_eq!(MetricFamily::Fid.rate(50.0), Rating::Good);
        assert_eq!(MetricFamily::Fid.rate(200.0), Rating::NeedsImprovement);
        assert_eq!(MetricFamily::Fid.rate(500.0), Rating::Poor);
    }

    #[test]
    fn test_metric_new_derives_rating() {
        let metric = Metric::new(MetricFamily::Lcp, 2000.0, 2000.0, "https://example.com");
        assert_eq!(metric.name, "LCP");
        assert_eq!(metric.rating, Rating::Good);
        assert!(!metric.id.is_empty());
    }

    #[test]
    fn test_metric_ids_unique() {
        let a = Metric::new(MetricFamily::Fcp, 100.0, 100.0, "u");
        let b = Metric::new(MetricFamily::Fcp, 100.0, 100.0, "u");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_metric_serialization_camel_case() {
        let metric = Metric::new(MetricFamily::Ttfb, 640.0, 640.0, "https://example.com");
        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(json["name"], "TTFB");
        assert_eq!(json["rating"], "good");
        assert!(json.get("timestamp").is_some());
    }

    proptest! {
        /// Classification is monotonic: a smaller value is never rated
        /// worse than a larger one.
        #[test]
        fn prop_rating_monotonic(a in 0.0f64..10_000.0, b in 0.0f64..10_000.0) {
            let family = MetricFamily::Lcp;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(family.rate(lo) <= family.rate(hi));
        }
    }
}
