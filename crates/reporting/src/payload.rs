//! Outbound analytics body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use page_model::PageContext;
use vitals::{PerformanceReport, Rating};

/// The metric fields the analytics backend ingests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricBody {
    pub name: String,
    pub value: f64,
    pub rating: Rating,
    pub delta: f64,
    pub id: String,
}

/// JSON body POSTed to the analytics endpoint for each performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPayload {
    pub metric: MetricBody,
    pub budget_exceeded: bool,
    pub budget_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceedance_percentage: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub url: String,
}

impl AnalyticsPayload {
    /// Build the outbound body from a report and the page it came from.
    pub fn from_report(report: &PerformanceReport, context: &PageContext) -> Self {
        Self {
            metric: MetricBody {
                name: report.metric.name.clone(),
                value: report.metric.value,
                rating: report.metric.rating,
                delta: report.metric.delta,
                id: report.metric.id.clone(),
            },
            budget_exceeded: report.is_budget_exceeded,
            budget_value: report.budget_value,
            exceedance_percentage: report.exceedance_percentage,
            timestamp: Utc::now(),
            user_agent: context.user_agent.clone(),
            url: context.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals::{evaluate, Budget, Metric, MetricFamily};

    #[test]
    fn test_payload_shape() {
        let metric = Metric::new(MetricFamily::Lcp, 3000.0, 3000.0, "https://example.com/donate");
        let report = evaluate(&metric, &Budget::default()).unwrap();
        let context = PageContext::new("https://example.com/donate").with_user_agent("ua/1.0");

        let payload = AnalyticsPayload::from_report(&report, &context);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["metric"]["name"], "LCP");
        assert_eq!(json["metric"]["rating"], "needs-improvement");
        assert_eq!(json["budgetExceeded"], true);
        assert_eq!(json["budgetValue"], 2500.0);
        assert_eq!(json["exceedancePercentage"], 20.0);
        assert_eq!(json["userAgent"], "ua/1.0");
        assert_eq!(json["url"], "https://example.com/donate");
    }

    #[test]
    fn test_payload_omits_percentage_within_budget() {
        let metric = Metric::new(MetricFamily::Fid, 50.0, 50.0, "https://example.com");
        let report = evaluate(&metric, &Budget::default()).unwrap();
        let payload = AnalyticsPayload::from_report(&report, &PageContext::default());

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("exceedancePercentage").is_none());
    }
}
