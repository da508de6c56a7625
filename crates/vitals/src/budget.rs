//! Performance budgets and exceedance evaluation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// Default budget table, in milliseconds.
const DEFAULT_LIMITS: [(&str, f64); 4] = [
    ("LCP", 2500.0),
    ("FCP", 1800.0),
    ("FID", 100.0),
    ("TTFB", 800.0),
];

/// Per-metric ceilings beyond which a measurement counts as a regression.
///
/// The engine ships a default table; caller overrides are shallow-merged on
/// top, with the caller winning per key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    limits: HashMap<String, f64>,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            limits: DEFAULT_LIMITS
                .iter()
                .map(|(name, limit)| (name.to_string(), *limit))
                .collect(),
        }
    }
}

impl Budget {
    /// The default table with the given overrides merged on top.
    pub fn merged(overrides: &HashMap<String, f64>) -> Self {
        let mut budget = Self::default();
        budget.merge(overrides);
        budget
    }

    /// Merge overrides into this table, caller winning per key.
    pub fn merge(&mut self, overrides: &HashMap<String, f64>) {
        for (name, limit) in overrides {
            self.limits.insert(name.clone(), *limit);
        }
    }

    /// Builder method to set a single ceiling.
    pub fn with_limit(mut self, name: &str, limit_ms: f64) -> Self {
        self.limits.insert(name.to_string(), limit_ms);
        self
    }

    /// Ceiling for the given metric name, if one is configured.
    pub fn limit(&self, name: &str) -> Option<f64> {
        self.limits.get(name).copied()
    }

    /// All configured ceilings.
    pub fn limits(&self) -> &HashMap<String, f64> {
        &self.limits
    }
}

/// Outcome of evaluating one metric against the active budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// The evaluated metric.
    pub metric: Metric,
    /// Whether the value exceeded its budget ceiling.
    pub is_budget_exceeded: bool,
    /// The ceiling the metric was compared against, in milliseconds.
    pub budget_value: f64,
    /// How far over budget the value is, as a rounded percentage of the
    /// ceiling. Present only when the budget is exceeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceedance_percentage: Option<f64>,
}

impl PerformanceReport {
    /// How many milliseconds over the ceiling the value is (negative when
    /// within budget).
    pub fn excess_ms(&self) -> f64 {
        self.metric.value - self.budget_value
    }
}

impl std::fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_budget_exceeded {
            write!(
                f,
                "{}: {:.0}ms exceeds budget {:.0}ms by {:.0}%",
                self.metric.name,
                self.metric.value,
                self.budget_value,
                self.exceedance_percentage.unwrap_or(0.0)
            )
        } else {
            write!(
                f,
                "{}: {:.0}ms within budget {:.0}ms",
                self.metric.name, self.metric.value, self.budget_value
            )
        }
    }
}

/// Evaluate one metric against the active budget.
///
/// Returns `None` when the metric name has no budget entry; that case is
/// logged as a warning and no report is emitted for the metric.
pub fn evaluate(metric: &Metric, budget: &Budget) -> Option<PerformanceReport> {
    let Some(budget_value) = budget.limit(&metric.name) else {
        tracing::warn!(
            target: "vitals::budget",
            metric = metric.name.as_str(),
            "no budget entry for metric, dropping report"
        );
        return None;
    };

    let is_budget_exceeded = metric.value > budget_value;
    let exceedance_percentage = is_budget_exceeded
        .then(|| ((metric.value - budget_value) / budget_value * 100.0).round());

    Some(PerformanceReport {
        metric: metric.clone(),
        is_budget_exceeded,
        budget_value,
        exceedance_percentage,
    })
}
