//! Rule check contract and violation types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use page_model::DomView;

/// Severity of a recorded violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Which rule family a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    Contrast,
    TouchTarget,
    Focus,
    Semantic,
    Aria,
    Keyboard,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Contrast => "contrast",
            Self::TouchTarget => "touch-target",
            Self::Focus => "focus",
            Self::Semantic => "semantic",
            Self::Aria => "aria",
            Self::Keyboard => "keyboard",
        };
        f.write_str(label)
    }
}

/// One recorded failure of a rule check.
///
/// Violations are rebuilt from scratch on every scan; they carry no
/// identity across scans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    /// Locator of the offending element; absent for page-wide violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    pub description: String,
    pub severity: Severity,
    /// The accessibility standard clause this rule derives from.
    pub standard_reference: String,
}

impl Violation {
    pub fn new(
        kind: ViolationKind,
        severity: Severity,
        description: impl Into<String>,
        standard_reference: &str,
    ) -> Self {
        Self {
            kind,
            element: None,
            description: description.into(),
            severity,
            standard_reference: standard_reference.to_string(),
        }
    }

    /// Attach the offending element's locator.
    pub fn at(mut self, locator: String) -> Self {
        self.element = Some(locator);
        self
    }
}

/// Pass/fail accounting for one check over one scan.
#[derive(Debug, Clone, Default)]
pub struct CheckOutcome {
    pub violations: Vec<Violation>,
    pub total_checked: usize,
    pub total_passed: usize,
}

impl CheckOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one item that passed the rule.
    pub fn pass(&mut self) {
        self.total_checked += 1;
        self.total_passed += 1;
    }

    /// Record one item that failed the rule.
    pub fn fail(&mut self, violation: Violation) {
        self.total_checked += 1;
        self.violations.push(violation);
    }
}

/// Failure inside a single rule check.
///
/// These never propagate out of the scanner; the battery treats a failed
/// check as a passed item and continues (fail-open).
#[derive(Debug, Error)]
pub enum CheckError {
    /// The check panicked and was caught at the battery boundary.
    #[error("check panicked: {0}")]
    Panicked(String),

    /// A resolved style value could not be interpreted.
    #[error("invalid style value: {0}")]
    InvalidStyle(String),
}

/// One independent accessibility rule.
///
/// A check must not assume anything about the other checks in the battery;
/// each receives the same snapshot and accounts for its own items.
pub trait RuleCheck: Send + Sync {
    fn name(&self) -> &'static str;

    fn run(&self, dom: &dyn DomView) -> Result<CheckOutcome, CheckError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_violation_wire_format() {
        let violation = Violation::new(
            ViolationKind::TouchTarget,
            Severity::Medium,
            "target too small",
            "WCAG 2.5.5",
        )
        .at("button".to_string());

        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["type"], "touch-target");
        assert_eq!(json["severity"], "medium");
        assert_eq!(json["standardReference"], "WCAG 2.5.5");
        assert_eq!(json["element"], "button");
    }

    #[test]
    fn test_page_wide_violation_omits_element() {
        let violation = Violation::new(
            ViolationKind::Semantic,
            Severity::High,
            "missing main landmark",
            "WCAG 2.4.1",
        );
        let json = serde_json::to_value(&violation).unwrap();
        assert!(json.get("element").is_none());
    }

    #[test]
    fn test_outcome_accounting() {
        let mut outcome = CheckOutcome::new();
        outcome.pass();
        outcome.pass();
        outcome.fail(Violation::new(
            ViolationKind::Keyboard,
            Severity::High,
            "unreachable",
            "WCAG 2.1.1",
        ));

        assert_eq!(outcome.total_checked, 3);
        assert_eq!(outcome.total_passed, 2);
        assert_eq!(outcome.violations.len(), 1);
    }
}
