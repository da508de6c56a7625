//! Visible focus indicators.

use page_model::{DomView, ElementView, StyleState};

use crate::check::{CheckError, CheckOutcome, RuleCheck, Severity, Violation, ViolationKind};
use crate::inspect;

const STANDARD: &str = "WCAG 2.4.7";

/// Every focusable element must resolve a non-default outline, box-shadow,
/// or border change under the focus-visible state.
///
/// A host that cannot resolve any of the probed properties reports the
/// element as unevaluable, which counts as passed.
#[derive(Debug, Default)]
pub struct FocusCheck;

fn outline_visible(el: &dyn ElementView) -> Option<bool> {
    let style = el.style(StyleState::FocusVisible, "outline-style")?;
    if matches!(style.as_str(), "none" | "hidden") {
        return Some(false);
    }
    // An outline style with zero width still renders nothing.
    match el.style(StyleState::FocusVisible, "outline-width") {
        Some(width) => Some(!matches!(width.trim(), "0" | "0px")),
        None => Some(true),
    }
}

fn shadow_visible(el: &dyn ElementView) -> Option<bool> {
    el.style(StyleState::FocusVisible, "box-shadow")
        .map(|shadow| shadow != "none")
}

fn border_changes(el: &dyn ElementView) -> Option<bool> {
    let focused = el.style(StyleState::FocusVisible, "border-color")?;
    let normal = el.style(StyleState::Normal, "border-color")?;
    Some(focused != normal)
}

impl RuleCheck for FocusCheck {
    fn name(&self) -> &'static str {
        "focus"
    }

    fn run(&self, dom: &dyn DomView) -> Result<CheckOutcome, CheckError> {
        let mut outcome = CheckOutcome::new();

        for el in dom.elements() {
            if !inspect::is_focusable(el) {
                continue;
            }

            let probes = [outline_visible(el), shadow_visible(el), border_changes(el)];
            let resolvable = probes.iter().any(Option::is_some);
            let visible = probes.iter().any(|p| *p == Some(true));

            if !resolvable || visible {
                outcome.pass();
            } else {
                outcome.fail(
                    Violation::new(
                        ViolationKind::Focus,
                        Severity::High,
                        "focusable element has no visible focus indicator",
                        STANDARD,
                    )
                    .at(el.locator()),
                );
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_model::mock::{MockDom, MockElement};

    #[test]
    fn test_suppressed_outline_flagged_high() {
        let dom = MockDom::new().with(
            MockElement::new("button")
                .with_size(48.0, 48.0)
                .with_focus_style("outline-style", "none")
                .with_focus_style("box-shadow", "none"),
        );
        let outcome = FocusCheck.run(&dom).unwrap();

        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(outcome.violations[0].severity, Severity::High);
        assert_eq!(outcome.violations[0].kind, ViolationKind::Focus);
    }

    #[test]
    fn test_outline_indicator_passes() {
        let dom = MockDom::new().with(
            MockElement::new("a")
                .with_focus_style("outline-style", "solid")
                .with_focus_style("outline-width", "2px"),
        );
        let outcome = FocusCheck.run(&dom).unwrap();
        assert_eq!(outcome.total_passed, 1);
    }

    #[test]
    fn test_zero_width_outline_does_not_count() {
        let dom = MockDom::new().with(
            MockElement::new("a")
                .with_focus_style("outline-style", "solid")
                .with_focus_style("outline-width", "0px")
                .with_focus_style("box-shadow", "none"),
        );
        let outcome = FocusCheck.run(&dom).unwrap();
        assert_eq!(outcome.violations.len(), 1);
    }

    #[test]
    fn test_box_shadow_indicator_passes() {
        let dom = MockDom::new().with(
            MockElement::new("button")
                .with_focus_style("outline-style", "none")
                .with_focus_style("box-shadow", "0 0 0 3px rgba(66,153,225,0.6)"),
        );
        let outcome = FocusCheck.run(&dom).unwrap();
        assert_eq!(outcome.total_passed, 1);
    }

    #[test]
    fn test_border_change_indicator_passes() {
        let dom = MockDom::new().with(
            MockElement::new("input")
                .with_attr("type", "text")
                .with_focus_style("outline-style", "none")
                .with_style("border-color", "#cccccc")
                .with_focus_style("border-color", "#3182ce"),
        );
        let outcome = FocusCheck.run(&dom).unwrap();
        assert_eq!(outcome.total_passed, 1);
    }

    #[test]
    fn test_unresolvable_styles_pass() {
        let dom = MockDom::new().with(MockElement::new("button"));
        let outcome = FocusCheck.run(&dom).unwrap();
        assert_eq!(outcome.total_passed, 1);
    }

    #[test]
    fn test_unfocusable_elements_ignored() {
        let dom = MockDom::new().with(
            MockElement::new("button")
                .with_attr("tabindex", "-1")
                .with_focus_style("outline-style", "none"),
        );
        let outcome = FocusCheck.run(&dom).unwrap();
        assert_eq!(outcome.total_checked, 0);
    }
}
