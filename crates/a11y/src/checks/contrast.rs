//! Heuristic color-contrast screening.

use page_model::{DomView, ElementView, StyleState};

use crate::check::{CheckError, CheckOutcome, RuleCheck, Severity, Violation, ViolationKind};
use crate::color::{is_known_poor_pair, Color};

const STANDARD: &str = "WCAG 1.4.3";

/// Screens every text-bearing element's resolved foreground/background
/// pair.
///
/// Flags identical pairs, fully transparent ink, and pairs in the
/// known-poor table. This is a deliberate heuristic, not a luminance-ratio
/// computation; an element whose colors cannot be resolved or parsed counts
/// as passed.
#[derive(Debug, Default)]
pub struct ContrastCheck;

impl RuleCheck for ContrastCheck {
    fn name(&self) -> &'static str {
        "contrast"
    }

    fn run(&self, dom: &dyn DomView) -> Result<CheckOutcome, CheckError> {
        let mut outcome = CheckOutcome::new();

        for el in dom.elements() {
            if !el.has_text() {
                continue;
            }

            let foreground = el
                .style(StyleState::Normal, "color")
                .and_then(|v| Color::parse(&v));
            let background = el
                .style(StyleState::Normal, "background-color")
                .and_then(|v| Color::parse(&v));

            let (Some(fg), Some(bg)) = (foreground, background) else {
                outcome.pass();
                continue;
            };

            if fg.is_transparent() || bg.is_transparent() {
                outcome.fail(
                    Violation::new(
                        ViolationKind::Contrast,
                        Severity::High,
                        "text or background color is fully transparent",
                        STANDARD,
                    )
                    .at(el.locator()),
                );
            } else if fg.same_rgb(&bg) {
                outcome.fail(
                    Violation::new(
                        ViolationKind::Contrast,
                        Severity::High,
                        "text and background colors are identical",
                        STANDARD,
                    )
                    .at(el.locator()),
                );
            } else if is_known_poor_pair(&fg, &bg) {
                outcome.fail(
                    Violation::new(
                        ViolationKind::Contrast,
                        Severity::Medium,
                        "foreground/background pair is a known low-contrast combination",
                        STANDARD,
                    )
                    .at(el.locator()),
                );
            } else {
                outcome.pass();
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_model::mock::{MockDom, MockElement};

    fn text(fg: &str, bg: &str) -> MockElement {
        MockElement::new("p")
            .with_text()
            .with_style("color", fg)
            .with_style("background-color", bg)
    }

    #[test]
    fn test_identical_colors_flagged_high() {
        let dom = MockDom::new().with(text("#333333", "#333333"));
        let outcome = ContrastCheck.run(&dom).unwrap();

        assert_eq!(outcome.total_checked, 1);
        assert_eq!(outcome.total_passed, 0);
        assert_eq!(outcome.violations[0].severity, Severity::High);
        assert_eq!(outcome.violations[0].kind, ViolationKind::Contrast);
    }

    #[test]
    fn test_transparent_ink_flagged() {
        let dom = MockDom::new().with(text("transparent", "#ffffff"));
        let outcome = ContrastCheck.run(&dom).unwrap();
        assert_eq!(outcome.violations.len(), 1);
    }

    #[test]
    fn test_known_poor_pair_flagged_medium() {
        let dom = MockDom::new().with(text("yellow", "white"));
        let outcome = ContrastCheck.run(&dom).unwrap();
        assert_eq!(outcome.violations[0].severity, Severity::Medium);
    }

    #[test]
    fn test_distinct_pair_passes() {
        let dom = MockDom::new().with(text("#111111", "#fafafa"));
        let outcome = ContrastCheck.run(&dom).unwrap();
        assert_eq!(outcome.total_passed, 1);
        assert!(outcome.violations.is_empty());
    }

    #[test]
    fn test_unresolvable_styles_pass() {
        // No styles at all, and an unparseable value: both count as passed.
        let dom = MockDom::new()
            .with(MockElement::new("p").with_text())
            .with(text("var(--ink)", "#ffffff"));
        let outcome = ContrastCheck.run(&dom).unwrap();
        assert_eq!(outcome.total_checked, 2);
        assert_eq!(outcome.total_passed, 2);
    }

    #[test]
    fn test_non_text_elements_ignored() {
        let dom = MockDom::new().with(MockElement::new("div"));
        let outcome = ContrastCheck.run(&dom).unwrap();
        assert_eq!(outcome.total_checked, 0);
    }
}
