//! Heading order and main landmark structure.

use page_model::{DomView, ElementView};

use crate::check::{CheckError, CheckOutcome, RuleCheck, Severity, Violation, ViolationKind};
use crate::inspect;

const HEADING_STANDARD: &str = "WCAG 1.3.1";
const LANDMARK_STANDARD: &str = "WCAG 2.4.1";

/// Headings must form a non-skipping sequence and the page must contain
/// exactly one main content landmark.
///
/// The heading walk starts from level 0, so the first heading passes only
/// at level 1; each subsequent heading may rise by at most one level.
/// The walk continues from the actual level even after a skip, so one jump
/// produces one violation.
#[derive(Debug, Default)]
pub struct SemanticCheck;

impl RuleCheck for SemanticCheck {
    fn name(&self) -> &'static str {
        "semantic"
    }

    fn run(&self, dom: &dyn DomView) -> Result<CheckOutcome, CheckError> {
        let mut outcome = CheckOutcome::new();
        let elements = dom.elements();

        let mut previous_level = 0u8;
        for el in &elements {
            let Some(level) = inspect::heading_level(*el) else {
                continue;
            };
            if level > previous_level + 1 {
                outcome.fail(
                    Violation::new(
                        ViolationKind::Semantic,
                        Severity::Medium,
                        format!(
                            "heading level {} follows level {}, skipping intermediate levels",
                            level, previous_level
                        ),
                        HEADING_STANDARD,
                    )
                    .at(el.locator()),
                );
            } else {
                outcome.pass();
            }
            previous_level = level;
        }

        // One page-wide landmark item, regardless of how many candidates
        // exist.
        let landmarks = elements
            .iter()
            .filter(|el| inspect::is_main_landmark(**el))
            .count();
        if landmarks == 1 {
            outcome.pass();
        } else {
            outcome.fail(Violation::new(
                ViolationKind::Semantic,
                Severity::High,
                format!("expected exactly one main landmark, found {landmarks}"),
                LANDMARK_STANDARD,
            ));
        }

        Ok(outcome)
    }
}
