//! Keyboard reachability.

use page_model::{DomView, ElementView};

use crate::check::{CheckError, CheckOutcome, RuleCheck, Severity, Violation, ViolationKind};
use crate::inspect;

const STANDARD: &str = "WCAG 2.1.1";

/// Interactive elements must not be removed from the keyboard order with a
/// negative tabindex unless they are explicitly hidden from assistive
/// technology.
#[derive(Debug, Default)]
pub struct KeyboardCheck;

impl RuleCheck for KeyboardCheck {
    fn name(&self) -> &'static str {
        "keyboard"
    }

    fn run(&self, dom: &dyn DomView) -> Result<CheckOutcome, CheckError> {
        let mut outcome = CheckOutcome::new();

        for el in dom.elements() {
            if !inspect::is_interactive(el) {
                continue;
            }
            if inspect::tab_index(el) < 0 && !inspect::is_aria_hidden(el) {
                outcome.fail(
                    Violation::new(
                        ViolationKind::Keyboard,
                        Severity::High,
                        "interactive element is not reachable from the keyboard",
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
