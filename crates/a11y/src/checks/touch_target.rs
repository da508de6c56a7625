//! Minimum interactive target size.

use page_model::{DomView, ElementView};

use crate::check::{CheckError, CheckOutcome, RuleCheck, Severity, Violation, ViolationKind};
use crate::inspect;

const STANDARD: &str = "WCAG 2.5.5";

/// Every interactive element's bounding box must be at least the configured
/// minimum on both axes (default 44×44 CSS pixels).
#[derive(Debug)]
pub struct TouchTargetCheck {
    minimum: f64,
}

impl Default for TouchTargetCheck {
    fn default() -> Self {
        Self { minimum: 44.0 }
    }
}

impl TouchTargetCheck {
    /// Override the minimum edge length.
    pub fn with_minimum(minimum: f64) -> Self {
        Self { minimum }
    }
}

impl RuleCheck for TouchTargetCheck {
    fn name(&self) -> &'static str {
        "touch-target"
    }

    fn run(&self, dom: &dyn DomView) -> Result<CheckOutcome, CheckError> {
        let mut outcome = CheckOutcome::new();

        for el in dom.elements() {
            if !inspect::is_interactive(el) {
                continue;
            }
            let rect = el.bounding_box();
            if rect.width < self.minimum || rect.height < self.minimum {
                outcome.fail(
                    Violation::new(
                        ViolationKind::TouchTarget,
                        Severity::Medium,
                        format!(
                            "touch target is {:.0}x{:.0}, below the {:.0}x{:.0} minimum",
                            rect.width, rect.height, self.minimum, self.minimum
                        ),
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
