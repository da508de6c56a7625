//! Image alternative text and form control labels.

use std::collections::HashSet;

use page_model::{DomView, ElementView};

use crate::check::{CheckError, CheckOutcome, RuleCheck, Severity, Violation, ViolationKind};
use crate::inspect;

const IMAGE_STANDARD: &str = "WCAG 1.1.1";
const LABEL_STANDARD: &str = "WCAG 3.3.2";

/// Every image needs alternative text or an equivalent label reference;
/// every form control needs an associated label, label reference, or direct
/// accessible name.
///
/// An `alt=""` attribute marks a decorative image and passes; a missing
/// `alt` attribute fails.
#[derive(Debug, Default)]
pub struct LabelingCheck;

impl RuleCheck for LabelingCheck {
    fn name(&self) -> &'static str {
        "labeling"
    }

    fn run(&self, dom: &dyn DomView) -> Result<CheckOutcome, CheckError> {
        let mut outcome = CheckOutcome::new();
        let elements = dom.elements();

        // ids referenced by <label for="..."> anywhere on the page.
        let labeled_ids: HashSet<String> = elements
            .iter()
            .filter(|el| el.tag_name() == "label")
            .filter_map(|el| el.attribute("for"))
            .filter(|id| !id.is_empty())
            .collect();

        for el in &elements {
            if inspect::is_image(*el) {
                let labeled =
                    el.attribute("alt").is_some() || inspect::has_direct_accessible_name(*el);
                if labeled {
                    outcome.pass();
                } else {
                    outcome.fail(
                        Violation::new(
                            ViolationKind::Aria,
                            Severity::High,
                            "image is missing alternative text",
                            IMAGE_STANDARD,
                        )
                        .at(el.locator()),
                    );
                }
            } else if inspect::is_form_control(*el) {
                let labeled = inspect::has_direct_accessible_name(*el)
                    || el
                        .attribute("id")
                        .map_or(false, |id| labeled_ids.contains(&id));
                if labeled {
                    outcome.pass();
                } else {
                    outcome.fail(
                        Violation::new(
                            ViolationKind::Aria,
                            Severity::High,
                            "form control has no associated label",
                            LABEL_STANDARD,
                        )
                        .at(el.locator()),
                    );
                }
            }
        }

        Ok(outcome)
    }
}
