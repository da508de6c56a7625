//! Element semantics derived from the narrow inspection capability.
//!
//! `page_model` deliberately exposes only tags, attributes, boxes, and
//! resolved styles. Everything the checks reason about — interactivity,
//! focusability, heading structure, labels — is derived here so that every
//! check classifies elements the same way.

use page_model::ElementView;

const INTERACTIVE_TAGS: [&str; 6] = ["a", "button", "input", "select", "textarea", "summary"];

const INTERACTIVE_ROLES: [&str; 8] = [
    "button", "link", "checkbox", "radio", "switch", "menuitem", "tab", "slider",
];

/// Whether the element takes pointer/keyboard interaction.
pub fn is_interactive(el: &dyn ElementView) -> bool {
    if el.tag_name() == "input" && attr_eq(el, "type", "hidden") {
        return false;
    }
    if INTERACTIVE_TAGS.contains(&el.tag_name()) {
        return true;
    }
    match el.attribute("role") {
        Some(role) => INTERACTIVE_ROLES.contains(&role.as_str()),
        None => false,
    }
}

/// Whether the element participates in focus traversal.
pub fn is_focusable(el: &dyn ElementView) -> bool {
    if is_interactive(el) {
        return tab_index(el) >= 0;
    }
    tab_index_attr(el).map_or(false, |idx| idx >= 0)
}

/// Effective tabindex: the explicit attribute, or 0 for natively
/// interactive elements.
pub fn tab_index(el: &dyn ElementView) -> i32 {
    tab_index_attr(el).unwrap_or(0)
}

fn tab_index_attr(el: &dyn ElementView) -> Option<i32> {
    el.attribute("tabindex")?.trim().parse().ok()
}

/// Whether the element is explicitly hidden from assistive technology.
pub fn is_aria_hidden(el: &dyn ElementView) -> bool {
    attr_eq(el, "aria-hidden", "true")
}

/// Heading level for `h1`..`h6` or `role="heading"` with `aria-level`.
pub fn heading_level(el: &dyn ElementView) -> Option<u8> {
    match el.tag_name() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ if attr_eq(el, "role", "heading") => el
            .attribute("aria-level")
            .and_then(|level| level.trim().parse().ok()),
        _ => None,
    }
}

/// Whether the element is the page's main content landmark.
pub fn is_main_landmark(el: &dyn ElementView) -> bool {
    el.tag_name() == "main" || attr_eq(el, "role", "main")
}

pub fn is_image(el: &dyn ElementView) -> bool {
    el.tag_name() == "img" || attr_eq(el, "role", "img")
}

/// Form controls that require an associated label. Hidden inputs and
/// buttons label themselves and are excluded.
pub fn is_form_control(el: &dyn ElementView) -> bool {
    match el.tag_name() {
        "select" | "textarea" => true,
        "input" => !matches!(
            el.attribute("type").as_deref(),
            Some("hidden") | Some("button") | Some("submit") | Some("reset")
        ),
        _ => false,
    }
}

/// Whether the element carries a direct accessible name via ARIA or title.
pub fn has_direct_accessible_name(el: &dyn ElementView) -> bool {
    has_attr_value(el, "aria-label")
        || has_attr_value(el, "aria-labelledby")
        || has_attr_value(el, "title")
}

fn has_attr_value(el: &dyn ElementView, name: &str) -> bool {
    el.attribute(name).map_or(false, |v| !v.trim().is_empty())
}

fn attr_eq(el: &dyn ElementView, name: &str, value: &str) -> bool {
    el.attribute(name).as_deref() == Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_model::mock::MockElement;

    #[test]
    fn test_interactive_classification() {
        assert!(is_interactive(&MockElement::new("button")));
        assert!(is_interactive(&MockElement::new("a")));
        assert!(is_interactive(
            &MockElement::new("div").with_attr("role", "button")
        ));
        assert!(!is_interactive(&MockElement::new("div")));
        assert!(!is_interactive(
            &MockElement::new("input").with_attr("type", "hidden")
        ));
    }

    #[test]
    fn test_focusable_respects_tabindex() {
        assert!(is_focusable(&MockElement::new("button")));
        assert!(!is_focusable(
            &MockElement::new("button").with_attr("tabindex", "-1")
        ));
        assert!(is_focusable(
            &MockElement::new("div").with_attr("tabindex", "0")
        ));
        assert!(!is_focusable(&MockElement::new("div")));
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_level(&MockElement::new("h3")), Some(3));
        assert_eq!(heading_level(&MockElement::new("p")), None);
        assert_eq!(
            heading_level(
                &MockElement::new("div")
                    .with_attr("role", "heading")
                    .with_attr("aria-level", "2")
            ),
            Some(2)
        );
    }

    #[test]
    fn test_landmark_and_image() {
        assert!(is_main_landmark(&MockElement::new("main")));
        assert!(is_main_landmark(
            &MockElement::new("div").with_attr("role", "main")
        ));
        assert!(is_image(&MockElement::new("img")));
    }

    #[test]
    fn test_form_control_excludes_buttonlike_inputs() {
        assert!(is_form_control(&MockElement::new("select")));
        assert!(is_form_control(
            &MockElement::new("input").with_attr("type", "email")
        ));
        assert!(!is_form_control(
            &MockElement::new("input").with_attr("type", "submit")
        ));
    }

    #[test]
    fn test_direct_accessible_name() {
        assert!(has_direct_accessible_name(
            &MockElement::new("input").with_attr("aria-label", "Email")
        ));
        // Whitespace-only values do not name anything.
        assert!(!has_direct_accessible_name(
            &MockElement::new("input").with_attr("aria-label", "  ")
        ));
        assert!(!has_direct_accessible_name(&MockElement::new("input")));
    }
}
