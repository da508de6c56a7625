//! Narrow element-inspection capability.
//!
//! Rule checks never touch a live document directly. They see elements only
//! through [`ElementView`]: tag name, bounding box, attributes, and resolved
//! style values. Everything richer (interactivity, focusability, heading
//! levels, labels) is derived from those primitives by the checks themselves,
//! which keeps host adapters small and lets tests substitute synthetic
//! elements.

/// Axis-aligned bounding box of a rendered element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which resolved-style variant a lookup targets.
///
/// `FocusVisible` is the style set the element would resolve with the
/// focus-visible pseudo-state applied. Hosts that cannot compute it should
/// return the `Normal` value; the focus check treats an unchanged value as a
/// missing indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleState {
    Normal,
    FocusVisible,
}

/// Read-only view of one element in the observed document.
pub trait ElementView {
    /// Lowercase tag name, e.g. `"button"` or `"h2"`.
    fn tag_name(&self) -> &str;

    /// Bounding box of the rendered element. Zero-sized for elements that
    /// are not rendered.
    fn bounding_box(&self) -> Rect;

    /// Attribute value, if the attribute is present (possibly empty).
    fn attribute(&self, name: &str) -> Option<String>;

    /// Resolved style value for the given property under the given state,
    /// if the host can compute it.
    fn style(&self, state: StyleState, property: &str) -> Option<String>;

    /// Whether the element directly carries rendered text.
    fn has_text(&self) -> bool;

    /// A stable, human-readable locator for this element, used to reference
    /// it from violations (e.g. a CSS-path-like string).
    fn locator(&self) -> String;
}

/// Flat snapshot of the current document, in document order.
pub trait DomView {
    fn elements(&self) -> Vec<&dyn ElementView>;
}
