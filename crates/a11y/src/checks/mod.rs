//! The six rule checks, in battery order.

mod contrast;
mod focus;
mod keyboard;
mod labeling;
mod semantic;
mod touch_target;

pub use contrast::ContrastCheck;
pub use focus::FocusCheck;
pub use keyboard::KeyboardCheck;
pub use labeling::LabelingCheck;
pub use semantic::SemanticCheck;
pub use touch_target::TouchTargetCheck;
