//! Terminal presentation shared by the one-shot command and the interactive
//! form: theme tokens, widget primitives, and result rendering.

pub mod result;
pub mod theme;
pub mod widgets;

pub use result::render_result;
pub use theme::{AccessibilityProfile, Theme};
