//! Widget primitives shared by the one-shot output and the interactive form.

#![allow(missing_docs)]

use super::theme::{AccessibilityProfile, PaletteEntry};

/// Horizontal rule, the terminal stand-in for a page divider.
#[must_use]
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Render a proportional bar for a `0.0..=1.0` fraction.
///
/// Out-of-range fractions are clamped for drawing only.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn proportion_bar(fraction: f64, width: usize) -> String {
    let clamped = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (clamped * width as f64).round() as usize;
    let filled = filled.min(width);
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Render a semantic badge honoring no-color compatibility mode.
#[must_use]
pub fn status_badge(
    label: &str,
    palette: PaletteEntry,
    accessibility: AccessibilityProfile,
) -> String {
    if accessibility.no_color() {
        format!("[{label}]")
    } else {
        format!("[{}:{label}]", palette.text_tag)
    }
}

/// Button caption, bracketed and optionally highlighted as focused.
#[must_use]
pub fn button(label: &str, focused: bool) -> String {
    if focused {
        format!("▶ [ {label} ] ◀")
    } else {
        format!("  [ {label} ]  ")
    }
}

/// Center `text` within `width` columns (by char count).
#[must_use]
pub fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{text}", " ".repeat(pad))
}
