//! Shared theme tokens and accessibility profile hooks for terminal rendering.

#![allow(missing_docs)]

use std::env;

use colored::{Color, Colorize};

use crate::core::config::UiConfig;
use crate::predict::{ErrorKind, RiskTier};

/// Contrast profile used by theme token selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastMode {
    Standard,
    High,
}

/// Color output mode for compatibility with `NO_COLOR` and terminal policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Enabled,
    Disabled,
}

/// Accessibility knobs consumed by theme and widget primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityProfile {
    pub contrast: ContrastMode,
    pub color: ColorMode,
}

impl Default for AccessibilityProfile {
    fn default() -> Self {
        Self {
            contrast: ContrastMode::Standard,
            color: ColorMode::Enabled,
        }
    }
}

impl AccessibilityProfile {
    #[must_use]
    pub const fn from_no_color_flag(no_color: bool) -> Self {
        Self {
            contrast: ContrastMode::Standard,
            color: if no_color {
                ColorMode::Disabled
            } else {
                ColorMode::Enabled
            },
        }
    }

    /// Whether `NO_COLOR` is present in the process environment.
    #[must_use]
    pub fn env_no_color() -> bool {
        env::var_os("NO_COLOR").is_some()
    }

    /// Combine config file settings with the `--no-color` flag and `NO_COLOR`.
    #[must_use]
    pub const fn from_settings(ui: &UiConfig, flag_no_color: bool, env_no_color: bool) -> Self {
        Self {
            contrast: if ui.high_contrast {
                ContrastMode::High
            } else {
                ContrastMode::Standard
            },
            color: if ui.no_color || flag_no_color || env_no_color {
                ColorMode::Disabled
            } else {
                ColorMode::Enabled
            },
        }
    }

    #[must_use]
    pub const fn no_color(self) -> bool {
        matches!(self.color, ColorMode::Disabled)
    }
}

/// Semantic token category independent of concrete color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticToken {
    Accent,
    Success,
    Warning,
    Danger,
    Info,
    Muted,
    Neutral,
}

/// Render-facing palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub token: SemanticToken,
    pub color: Color,
    pub text_tag: &'static str,
}

impl PaletteEntry {
    const fn new(token: SemanticToken, color: Color, text_tag: &'static str) -> Self {
        Self {
            token,
            color,
            text_tag,
        }
    }
}

/// Shared semantic palette for the form and result surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub accent: PaletteEntry,
    pub success: PaletteEntry,
    pub warning: PaletteEntry,
    pub danger: PaletteEntry,
    pub info: PaletteEntry,
    pub muted: PaletteEntry,
    pub neutral: PaletteEntry,
}

impl ThemePalette {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            accent: PaletteEntry::new(SemanticToken::Accent, Color::Cyan, "accent"),
            success: PaletteEntry::new(SemanticToken::Success, Color::Green, "ok"),
            warning: PaletteEntry::new(SemanticToken::Warning, Color::Yellow, "warn"),
            danger: PaletteEntry::new(SemanticToken::Danger, Color::Red, "danger"),
            info: PaletteEntry::new(SemanticToken::Info, Color::Blue, "info"),
            muted: PaletteEntry::new(SemanticToken::Muted, Color::BrightBlack, "muted"),
            neutral: PaletteEntry::new(SemanticToken::Neutral, Color::White, "normal"),
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            accent: PaletteEntry::new(SemanticToken::Accent, Color::BrightCyan, "accent"),
            success: PaletteEntry::new(SemanticToken::Success, Color::BrightGreen, "ok"),
            warning: PaletteEntry::new(SemanticToken::Warning, Color::BrightYellow, "warn"),
            danger: PaletteEntry::new(SemanticToken::Danger, Color::BrightRed, "danger"),
            info: PaletteEntry::new(SemanticToken::Info, Color::BrightBlue, "info"),
            muted: PaletteEntry::new(SemanticToken::Muted, Color::White, "muted"),
            neutral: PaletteEntry::new(SemanticToken::Neutral, Color::BrightWhite, "normal"),
        }
    }

    #[must_use]
    pub const fn from_contrast(mode: ContrastMode) -> Self {
        match mode {
            ContrastMode::Standard => Self::standard(),
            ContrastMode::High => Self::high_contrast(),
        }
    }

    /// Styling for a prediction tier. Elevated covers every unknown category.
    #[must_use]
    pub const fn for_tier(self, tier: RiskTier) -> PaletteEntry {
        match tier {
            RiskTier::Low => self.success,
            RiskTier::Medium => self.warning,
            RiskTier::Elevated => self.danger,
        }
    }

    /// Every failure renders as a danger banner.
    #[must_use]
    pub const fn for_error(self, _kind: ErrorKind) -> PaletteEntry {
        self.danger
    }
}

/// Full render theme (palette + accessibility profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accessibility: AccessibilityProfile,
    pub palette: ThemePalette,
}

impl Theme {
    #[must_use]
    pub const fn new(accessibility: AccessibilityProfile) -> Self {
        Self {
            palette: ThemePalette::from_contrast(accessibility.contrast),
            accessibility,
        }
    }

    /// Apply a palette color, or return the text untouched in no-color mode.
    #[must_use]
    pub fn paint(&self, text: &str, entry: PaletteEntry) -> String {
        if self.accessibility.no_color() {
            text.to_string()
        } else {
            text.color(entry.color).to_string()
        }
    }

    /// Bold variant of [`Theme::paint`].
    #[must_use]
    pub fn paint_bold(&self, text: &str, entry: PaletteEntry) -> String {
        if self.accessibility.no_color() {
            text.to_string()
        } else {
            text.color(entry.color).bold().to_string()
        }
    }
}
