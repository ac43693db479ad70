//! Text rendering of a [`RenderedResult`] for terminals.

use std::fmt::Write as _;

use super::theme::Theme;
use super::widgets::proportion_bar;
use crate::predict::{ErrorBanner, PredictionView, RenderedResult};

/// Widest probability bar drawn, in cells.
const MAX_BAR_WIDTH: usize = 40;

/// Render a submission outcome as terminal text, one `\n` per line.
#[must_use]
pub fn render_result(result: &RenderedResult, theme: &Theme, width: usize) -> String {
    match result {
        RenderedResult::Prediction(view) => render_prediction(view, theme, width),
        RenderedResult::Error(banner) => render_banner(banner, theme),
    }
}

fn render_prediction(view: &PredictionView, theme: &Theme, width: usize) -> String {
    let mut out = String::new();
    let entry = theme.palette.for_tier(view.tier);
    let icon = view.tier.icon();

    let _ = writeln!(
        out,
        "{}",
        theme.paint_bold(&format!("{icon} {}", view.headline), entry)
    );
    let _ = writeln!(out, "{}", theme.paint(&format!("🎯 {}", view.confidence), entry));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        theme.paint(&format!("💡 {}", view.advice), theme.palette.info)
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        theme.paint_bold("📊 Detailed Probability Breakdown", theme.palette.accent)
    );
    let _ = writeln!(out, "Class Probabilities:");

    let bar_width = width.saturating_sub(2).clamp(10, MAX_BAR_WIDTH);
    for bar in &view.probabilities {
        let _ = writeln!(out, "  {}", bar.caption);
        let _ = writeln!(
            out,
            "  {}",
            theme.paint(&proportion_bar(bar.fraction, bar_width), theme.palette.accent)
        );
    }
    out
}

fn render_banner(banner: &ErrorBanner, theme: &Theme) -> String {
    let entry = theme.palette.for_error(banner.kind);
    format!(
        "{}\n",
        theme.paint_bold(&format!("{} {}", banner.kind.icon(), banner.message), entry)
    )
}
