//! Frame rendering for the interactive form.

use std::fmt::Write as _;

use super::layout::build_form_layout;
use super::model::{Field, FormModel, SubmissionPhase};
use crate::present::Theme;
use crate::present::result::render_result;
use crate::present::widgets::{button, centered, rule, status_badge};

const TITLE: &str = "🏥 Insurance Premium Category Predictor";
const DISCLAIMER: &str = "This tool provides estimates for informational purposes only.";
const CITY_PLACEHOLDER: &str = "Enter your city";
const KEY_HELP: &str = "Tab/↑↓ move · ←/→ adjust · type to edit · Enter predict · Esc quit";

/// Render the full form frame, one `\n` per line.
#[must_use]
pub fn render(model: &FormModel, theme: &Theme) -> String {
    let mut out = String::new();
    let width = usize::from(model.terminal_size.0.max(20));
    let palette = theme.palette;

    let _ = writeln!(
        out,
        "{}",
        theme.paint_bold(&centered(TITLE, width), palette.accent)
    );
    let _ = writeln!(out, "{}", theme.paint(&rule(width), palette.muted));
    let _ = writeln!(out, "Enter your details below:");
    let _ = writeln!(out);

    let layout = build_form_layout(model.terminal_size.0);
    for row in &layout.rows {
        let mut line = String::new();
        for field in row {
            let cell = pad(&field_cell(model, *field), layout.column_width);
            let entry = if model.focus == *field {
                palette.accent
            } else {
                palette.neutral
            };
            line.push_str(&theme.paint(&cell, entry));
            line.push_str("  ");
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let _ = writeln!(out, "{}", theme.paint(&rule(width), palette.muted));
    let submit = button(Field::Submit.label(), model.focus == Field::Submit);
    let _ = writeln!(
        out,
        "{}",
        if model.focus == Field::Submit {
            theme.paint_bold(&submit, palette.accent)
        } else {
            submit
        }
    );
    let _ = writeln!(out);

    if model.phase == SubmissionPhase::Requesting {
        let _ = writeln!(
            out,
            "{} {}",
            status_badge("BUSY", palette.warning, theme.accessibility),
            theme.paint("⏳ Analyzing your profile...", palette.warning)
        );
        let _ = writeln!(out);
    } else if let Some(result) = &model.result {
        out.push_str(&render_result(result, theme, width));
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", theme.paint(&rule(width), palette.muted));
    let _ = writeln!(
        out,
        "{}",
        theme.paint(&centered(DISCLAIMER, width), palette.muted)
    );
    let _ = writeln!(
        out,
        "{}",
        theme.paint(&format!("{KEY_HELP} · POST {}", model.endpoint), palette.muted)
    );
    out
}

fn field_cell(model: &FormModel, field: Field) -> String {
    let focused = model.focus == field;
    let marker = if focused { "▸ " } else { "  " };
    let value = match field {
        Field::Smoker => {
            let choice = if model.form.smoker { "Yes" } else { "No" };
            if focused {
                format!("◀ {choice} ▶")
            } else {
                choice.to_string()
            }
        }
        Field::City => {
            if focused {
                format!("{}_", model.form.city)
            } else if model.form.city.is_empty() {
                format!("({CITY_PLACEHOLDER})")
            } else {
                model.form.city.clone()
            }
        }
        Field::Occupation => {
            let occupation = model.form.occupation.as_str();
            if focused {
                format!("◀ {occupation} ▶")
            } else {
                occupation.to_string()
            }
        }
        Field::Submit => String::new(),
        other => other.numeric().map_or_else(String::new, |n| {
            let text = model.numeric_text(n);
            if focused && model.edit_buffer.is_some() {
                format!("{text}_")
            } else {
                text
            }
        }),
    };
    format!("{marker}{}: {value}", field.label())
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}
