//! Elm-style state model for the interactive prediction form.
//!
//! All display state lives in [`FormModel`]. Key input arrives as
//! [`FormMsg`] values; the network call is represented as a [`FormCmd`]
//! returned from the update function.
//!
//! **Design invariant:** the model is deterministic and testable, no I/O
//! happens here.

use crate::predict::{ApplicantForm, NumericField, PredictionRequest, RenderedResult};

// ──────────────────── fields ────────────────────

/// Focusable elements of the form, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Field {
    #[default]
    Age,
    Weight,
    Height,
    IncomeLpa,
    Smoker,
    City,
    Occupation,
    Submit,
}

impl Field {
    /// Tab order.
    pub const ORDER: [Self; 8] = [
        Self::Age,
        Self::Weight,
        Self::Height,
        Self::IncomeLpa,
        Self::Smoker,
        Self::City,
        Self::Occupation,
        Self::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping Submit → Age.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous field, wrapping Age → Submit.
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => NumericField::Age.label(),
            Self::Weight => NumericField::Weight.label(),
            Self::Height => NumericField::Height.label(),
            Self::IncomeLpa => NumericField::IncomeLpa.label(),
            Self::Smoker => "Are you a smoker?",
            Self::City => "City",
            Self::Occupation => "Occupation",
            Self::Submit => "🔮 Predict Premium Category",
        }
    }

    /// The numeric input behind this field, if any.
    #[must_use]
    pub const fn numeric(self) -> Option<NumericField> {
        match self {
            Self::Age => Some(NumericField::Age),
            Self::Weight => Some(NumericField::Weight),
            Self::Height => Some(NumericField::Height),
            Self::IncomeLpa => Some(NumericField::IncomeLpa),
            _ => None,
        }
    }
}

// ──────────────────── actions ────────────────────

/// Key-level intents after terminal events are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    NextField,
    PrevField,
    /// Step a numeric field up, toggle the smoker choice, or cycle occupation.
    Increase,
    Decrease,
    Insert(char),
    Backspace,
    Submit,
    Quit,
    Ignore,
}

// ──────────────────── submission state ────────────────────

/// Where the current submission is. Every terminal outcome returns to `Idle`
/// with `FormModel::result` holding what to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// One request is in flight; input is ignored until it resolves.
    Requesting,
}

// ──────────────────── model ────────────────────

/// Complete display state for the form.
#[derive(Debug)]
pub struct FormModel {
    /// Committed input values.
    pub form: ApplicantForm,
    /// Focused element.
    pub focus: Field,
    /// Uncommitted text typed into the focused numeric field.
    pub edit_buffer: Option<String>,
    pub phase: SubmissionPhase,
    /// Outcome of the most recent submission (or local validation).
    pub result: Option<RenderedResult>,
    /// Terminal dimensions (columns, rows).
    pub terminal_size: (u16, u16),
    /// Where submissions are sent, shown in the footer.
    pub endpoint: String,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl FormModel {
    /// Create a model with the widget defaults.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, terminal_size: (u16, u16)) -> Self {
        Self {
            form: ApplicantForm::default(),
            focus: Field::default(),
            edit_buffer: None,
            phase: SubmissionPhase::Idle,
            result: None,
            terminal_size,
            endpoint: endpoint.into(),
            quit: false,
        }
    }

    /// Fold the edit buffer into the focused numeric field.
    ///
    /// Unparseable text is discarded and the previous value kept; parsed
    /// values are clamped by the field bounds.
    pub fn commit_edit(&mut self) {
        let Some(buffer) = self.edit_buffer.take() else {
            return;
        };
        let Some(field) = self.focus.numeric() else {
            return;
        };
        if let Ok(value) = buffer.trim().parse::<f64>() {
            self.form.set(field, value);
        }
    }

    /// Display text for a numeric field, honoring an in-progress edit.
    #[must_use]
    pub fn numeric_text(&self, field: NumericField) -> String {
        if self.focus.numeric() == Some(field) {
            if let Some(buffer) = &self.edit_buffer {
                return buffer.clone();
            }
        }
        format_numeric(field, self.form.get(field))
    }
}

/// Widget formatting: integers bare, reals with two decimals.
#[must_use]
pub fn format_numeric(field: NumericField, value: f64) -> String {
    if field.is_integer() {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

// ──────────────────── messages ────────────────────

/// Events that drive state transitions in the form model.
#[derive(Debug)]
pub enum FormMsg {
    Action(FormAction),
    /// Terminal was resized.
    Resize { cols: u16, rows: u16 },
    /// The in-flight request resolved.
    Completed(Box<RenderedResult>),
}

// ──────────────────── commands ────────────────────

/// Side-effects returned by the update function for the runtime to execute.
#[derive(Debug, PartialEq)]
pub enum FormCmd {
    None,
    /// POST this validated request and deliver `Completed`.
    Submit(PredictionRequest),
    Quit,
}

// ──────────────────── tests ────────────────────
