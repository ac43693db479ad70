//! Applicant form state and the wire request built from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::{PredictorError, Result};

/// Occupations accepted by the prediction service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(
    feature = "cli",
    derive(clap::ValueEnum),
    value(rename_all = "snake_case")
)]
pub enum Occupation {
    #[default]
    Retired,
    Freelancer,
    Student,
    GovernmentJob,
    BusinessOwner,
    Unemployed,
    PrivateJob,
}

impl Occupation {
    /// Every occupation in display order.
    pub const ALL: [Self; 7] = [
        Self::Retired,
        Self::Freelancer,
        Self::Student,
        Self::GovernmentJob,
        Self::BusinessOwner,
        Self::Unemployed,
        Self::PrivateJob,
    ];

    /// Wire value sent to the prediction service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Retired => "retired",
            Self::Freelancer => "freelancer",
            Self::Student => "student",
            Self::GovernmentJob => "government_job",
            Self::BusinessOwner => "business_owner",
            Self::Unemployed => "unemployed",
            Self::PrivateJob => "private_job",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|o| *o == self).unwrap_or(0)
    }

    /// Next occupation, wrapping at the end of the list.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous occupation, wrapping at the start of the list.
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occupation {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| PredictorError::Validation {
                field: "occupation",
                message: format!("unknown occupation {s:?}"),
            })
    }
}

/// Numeric inputs on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Age,
    Weight,
    Height,
    IncomeLpa,
}

/// Widget bounds for a numeric input. `max: None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: Option<f64>,
    pub step: f64,
    pub default: f64,
}

impl FieldBounds {
    /// Clamp `value` into range; non-finite input falls back to the default.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let lower = value.max(self.min);
        self.max.map_or(lower, |max| lower.min(max))
    }
}

impl NumericField {
    /// Input label as shown on the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Weight => "Weight (kg)",
            Self::Height => "Height (m)",
            Self::IncomeLpa => "Annual Income (LPA)",
        }
    }

    #[must_use]
    pub const fn bounds(self) -> FieldBounds {
        match self {
            Self::Age => FieldBounds {
                min: 1.0,
                max: Some(119.0),
                step: 1.0,
                default: 25.0,
            },
            Self::Weight => FieldBounds {
                min: 1.0,
                max: None,
                step: 0.01,
                default: 70.0,
            },
            Self::Height => FieldBounds {
                min: 0.5,
                max: None,
                step: 0.01,
                default: 1.7,
            },
            Self::IncomeLpa => FieldBounds {
                min: 0.1,
                max: None,
                step: 0.01,
                default: 5.0,
            },
        }
    }

    /// Whether the input only accepts whole numbers.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Age)
    }
}

/// Current values of every form input.
///
/// Numeric setters clamp like the input widgets do; `city` is kept exactly as
/// typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantForm {
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub income_lpa: f64,
    pub smoker: bool,
    pub city: String,
    pub occupation: Occupation,
}

impl Default for ApplicantForm {
    fn default() -> Self {
        Self {
            age: 25,
            weight: 70.0,
            height: 1.7,
            income_lpa: 5.0,
            smoker: false,
            city: String::new(),
            occupation: Occupation::default(),
        }
    }
}

impl ApplicantForm {
    /// Read a numeric field as `f64`.
    #[must_use]
    pub fn get(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Age => f64::from(self.age),
            NumericField::Weight => self.weight,
            NumericField::Height => self.height,
            NumericField::IncomeLpa => self.income_lpa,
        }
    }

    /// Set a numeric field, clamping into its bounds. Returns `true` when the
    /// stored value differs from `value`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set(&mut self, field: NumericField, value: f64) -> bool {
        let bounds = field.bounds();
        let clamped = bounds.clamp(value);
        match field {
            NumericField::Age => {
                let whole = bounds.clamp(clamped.round());
                self.age = whole as u32;
                (whole - value).abs() > f64::EPSILON
            }
            NumericField::Weight => {
                self.weight = clamped;
                clamped.to_bits() != value.to_bits()
            }
            NumericField::Height => {
                self.height = clamped;
                clamped.to_bits() != value.to_bits()
            }
            NumericField::IncomeLpa => {
                self.income_lpa = clamped;
                clamped.to_bits() != value.to_bits()
            }
        }
    }

    /// Move a numeric field by `steps` increments of its widget step.
    pub fn nudge(&mut self, field: NumericField, steps: i32) {
        let bounds = field.bounds();
        let raw = bounds.step.mul_add(f64::from(steps), self.get(field));
        // Round to the step grid so repeated nudges don't accumulate drift.
        let snapped = (raw / bounds.step).round() * bounds.step;
        self.set(field, (snapped * 100.0).round() / 100.0);
    }
}

/// JSON body POSTed to the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub income_lpa: f64,
    pub smoker: bool,
    pub city: String,
    pub occupation: Occupation,
}

impl PredictionRequest {
    /// Validate the form and assemble the wire request.
    ///
    /// The only rule is a non-blank city; the city itself is sent untrimmed.
    pub fn from_form(form: &ApplicantForm) -> Result<Self> {
        if form.city.trim().is_empty() {
            return Err(PredictorError::Validation {
                field: "city",
                message: "Please enter your city name.".to_string(),
            });
        }
        Ok(Self {
            age: form.age,
            weight: form.weight,
            height: form.height,
            income_lpa: form.income_lpa,
            smoker: form.smoker,
            city: form.city.clone(),
            occupation: form.occupation,
        })
    }
}
