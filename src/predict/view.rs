//! Immutable view state produced by one submission.
//!
//! A [`RenderedResult`] is everything a surface needs to draw the outcome:
//! tier styling, formatted confidence, ordered probability bars, or an error
//! banner. No terminal concerns live here.

use serde::Serialize;

use super::response::PredictionResponse;
use crate::core::errors::PredictorError;

/// Styling bucket derived from the predicted category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    /// Everything that is not low or medium, including unknown categories.
    Elevated,
}

impl RiskTier {
    /// Case-insensitive match against "low" and "medium"; anything else is
    /// elevated.
    #[must_use]
    pub fn classify(category: &str) -> Self {
        match category.to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            _ => Self::Elevated,
        }
    }

    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Low => "Great! You qualify for lower premium rates.",
            Self::Medium => "You fall into the standard premium range.",
            Self::Elevated => "Your profile indicates higher premium rates.",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Low => "✅",
            Self::Medium => "⚠️",
            Self::Elevated => "🔴",
        }
    }
}

/// One labelled proportional indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityBar {
    pub label: String,
    /// Raw probability as received.
    pub fraction: f64,
    /// `"<label>: <pct>"` with one decimal.
    pub caption: String,
}

/// Successful prediction, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    pub category: String,
    pub tier: RiskTier,
    pub headline: String,
    pub confidence: String,
    pub advice: &'static str,
    pub probabilities: Vec<ProbabilityBar>,
}

/// Failure class surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Connection,
    Http,
    MalformedResponse,
    Unexpected,
}

impl ErrorKind {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Validation => "⚠️",
            Self::Connection => "🔌",
            Self::Http | Self::MalformedResponse | Self::Unexpected => "❌",
        }
    }
}

/// Error banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBanner {
    pub kind: ErrorKind,
    pub code: &'static str,
    pub message: String,
}

/// Terminal state of one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RenderedResult {
    Prediction(PredictionView),
    Error(ErrorBanner),
}

impl RenderedResult {
    /// Build the success view from a parsed response.
    #[must_use]
    pub fn from_response(response: &PredictionResponse) -> Self {
        let tier = RiskTier::classify(&response.predicted_category);
        let probabilities = response
            .class_probabilities
            .iter()
            .map(|class| ProbabilityBar {
                label: class.class_name.clone(),
                fraction: class.probability,
                caption: format!(
                    "{}: {}",
                    class.class_name,
                    format_percent(class.probability, 1)
                ),
            })
            .collect();

        Self::Prediction(PredictionView {
            category: response.predicted_category.clone(),
            tier,
            headline: format!(
                "Predicted Premium Category: {}",
                response.predicted_category.to_uppercase()
            ),
            confidence: format!("Confidence: {}", format_percent(response.confidence, 0)),
            advice: tier.advice(),
            probabilities,
        })
    }

    /// Convert any submission failure into a banner.
    #[must_use]
    pub fn from_error(error: &PredictorError) -> Self {
        let (kind, message) = match error {
            PredictorError::Validation { message, .. } => (ErrorKind::Validation, message.clone()),
            PredictorError::Connection { endpoint, .. } => (
                ErrorKind::Connection,
                format!(
                    "Could not connect to the prediction server at {endpoint}. \
                     Make sure it's running."
                ),
            ),
            PredictorError::Http { status, body } => {
                (ErrorKind::Http, format!("API Error: {status} - {body}"))
            }
            PredictorError::MalformedResponse { details } => (
                ErrorKind::MalformedResponse,
                format!("Malformed response from prediction server: {details}"),
            ),
            other => (ErrorKind::Unexpected, format!("An error occurred: {other}")),
        };
        Self::Error(ErrorBanner {
            kind,
            code: error.code(),
            message,
        })
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Prediction(_))
    }
}

/// Format a unit fraction as a percentage with `decimals` places.
#[must_use]
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::response::ClassProbability;

    fn response(category: &str, confidence: f64) -> PredictionResponse {
        PredictionResponse {
            predicted_category: category.into(),
            confidence,
            class_probabilities: vec![
                ClassProbability {
                    class_name: "low".into(),
                    probability: 0.1,
                },
                ClassProbability {
                    class_name: "medium".into(),
                    probability: 0.3,
                },
                ClassProbability {
                    class_name: "high".into(),
                    probability: 0.6,
                },
            ],
        }
    }

    fn view(result: RenderedResult) -> PredictionView {
        match result {
            RenderedResult::Prediction(view) => view,
            RenderedResult::Error(banner) => panic!("unexpected banner {banner:?}"),
        }
    }

    #[test]
    fn low_category_gets_low_tier_and_whole_percent() {
        let v = view(RenderedResult::from_response(&response("low", 0.82)));
        assert_eq!(v.tier, RiskTier::Low);
        assert_eq!(v.confidence, "Confidence: 82%");
        assert_eq!(v.headline, "Predicted Premium Category: LOW");
        assert_eq!(v.advice, "Great! You qualify for lower premium rates.");
    }

    #[test]
    fn mixed_case_medium_matches() {
        let v = view(RenderedResult::from_response(&response("Medium", 0.5)));
        assert_eq!(v.tier, RiskTier::Medium);
        assert_eq!(v.confidence, "Confidence: 50%");
        assert_eq!(v.category, "Medium");
    }

    #[test]
    fn high_and_unknown_categories_are_indistinguishable() {
        let high = view(RenderedResult::from_response(&response("high", 0.7)));
        let critical = view(RenderedResult::from_response(&response("critical", 0.7)));
        assert_eq!(high.tier, RiskTier::Elevated);
        assert_eq!(critical.tier, high.tier);
        assert_eq!(critical.advice, high.advice);
    }

    #[test]
    fn probability_bars_keep_order_and_one_decimal() {
        let v = view(RenderedResult::from_response(&response("high", 0.6)));
        let captions: Vec<_> = v.probabilities.iter().map(|b| b.caption.as_str()).collect();
        assert_eq!(captions, ["low: 10.0%", "medium: 30.0%", "high: 60.0%"]);
    }

    #[test]
    fn error_kinds_map_from_errors() {
        let http = RenderedResult::from_error(&PredictorError::Http {
            status: 500,
            body: "internal error".into(),
        });
        let RenderedResult::Error(banner) = http else {
            panic!("expected banner");
        };
        assert_eq!(banner.kind, ErrorKind::Http);
        assert!(banner.message.contains("500"));
        assert!(banner.message.contains("internal error"));

        let conn = RenderedResult::from_error(&PredictorError::Connection {
            endpoint: "http://localhost:8000/predict".into(),
            details: "refused".into(),
        });
        let other = RenderedResult::from_error(&PredictorError::Runtime {
            details: "timed out".into(),
        });
        let (RenderedResult::Error(conn), RenderedResult::Error(other)) = (conn, other) else {
            panic!("expected banners");
        };
        assert_eq!(conn.kind, ErrorKind::Connection);
        assert!(conn.message.starts_with("Could not connect"));
        assert_eq!(other.kind, ErrorKind::Unexpected);
        assert!(other.message.starts_with("An error occurred:"));
        assert!(other.message.contains("timed out"));
    }

    #[test]
    fn percent_rounding() {
        assert_eq!(format_percent(0.82, 0), "82%");
        assert_eq!(format_percent(0.0, 1), "0.0%");
        assert_eq!(format_percent(1.0, 0), "100%");
    }
}
