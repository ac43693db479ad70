//! Typed parse of the prediction service's success body.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::errors::{PredictorError, Result};

/// Probability the backend assigns to one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassProbability {
    pub class_name: String,
    pub probability: f64,
}

/// Parsed `response` object from an HTTP 200 body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    pub predicted_category: String,
    pub confidence: f64,
    /// In the order the backend sent them.
    pub class_probabilities: Vec<ClassProbability>,
}

impl PredictionResponse {
    /// Parse a success body of the form
    /// `{"response": {"predicted_category", "confidence", "class_probabilities"}}`.
    ///
    /// Absent or mistyped fields yield [`PredictorError::MalformedResponse`].
    pub fn parse(body: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(body)
            .map_err(|e| PredictorError::malformed(format!("body is not valid JSON: {e}")))?;
        let payload = required(root.as_object(), "response")?
            .as_object()
            .ok_or_else(|| PredictorError::malformed("field `response` is not an object"))?;

        let predicted_category = required(Some(payload), "predicted_category")?
            .as_str()
            .ok_or_else(|| PredictorError::malformed("field `predicted_category` is not a string"))?
            .to_string();

        let confidence = required(Some(payload), "confidence")?
            .as_f64()
            .ok_or_else(|| PredictorError::malformed("field `confidence` is not a number"))?;

        let class_probabilities = required(Some(payload), "class_probabilities")?
            .as_object()
            .ok_or_else(|| {
                PredictorError::malformed("field `class_probabilities` is not an object")
            })?
            .iter()
            .map(|(class_name, value)| {
                value
                    .as_f64()
                    .map(|probability| ClassProbability {
                        class_name: class_name.clone(),
                        probability,
                    })
                    .ok_or_else(|| {
                        PredictorError::malformed(format!(
                            "class probability for `{class_name}` is not a number"
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            predicted_category,
            confidence,
            class_probabilities,
        })
    }
}

fn required<'a>(object: Option<&'a Map<String, Value>>, key: &str) -> Result<&'a Value> {
    object
        .and_then(|map| map.get(key))
        .ok_or_else(|| PredictorError::malformed(format!("missing field `{key}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_response() {
        let body = r#"{"response":{"predicted_category":"Medium","confidence":0.64,
            "class_probabilities":{"low":0.1,"medium":0.64,"high":0.26}}}"#;
        let parsed = PredictionResponse::parse(body).unwrap();
        assert_eq!(parsed.predicted_category, "Medium");
        assert!((parsed.confidence - 0.64).abs() < f64::EPSILON);
        assert_eq!(parsed.class_probabilities.len(), 3);
    }

    #[test]
    fn class_order_follows_the_wire_not_the_alphabet() {
        let body = r#"{"response":{"predicted_category":"high","confidence":0.5,
            "class_probabilities":{"medium":0.2,"low":0.3,"high":0.5}}}"#;
        let names: Vec<_> = PredictionResponse::parse(body)
            .unwrap()
            .class_probabilities
            .into_iter()
            .map(|c| c.class_name)
            .collect();
        assert_eq!(names, ["medium", "low", "high"]);
    }

    #[test]
    fn integer_confidence_is_accepted() {
        let body = r#"{"response":{"predicted_category":"low","confidence":1,"class_probabilities":{}}}"#;
        let parsed = PredictionResponse::parse(body).unwrap();
        assert!((parsed.confidence - 1.0).abs() < f64::EPSILON);
        assert!(parsed.class_probabilities.is_empty());
    }

    #[test]
    fn missing_keys_name_the_field() {
        let cases = [
            (r#"{"prediction":{}}"#, "`response`"),
            (r#"[1,2,3]"#, "`response`"),
            (
                r#"{"response":{"confidence":0.5,"class_probabilities":{}}}"#,
                "`predicted_category`",
            ),
            (
                r#"{"response":{"predicted_category":"low","class_probabilities":{}}}"#,
                "`confidence`",
            ),
            (
                r#"{"response":{"predicted_category":"low","confidence":0.5}}"#,
                "`class_probabilities`",
            ),
        ];
        for (body, needle) in cases {
            let err = PredictionResponse::parse(body).unwrap_err();
            assert_eq!(err.code(), "PP-2004", "{body}");
            assert!(err.to_string().contains(needle), "{err} lacks {needle}");
        }
    }

    #[test]
    fn mistyped_values_are_malformed() {
        let body = r#"{"response":{"predicted_category":"low","confidence":"high",
            "class_probabilities":{}}}"#;
        assert_eq!(PredictionResponse::parse(body).unwrap_err().code(), "PP-2004");

        let body = r#"{"response":{"predicted_category":"low","confidence":0.9,
            "class_probabilities":{"low":"0.9"}}}"#;
        let err = PredictionResponse::parse(body).unwrap_err();
        assert!(err.to_string().contains("`low`"));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = PredictionResponse::parse("<html>oops</html>").unwrap_err();
        assert!(matches!(err, PredictorError::MalformedResponse { .. }));
    }
}
