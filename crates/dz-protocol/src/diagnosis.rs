use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clinical::ClinicalAttributes;

/// Verdict produced by the symptom classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Disease label, or a sentinel such as "General consultation recommended".
    pub prediction: String,
    /// Heuristic certainty in 0..=95 (0 only when no symptoms were given).
    pub confidence: u8,
    /// Specialist for the predicted condition. Absent on the empty-input exit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_specialist: Option<String>,
}

/// Verdict for the structured-attribute (legacy) input shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredVerdict {
    /// Whether a condition was detected.
    pub status: bool,
    /// Detected disease label, if any.
    pub disease: Option<String>,
    pub confidence: u8,
}

impl StructuredVerdict {
    /// Verdict for a negative outcome prediction.
    pub fn negative() -> Self {
        Self {
            status: false,
            disease: None,
            confidence: 0,
        }
    }
}

/// Fallback verdict: always `status: true`, whatever the classifier said,
/// including the empty-input exit.
impl From<Diagnosis> for StructuredVerdict {
    fn from(diagnosis: Diagnosis) -> Self {
        Self {
            status: true,
            confidence: diagnosis.confidence,
            disease: Some(diagnosis.prediction),
        }
    }
}

/// Body of `POST /predict`.
///
/// The shape is chosen by key presence: any body with a `symptoms` key is a
/// symptom list, whatever its value; every other object is read as clinical
/// attributes with per-field defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictRequest {
    Symptoms { symptoms: Vec<String> },
    Attributes(ClinicalAttributes),
}

impl<'de> Deserialize<'de> for PredictRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut body = Map::<String, Value>::deserialize(deserializer)?;
        match body.remove("symptoms") {
            Some(value) => Ok(PredictRequest::Symptoms {
                symptoms: symptom_list(value),
            }),
            None => ClinicalAttributes::deserialize(Value::Object(body))
                .map(PredictRequest::Attributes)
                .map_err(de::Error::custom),
        }
    }
}

/// Symptom tokens from whatever the `symptoms` key held.
///
/// A list keeps its string items, a lone string is one token, and `null` or
/// any other value is an empty list.
fn symptom_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    }
}

/// Response of `POST /predict`, shaped after the request variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Diagnosis(Diagnosis),
    Verdict(StructuredVerdict),
}
