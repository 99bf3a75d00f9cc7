//! Structured clinical attributes (the legacy `/predict` input shape) and
//! their encoding into a feature row for the black-box predictors.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const YES: &str = "Yes";

/// Clinical attributes as submitted by the symptom-analysis form.
///
/// Flags are free strings: only `"Yes"` marks a symptom as present. Form
/// bodies are loosely typed, so no field ever rejects a value: a non-string
/// where text is expected matches nothing, and an unreadable age is 25.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalAttributes {
    #[serde(default = "default_flag", deserialize_with = "lenient_text")]
    pub fever: String,
    #[serde(default = "default_flag", deserialize_with = "lenient_text")]
    pub cough: String,
    #[serde(default = "default_flag", deserialize_with = "lenient_text")]
    pub fatigue: String,
    #[serde(default = "default_flag", deserialize_with = "lenient_text")]
    pub difficulty_breathing: String,
    #[serde(default = "default_age", deserialize_with = "lenient_age")]
    pub age: f64,
    #[serde(default = "default_gender", deserialize_with = "lenient_text")]
    pub gender: String,
    /// "Low", "Normal" or "High".
    #[serde(default = "default_level", deserialize_with = "lenient_text")]
    pub blood_pressure: String,
    /// "Normal" or "High".
    #[serde(default = "default_level", deserialize_with = "lenient_text")]
    pub cholesterol: String,
}

fn default_flag() -> String {
    "No".into()
}

fn default_age() -> f64 {
    25.0
}

fn default_gender() -> String {
    "Male".into()
}

fn default_level() -> String {
    "Normal".into()
}

/// Strings pass through; any other present value becomes empty text.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// A number or numeric string; anything else is the default age.
fn lenient_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let age = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(age.filter(|a| a.is_finite()).unwrap_or_else(default_age))
}

impl Default for ClinicalAttributes {
    fn default() -> Self {
        Self {
            fever: default_flag(),
            cough: default_flag(),
            fatigue: default_flag(),
            difficulty_breathing: default_flag(),
            age: default_age(),
            gender: default_gender(),
            blood_pressure: default_level(),
            cholesterol: default_level(),
        }
    }
}

/// One encoded input row for the outcome and disease predictors.
///
/// Field names serialize to the column names the models were trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    #[serde(rename = "Fever")]
    pub fever: u8,
    #[serde(rename = "Cough")]
    pub cough: u8,
    #[serde(rename = "Fatigue")]
    pub fatigue: u8,
    #[serde(rename = "Difficulty Breathing")]
    pub difficulty_breathing: u8,
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "Gender")]
    pub gender: u8,
    #[serde(rename = "Blood Pressure")]
    pub blood_pressure: u8,
    #[serde(rename = "Cholesterol Level")]
    pub cholesterol_level: u8,
}

impl ClinicalAttributes {
    /// Encode the attributes into the predictors' feature row.
    pub fn features(&self) -> FeatureRow {
        FeatureRow {
            fever: flag(&self.fever),
            cough: flag(&self.cough),
            fatigue: flag(&self.fatigue),
            difficulty_breathing: flag(&self.difficulty_breathing),
            age: self.age,
            gender: u8::from(self.gender == "Male"),
            blood_pressure: match self.blood_pressure.as_str() {
                "Low" => 0,
                "Normal" => 1,
                _ => 2,
            },
            cholesterol_level: u8::from(self.cholesterol != "Normal"),
        }
    }

    /// Symptom tokens implied by the flags, in form order.
    pub fn symptoms(&self) -> Vec<String> {
        [
            ("fever", &self.fever),
            ("cough", &self.cough),
            ("fatigue", &self.fatigue),
            ("difficulty_breathing", &self.difficulty_breathing),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_str() == YES)
        .map(|(name, _)| name.to_string())
        .collect()
    }
}

fn flag(value: &str) -> u8 {
    u8::from(value == YES)
}
