//! Static reference tables: symptom patterns, keyword clusters, specialists.
//!
//! Labels are API output and are kept exactly as the upstream models emit
//! them, spelling included.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const COMMON_COLD: &str = "Common Cold";
pub const FLU: &str = "Flu";
pub const MIGRAINE: &str = "Migraine";
pub const HEART_ATTACK: &str = "Heart Attack";
pub const OSTEOARTHRITIS: &str = "Osteoarthristis";
pub const PSORIASIS: &str = "Psoriasis";
pub const GASTROENTERITIS: &str = "Gastroenteritis";
pub const HYPOTHYROIDISM: &str = "Hypothyroidism";
pub const DIABETES: &str = "Diabetes";
pub const HYPERTENSION: &str = "Hypertension";
pub const CERVICAL_SPONDYLOSIS: &str = "Cervical spondylosis";
pub const VERTIGO: &str = "(vertigo) Paroymsal  Positional Vertigo";
pub const BRONCHIAL_ASTHMA: &str = "Bronchial Asthma";
pub const IMPETIGO: &str = "Impetigo";
pub const JAUNDICE: &str = "Jaundice";

/// Prediction for an empty symptom list.
pub const NO_SYMPTOMS: &str = "No symptoms provided";
/// Prediction when neither tier recognises the symptoms.
pub const GENERAL_CONSULTATION: &str = "General consultation recommended";

/// A reference symptom set associated with one disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomPattern {
    /// Normalized symptom tokens.
    pub symptoms: &'static [&'static str],
    pub disease: &'static str,
}

/// Known symptom triads. Declaration order is match priority.
pub static SYMPTOM_PATTERNS: &[SymptomPattern] = &[
    SymptomPattern {
        symptoms: &["fever", "cough", "fatigue"],
        disease: COMMON_COLD,
    },
    SymptomPattern {
        symptoms: &["fever", "cough", "difficulty_breathing"],
        disease: FLU,
    },
    SymptomPattern {
        symptoms: &["headache", "nausea", "sensitivity_to_light"],
        disease: MIGRAINE,
    },
    SymptomPattern {
        symptoms: &["chest_pain", "difficulty_breathing", "sweating"],
        disease: HEART_ATTACK,
    },
    SymptomPattern {
        symptoms: &["joint_pain", "swelling", "stiffness"],
        disease: OSTEOARTHRITIS,
    },
    SymptomPattern {
        symptoms: &["skin_rash", "itching", "scaling"],
        disease: PSORIASIS,
    },
    SymptomPattern {
        symptoms: &["abdominal_pain", "nausea", "vomiting"],
        disease: GASTROENTERITIS,
    },
    SymptomPattern {
        symptoms: &["fatigue", "weight_gain", "cold_intolerance"],
        disease: HYPOTHYROIDISM,
    },
    SymptomPattern {
        symptoms: &["increased_urination", "excessive_thirst", "fatigue"],
        disease: DIABETES,
    },
    SymptomPattern {
        symptoms: &["high_bp", "headache", "chest_pain"],
        disease: HYPERTENSION,
    },
    SymptomPattern {
        symptoms: &["neck_pain", "stiffness", "headache"],
        disease: CERVICAL_SPONDYLOSIS,
    },
    SymptomPattern {
        symptoms: &["dizziness", "loss_of_balance", "nausea"],
        disease: VERTIGO,
    },
    SymptomPattern {
        symptoms: &["cough", "difficulty_breathing", "wheezing"],
        disease: BRONCHIAL_ASTHMA,
    },
    SymptomPattern {
        symptoms: &["skin_infection", "pus", "redness"],
        disease: IMPETIGO,
    },
    SymptomPattern {
        symptoms: &["yellow_skin", "dark_urine", "pale_stool"],
        disease: JAUNDICE,
    },
];

/// Upgrade applied inside a cluster when a more severe marker is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escalation {
    pub keyword: &'static str,
    pub label: &'static str,
}

/// A group of loosely related symptom keywords mapped to one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordCluster {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub label: &'static str,
    pub escalation: Option<Escalation>,
}

/// Fallback clusters in priority order.
pub static KEYWORD_CLUSTERS: &[KeywordCluster] = &[
    KeywordCluster {
        name: "respiratory",
        keywords: &["fever", "cough", "cold"],
        label: COMMON_COLD,
        escalation: Some(Escalation {
            keyword: "difficulty_breathing",
            label: FLU,
        }),
    },
    KeywordCluster {
        name: "headache",
        keywords: &["headache", "head_pain"],
        label: MIGRAINE,
        escalation: None,
    },
    KeywordCluster {
        name: "chest_pain",
        keywords: &["chest_pain", "heart"],
        label: HEART_ATTACK,
        escalation: None,
    },
    KeywordCluster {
        name: "joint_pain",
        keywords: &["joint_pain", "knee_pain", "back_pain"],
        label: OSTEOARTHRITIS,
        escalation: None,
    },
    KeywordCluster {
        name: "skin",
        keywords: &["skin", "rash", "itching"],
        label: PSORIASIS,
        escalation: None,
    },
    KeywordCluster {
        name: "abdominal",
        keywords: &["abdominal_pain", "stomach", "nausea"],
        label: GASTROENTERITIS,
        escalation: None,
    },
    KeywordCluster {
        name: "fatigue",
        keywords: &["fatigue", "tiredness", "weakness"],
        label: HYPOTHYROIDISM,
        escalation: None,
    },
    KeywordCluster {
        name: "vertigo",
        keywords: &["dizziness", "vertigo", "balance"],
        label: VERTIGO,
        escalation: None,
    },
];

/// Disease label → recommended specialist.
pub static SPECIALISTS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (PSORIASIS, "Dermatologist"),
        (IMPETIGO, "Dermatologist"),
        (HEART_ATTACK, "Cardiologist"),
        (HYPERTENSION, "Cardiologist"),
        (DIABETES, "Endocrinologist"),
        (HYPOTHYROIDISM, "Endocrinologist"),
        (GASTROENTERITIS, "Gastroenterologist"),
        (JAUNDICE, "Gastroenterologist"),
        (OSTEOARTHRITIS, "Rheumatologist"),
        (CERVICAL_SPONDYLOSIS, "Neurologist"),
        (VERTIGO, "Neurologist"),
        (BRONCHIAL_ASTHMA, "Pulmonologist"),
        (COMMON_COLD, "General Practitioner"),
        (FLU, "General Practitioner"),
        (MIGRAINE, "Neurologist"),
        ("Anxiety", "Psychiatrist"),
        ("Depression", "Psychiatrist"),
    ])
});
