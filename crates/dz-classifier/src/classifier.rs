//! Two-tier symptom classifier.
//!
//! Pattern tier first; the keyword cascade only runs when no pattern
//! overlaps enough. Confidence and specialist enrichment apply to whichever
//! tier produced the label.

use std::sync::{Arc, LazyLock};

use dz_protocol::Diagnosis;

use crate::confidence;
use crate::keyword::KeywordTier;
use crate::normalize::NormalizedSymptoms;
use crate::pattern::PatternTier;
use crate::specialist;
use crate::tables::{
    GENERAL_CONSULTATION, KEYWORD_CLUSTERS, KeywordCluster, NO_SYMPTOMS, SYMPTOM_PATTERNS,
    SymptomPattern,
};

static STANDARD: LazyLock<Arc<SymptomClassifier>> =
    LazyLock::new(|| Arc::new(SymptomClassifier::new(SYMPTOM_PATTERNS, KEYWORD_CLUSTERS)));

/// Which tier produced a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Pattern,
    Keyword,
    /// Neither tier recognised the symptoms.
    Unmatched,
}

impl MatchTier {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Pattern => "pattern",
            MatchTier::Keyword => "keyword",
            MatchTier::Unmatched => "unmatched",
        }
    }
}

/// Pure symptom → diagnosis function over immutable tables.
#[derive(Debug, Clone)]
pub struct SymptomClassifier {
    patterns: PatternTier,
    keywords: KeywordTier,
}

impl SymptomClassifier {
    pub fn new(patterns: &[SymptomPattern], clusters: &'static [KeywordCluster]) -> Self {
        Self {
            patterns: PatternTier::new(patterns),
            keywords: KeywordTier::new(clusters),
        }
    }

    /// Shared classifier over the built-in tables, compiled once.
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Classify raw symptom tokens.
    pub fn diagnose<S: AsRef<str>>(&self, symptoms: &[S]) -> Diagnosis {
        self.classify(symptoms).0
    }

    /// Classify raw symptom tokens and report the deciding tier.
    ///
    /// Returns `None` for the tier on the empty-input exit.
    pub fn classify<S: AsRef<str>>(&self, symptoms: &[S]) -> (Diagnosis, Option<MatchTier>) {
        let symptoms = NormalizedSymptoms::new(symptoms);
        if symptoms.is_empty() {
            return (
                Diagnosis {
                    prediction: NO_SYMPTOMS.into(),
                    confidence: 0,
                    recommended_specialist: None,
                },
                None,
            );
        }

        let (prediction, tier) = self.predict(&symptoms);
        let confidence = confidence::score(symptoms.raw_len());
        tracing::debug!(
            tier = tier.as_str(),
            prediction,
            confidence,
            symptom_count = symptoms.raw_len(),
            "symptoms classified"
        );

        (
            Diagnosis {
                prediction: prediction.into(),
                confidence,
                recommended_specialist: Some(specialist::recommend(prediction).into()),
            },
            Some(tier),
        )
    }

    fn predict(&self, symptoms: &NormalizedSymptoms) -> (&'static str, MatchTier) {
        if let Some(disease) = self.patterns.find(symptoms) {
            return (disease, MatchTier::Pattern);
        }
        match self.keywords.find(symptoms) {
            Some(hit) => (hit.label, MatchTier::Keyword),
            None => (GENERAL_CONSULTATION, MatchTier::Unmatched),
        }
    }
}

impl Default for SymptomClassifier {
    fn default() -> Self {
        Self::new(SYMPTOM_PATTERNS, KEYWORD_CLUSTERS)
    }
}

/// Classify with the built-in tables.
pub fn diagnose<S: AsRef<str>>(symptoms: &[S]) -> Diagnosis {
    STANDARD.diagnose(symptoms)
}
