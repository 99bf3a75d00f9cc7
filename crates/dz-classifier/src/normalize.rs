//! Symptom token normalization.

use std::collections::HashSet;

/// Lowercase a raw token and replace each space with an underscore.
pub fn normalize_token(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}

/// Caller symptoms after normalization.
///
/// Keeps the raw count (duplicates included) for confidence scoring and a
/// set view for overlap and membership checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSymptoms {
    tokens: Vec<String>,
    distinct: HashSet<String>,
}

impl NormalizedSymptoms {
    pub fn new<S: AsRef<str>>(raw: &[S]) -> Self {
        let tokens: Vec<String> = raw.iter().map(|s| normalize_token(s.as_ref())).collect();
        let distinct = tokens.iter().cloned().collect();
        Self { tokens, distinct }
    }

    /// Number of tokens as supplied, duplicates included.
    pub fn raw_len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.distinct.contains(token)
    }

    /// Any of `keywords` present as an exact token.
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.contains(k))
    }

    /// Size of the intersection between `reference` and the distinct tokens.
    pub fn overlap(&self, reference: &HashSet<&str>) -> usize {
        reference.iter().filter(|s| self.contains(s)).count()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_underscores() {
        assert_eq!(normalize_token("Difficulty Breathing"), "difficulty_breathing");
        assert_eq!(normalize_token("FEVER"), "fever");
        assert_eq!(normalize_token("chest_pain"), "chest_pain");
    }

    #[test]
    fn every_space_is_replaced() {
        assert_eq!(normalize_token("loss of  balance"), "loss_of__balance");
    }

    #[test]
    fn duplicates_count_towards_raw_len_only() {
        let symptoms = NormalizedSymptoms::new(&["Cough", "cough", "COUGH"]);
        assert_eq!(symptoms.raw_len(), 3);
        let reference: HashSet<&str> = ["cough", "fever", "fatigue"].into();
        assert_eq!(symptoms.overlap(&reference), 1);
    }

    #[test]
    fn membership_is_exact_token_match() {
        let symptoms = NormalizedSymptoms::new(&["skin rash"]);
        assert!(symptoms.contains("skin_rash"));
        assert!(!symptoms.contains("skin"));
        assert!(!symptoms.contains_any(&["rash", "itching"]));
    }

    #[test]
    fn empty_input() {
        let symptoms = NormalizedSymptoms::new::<&str>(&[]);
        assert!(symptoms.is_empty());
        assert_eq!(symptoms.raw_len(), 0);
    }
}
