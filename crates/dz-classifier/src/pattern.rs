//! Pattern-match tier: partial overlap against known symptom sets.
//!
//! Patterns are checked in declaration order and the first one whose overlap
//! reaches the acceptance threshold wins. There is no best-match search.

use std::collections::HashSet;

use crate::normalize::NormalizedSymptoms;
use crate::tables::SymptomPattern;

/// Overlap cap for large patterns.
const MAX_REQUIRED_OVERLAP: f64 = 2.0;

/// Share of a pattern that must overlap when below the cap.
const OVERLAP_RATIO: f64 = 0.6;

/// Minimum overlap a pattern of `pattern_size` distinct symptoms requires.
///
/// Fractional on purpose: a triad needs 1.8, so 2 shared symptoms pass and 1
/// does not. Do not round.
pub fn acceptance_threshold(pattern_size: usize) -> f64 {
    (pattern_size as f64 * OVERLAP_RATIO).min(MAX_REQUIRED_OVERLAP)
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    symptoms: HashSet<&'static str>,
    threshold: f64,
    disease: &'static str,
}

/// First-match-wins matcher over an ordered pattern table.
#[derive(Debug, Clone)]
pub struct PatternTier {
    patterns: Vec<CompiledPattern>,
}

impl PatternTier {
    pub fn new(patterns: &[SymptomPattern]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| {
                let symptoms: HashSet<&'static str> = p.symptoms.iter().copied().collect();
                CompiledPattern {
                    threshold: acceptance_threshold(symptoms.len()),
                    symptoms,
                    disease: p.disease,
                }
            })
            .collect();
        Self { patterns }
    }

    /// Disease of the first pattern that overlaps enough, if any.
    pub fn find(&self, symptoms: &NormalizedSymptoms) -> Option<&'static str> {
        self.patterns.iter().find_map(|p| {
            let overlap = symptoms.overlap(&p.symptoms);
            (overlap as f64 >= p.threshold).then_some(p.disease)
        })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
