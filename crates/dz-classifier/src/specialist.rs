//! Specialist enrichment.

use crate::tables::SPECIALISTS;

pub const DEFAULT_SPECIALIST: &str = "General Practitioner";

/// Specialist for an exact disease label, or the general practitioner.
pub fn recommend(prediction: &str) -> &'static str {
    SPECIALISTS
        .get(prediction)
        .copied()
        .unwrap_or(DEFAULT_SPECIALIST)
}
