//! Count-based confidence heuristic.

/// Confidence floor for any non-empty symptom list.
pub const MIN_CONFIDENCE: u8 = 60;
/// Confidence ceiling.
pub const MAX_CONFIDENCE: u8 = 95;
/// Confidence reported when the external predictors produced the verdict.
pub const STRUCTURED_CONFIDENCE: u8 = 85;

const BASE: usize = 30;
const PER_SYMPTOM: usize = 15;

/// `clamp(count * 15 + 30, 60, 95)` over the raw symptom count.
pub fn score(symptom_count: usize) -> u8 {
    let raw = symptom_count
        .saturating_mul(PER_SYMPTOM)
        .saturating_add(BASE);
    raw.clamp(MIN_CONFIDENCE.into(), MAX_CONFIDENCE.into()) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_symptom_clamps_to_floor() {
        assert_eq!(score(1), 60);
    }

    #[test]
    fn two_symptoms_sit_on_floor() {
        assert_eq!(score(2), 60);
    }

    #[test]
    fn three_and_four_symptoms() {
        assert_eq!(score(3), 75);
        assert_eq!(score(4), 90);
    }

    #[test]
    fn ceiling_from_five() {
        assert_eq!(score(5), 95);
        assert_eq!(score(40), 95);
    }

    #[test]
    fn huge_counts_saturate() {
        assert_eq!(score(usize::MAX), MAX_CONFIDENCE);
    }
}
