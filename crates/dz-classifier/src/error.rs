//! Structured predictor error types.

use thiserror::Error;

/// Failures of the external outcome/disease predictors.
///
/// Every variant is a fallback trigger for the structured pipeline; none of
/// them reaches the caller.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("predictor unavailable: {0}")]
    Unavailable(String),

    #[error("prediction failed: {0}")]
    Failed(String),

    #[error("prediction timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("malformed predictor response: {0}")]
    Malformed(String),
}

/// Convenience alias for predictor results.
pub type PredictorResult<T> = Result<T, PredictorError>;
