//! Symptom triage core.
//!
//! Turns free-text symptom tokens into a [`Diagnosis`](dz_protocol::Diagnosis):
//! a pattern-match tier against known symptom triads, a keyword cascade when
//! no pattern overlaps enough, a count-based confidence score and a
//! specialist lookup. The structured-attribute pipeline wraps the external
//! predictors and degrades to the classifier when they fail.

pub mod classifier;
pub mod confidence;
pub mod error;
pub mod keyword;
pub mod mock;
pub mod normalize;
pub mod pattern;
pub mod specialist;
pub mod structured;
pub mod tables;

pub use classifier::{MatchTier, SymptomClassifier, diagnose};
pub use error::{PredictorError, PredictorResult};
pub use mock::MockPredictor;
pub use structured::{Evaluation, PipelineStage, Predictor, StructuredPipeline};
