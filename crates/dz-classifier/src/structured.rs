//! Structured-attribute pipeline: external predictors with classifier fallback.
//!
//! Stage one asks the outcome predictor whether the patient is positive and,
//! if so, the disease predictor which condition. Any predictor error (or a
//! missing predictor) hands the attributes to stage two, which turns the
//! symptom flags into tokens and runs the symptom classifier.

use std::sync::Arc;

use async_trait::async_trait;
use dz_protocol::{ClinicalAttributes, FeatureRow, StructuredVerdict};

use crate::classifier::SymptomClassifier;
use crate::confidence::STRUCTURED_CONFIDENCE;
use crate::error::{PredictorError, PredictorResult};

/// Outcome label that lets the disease predictor run.
pub const POSITIVE_OUTCOME: &str = "Positive";

/// Black-box classifier over one encoded feature row.
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Predict a label for the row.
    async fn predict(&self, features: &FeatureRow) -> PredictorResult<String>;

    /// Name of this predictor (for logging).
    fn name(&self) -> &str;
}

/// Stage that produced a structured verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Predictor,
    Fallback,
}

/// A verdict plus the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: StructuredVerdict,
    pub stage: PipelineStage,
}

/// Two-stage evaluator for clinical attributes.
#[derive(Clone)]
pub struct StructuredPipeline {
    outcome: Option<Arc<dyn Predictor>>,
    disease: Option<Arc<dyn Predictor>>,
    classifier: Arc<SymptomClassifier>,
}

impl StructuredPipeline {
    pub fn new(
        outcome: Option<Arc<dyn Predictor>>,
        disease: Option<Arc<dyn Predictor>>,
        classifier: Arc<SymptomClassifier>,
    ) -> Self {
        Self {
            outcome,
            disease,
            classifier,
        }
    }

    /// Pipeline with no predictors: every request takes the fallback stage.
    pub fn fallback_only() -> Self {
        Self::new(None, None, SymptomClassifier::standard())
    }

    /// Whether both predictors are configured.
    pub fn has_predictors(&self) -> bool {
        self.outcome.is_some() && self.disease.is_some()
    }

    /// Evaluate attributes, degrading to the classifier on any predictor error.
    pub async fn evaluate(&self, attributes: &ClinicalAttributes) -> Evaluation {
        match self.predict(&attributes.features()).await {
            Ok(verdict) => Evaluation {
                verdict,
                stage: PipelineStage::Predictor,
            },
            Err(e) => {
                tracing::warn!(error = %e, "model prediction failed, using symptom fallback");
                Evaluation {
                    verdict: self.fallback(attributes),
                    stage: PipelineStage::Fallback,
                }
            }
        }
    }

    /// Stage one: outcome then disease predictor.
    pub async fn predict(&self, features: &FeatureRow) -> PredictorResult<StructuredVerdict> {
        let (Some(outcome), Some(disease)) = (&self.outcome, &self.disease) else {
            return Err(PredictorError::Unavailable("models not available".into()));
        };

        let outcome_label = outcome.predict(features).await?;
        if outcome_label != POSITIVE_OUTCOME {
            tracing::debug!(
                predictor = outcome.name(),
                outcome = %outcome_label,
                "negative outcome"
            );
            return Ok(StructuredVerdict::negative());
        }

        let disease_label = disease.predict(features).await?;
        tracing::debug!(
            predictor = disease.name(),
            disease = %disease_label,
            "disease predicted"
        );
        Ok(StructuredVerdict {
            status: true,
            disease: Some(disease_label),
            confidence: STRUCTURED_CONFIDENCE,
        })
    }

    /// Stage two: symptom flags through the classifier.
    pub fn fallback(&self, attributes: &ClinicalAttributes) -> StructuredVerdict {
        self.classifier.diagnose(&attributes.symptoms()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPredictor;

    fn pipeline(outcome: MockPredictor, disease: MockPredictor) -> StructuredPipeline {
        StructuredPipeline::new(
            Some(Arc::new(outcome)),
            Some(Arc::new(disease)),
            SymptomClassifier::standard(),
        )
    }

    fn respiratory() -> ClinicalAttributes {
        ClinicalAttributes {
            fever: "Yes".into(),
            cough: "Yes".into(),
            difficulty_breathing: "Yes".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn positive_outcome_uses_disease_label() {
        let p = pipeline(
            MockPredictor::returning("Positive"),
            MockPredictor::returning("Asthma"),
        );
        let eval = p.evaluate(&respiratory()).await;
        assert_eq!(eval.stage, PipelineStage::Predictor);
        assert_eq!(
            eval.verdict,
            StructuredVerdict {
                status: true,
                disease: Some("Asthma".into()),
                confidence: 85,
            }
        );
    }

    #[tokio::test]
    async fn negative_outcome_skips_disease_predictor() {
        let disease = Arc::new(MockPredictor::returning("Asthma"));
        let p = StructuredPipeline::new(
            Some(Arc::new(MockPredictor::returning("Negative"))),
            Some(disease.clone()),
            SymptomClassifier::standard(),
        );
        let eval = p.evaluate(&respiratory()).await;
        assert_eq!(eval.stage, PipelineStage::Predictor);
        assert_eq!(eval.verdict, StructuredVerdict::negative());
        assert_eq!(disease.calls(), 0);
    }

    #[tokio::test]
    async fn predictors_receive_encoded_features() {
        let outcome = Arc::new(MockPredictor::returning("Positive"));
        let p = StructuredPipeline::new(
            Some(outcome.clone()),
            Some(Arc::new(MockPredictor::returning("Flu"))),
            SymptomClassifier::standard(),
        );
        let attrs = respiratory();
        p.evaluate(&attrs).await;
        assert_eq!(outcome.last_features(), Some(attrs.features()));
    }

    #[tokio::test]
    async fn missing_predictors_fall_back() {
        let eval = StructuredPipeline::fallback_only()
            .evaluate(&respiratory())
            .await;
        assert_eq!(eval.stage, PipelineStage::Fallback);
        // fever + cough already satisfy the Common Cold pattern, which is declared before Flu
        assert_eq!(eval.verdict.disease.as_deref(), Some("Common Cold"));
        assert!(eval.verdict.status);
        assert_eq!(eval.verdict.confidence, 75);
    }

    #[tokio::test]
    async fn one_missing_predictor_falls_back() {
        let outcome = Arc::new(MockPredictor::returning("Positive"));
        let p = StructuredPipeline::new(Some(outcome.clone()), None, SymptomClassifier::standard());
        assert!(!p.has_predictors());
        let eval = p.evaluate(&respiratory()).await;
        assert_eq!(eval.stage, PipelineStage::Fallback);
        assert_eq!(outcome.calls(), 0);
    }

    #[tokio::test]
    async fn outcome_error_falls_back() {
        let p = pipeline(
            MockPredictor::failing("model file corrupt"),
            MockPredictor::returning("Asthma"),
        );
        let eval = p.evaluate(&respiratory()).await;
        assert_eq!(eval.stage, PipelineStage::Fallback);
        assert_eq!(eval.verdict.disease.as_deref(), Some("Common Cold"));
    }

    #[tokio::test]
    async fn disease_error_falls_back() {
        let p = pipeline(
            MockPredictor::returning("Positive"),
            MockPredictor::failing("feature mismatch"),
        );
        let attrs = ClinicalAttributes {
            cough: "Yes".into(),
            ..Default::default()
        };
        let eval = p.evaluate(&attrs).await;
        assert_eq!(eval.stage, PipelineStage::Fallback);
        assert_eq!(
            eval.verdict,
            StructuredVerdict {
                status: true,
                disease: Some("Common Cold".into()),
                confidence: 60,
            }
        );
    }

    #[tokio::test]
    async fn fallback_without_flags_still_reports_status() {
        let eval = StructuredPipeline::fallback_only()
            .evaluate(&ClinicalAttributes::default())
            .await;
        assert_eq!(eval.stage, PipelineStage::Fallback);
        assert_eq!(
            eval.verdict,
            StructuredVerdict {
                status: true,
                disease: Some("No symptoms provided".into()),
                confidence: 0,
            }
        );
    }

    #[tokio::test]
    async fn predict_stage_reports_unavailable() {
        let err = StructuredPipeline::fallback_only()
            .predict(&ClinicalAttributes::default().features())
            .await
            .unwrap_err();
        assert!(matches!(err, PredictorError::Unavailable(_)));
    }
}
