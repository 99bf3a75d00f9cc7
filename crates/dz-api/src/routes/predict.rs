//! Triage prediction endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use dz_protocol::{PredictRequest, PredictResponse};

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /predict: classify a symptom list or a set of clinical attributes.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> ApiResult<Json<PredictResponse>> {
    let Json(request) = payload?;

    let response = match request {
        PredictRequest::Symptoms { symptoms } => {
            let (diagnosis, tier) = state.classifier.classify(&symptoms);
            tracing::info!(
                symptoms = symptoms.len(),
                tier = tier.map(|t| t.as_str()),
                prediction = %diagnosis.prediction,
                confidence = diagnosis.confidence,
                "symptoms classified"
            );
            PredictResponse::Diagnosis(diagnosis)
        }
        PredictRequest::Attributes(attributes) => {
            let evaluation = state.pipeline.evaluate(&attributes).await;
            tracing::info!(
                stage = ?evaluation.stage,
                status = evaluation.verdict.status,
                disease = evaluation.verdict.disease.as_deref(),
                "attributes evaluated"
            );
            PredictResponse::Verdict(evaluation.verdict)
        }
    };

    Ok(Json(response))
}
