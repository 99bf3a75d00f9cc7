//! Shared test harness for E2E integration tests.
//!
//! Drives the real router over `tower::oneshot`, with predictors and chat
//! backends swapped for mocks or wiremock servers as each test needs.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use dz_api::chat::{ChatConfig, ChatRouter};
use dz_api::routes::build_router;
use dz_api::state::AppState;
use dz_classifier::{MockPredictor, Predictor, StructuredPipeline, SymptomClassifier};

/// Router plus the state it was built from.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Standard classifier, no structured models, chat without API keys.
    pub fn new() -> Self {
        Self::from_state(AppState::new())
    }

    /// Harness whose structured pipeline uses the given mock predictors.
    pub fn with_predictors(outcome: Arc<MockPredictor>, disease: Arc<MockPredictor>) -> Self {
        let pipeline = StructuredPipeline::new(
            Some(outcome as Arc<dyn Predictor>),
            Some(disease as Arc<dyn Predictor>),
            SymptomClassifier::standard(),
        );
        Self::from_state(AppState::new().with_pipeline(pipeline))
    }

    /// Harness whose chat backends point at `config`'s endpoints.
    pub fn with_chat_config(config: &ChatConfig) -> Self {
        let chat = ChatRouter::with_client(reqwest::Client::new(), config);
        Self::from_state(AppState::new().with_chat(chat))
    }

    pub fn from_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// POST a JSON body. Returns (HTTP status code, response JSON body).
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    /// POST /predict with a symptom list.
    pub async fn predict_symptoms(&self, symptoms: &[&str]) -> (StatusCode, serde_json::Value) {
        self.post_json("/predict", serde_json::json!({ "symptoms": symptoms }))
            .await
    }

    /// POST /chat with a single user message.
    pub async fn chat(&self, provider: &str, message: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({
            "messages": [{"role": "user", "content": message}],
            "provider": provider,
        });
        self.post_json("/chat", body).await
    }
}
