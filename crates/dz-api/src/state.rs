//! Shared application state for the Axum server.

use std::sync::Arc;

use dz_classifier::{StructuredPipeline, SymptomClassifier};

use crate::chat::ChatRouter;
use crate::config::ApiConfig;
use crate::predictors;

/// Shared application state. Everything inside is immutable after start-up.
#[derive(Clone)]
pub struct AppState {
    /// Symptom-list classifier.
    pub classifier: Arc<SymptomClassifier>,
    /// Two-stage structured-attribute pipeline.
    pub pipeline: Arc<StructuredPipeline>,
    /// Chat provider dispatch.
    pub chat: Arc<ChatRouter>,
}

impl AppState {
    /// Standard tables, no structured models, unconfigured chat (for tests).
    pub fn new() -> Self {
        Self {
            classifier: SymptomClassifier::standard(),
            pipeline: Arc::new(StructuredPipeline::fallback_only()),
            chat: Arc::new(ChatRouter::default()),
        }
    }

    /// Build state from loaded configuration.
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let classifier = SymptomClassifier::standard();
        let pipeline = predictors::build_pipeline(&config.models, classifier.clone());
        let chat = ChatRouter::from_config(&config.chat)?;
        Ok(Self {
            classifier,
            pipeline: Arc::new(pipeline),
            chat: Arc::new(chat),
        })
    }

    /// Replace the structured pipeline.
    pub fn with_pipeline(mut self, pipeline: StructuredPipeline) -> Self {
        self.pipeline = Arc::new(pipeline);
        self
    }

    /// Replace the chat router.
    pub fn with_chat(mut self, chat: ChatRouter) -> Self {
        self.chat = Arc::new(chat);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
