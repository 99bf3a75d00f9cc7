//! Mock predictor for testing.
//!
//! Returns a scripted label (or error) and records every feature row it
//! receives, so pipeline tests run without a model server.

use async_trait::async_trait;
use std::sync::Mutex;

use dz_protocol::FeatureRow;

use crate::error::{PredictorError, PredictorResult};
use crate::structured::Predictor;

/// Predictor with a fixed response and call recording.
pub struct MockPredictor {
    response: Result<String, String>,
    received: Mutex<Vec<FeatureRow>>,
}

impl MockPredictor {
    /// Always predict `label`.
    pub fn returning(label: impl Into<String>) -> Self {
        Self {
            response: Ok(label.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            response: Err(reason.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Number of `predict` calls so far.
    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// The most recent feature row, if any.
    pub fn last_features(&self) -> Option<FeatureRow> {
        self.received.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Predictor for MockPredictor {
    async fn predict(&self, features: &FeatureRow) -> PredictorResult<String> {
        self.received.lock().unwrap().push(features.clone());
        self.response.clone().map_err(PredictorError::Failed)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
