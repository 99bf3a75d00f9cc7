//! HTTP-served outcome and disease predictors.
//!
//! Each model sits behind a serving endpoint that accepts one encoded
//! feature row as JSON and answers `{"label": "..."}`. An unset URL means
//! the model is not loaded; the structured pipeline then always takes its
//! symptom fallback.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use dz_classifier::{Predictor, PredictorError, PredictorResult, StructuredPipeline, SymptomClassifier};
use dz_protocol::FeatureRow;

/// Where the structured predictors are served.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Outcome model endpoint (OUTCOME_MODEL_URL).
    #[serde(default)]
    pub outcome_url: Option<String>,
    /// Disease model endpoint (DISEASE_MODEL_URL).
    #[serde(default)]
    pub disease_url: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            outcome_url: None,
            disease_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ModelConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            outcome_url: var("OUTCOME_MODEL_URL"),
            disease_url: var("DISEASE_MODEL_URL"),
            timeout_secs: var("MODEL_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_timeout_secs),
        }
    }
}

/// Expected JSON shape from a model endpoint.
#[derive(Debug, Deserialize)]
struct PredictionResponse {
    label: String,
}

/// Predictor backed by a model-serving endpoint.
pub struct HttpPredictor {
    client: reqwest::Client,
    url: String,
    name: String,
    timeout: Duration,
}

impl HttpPredictor {
    pub fn new(
        client: reqwest::Client,
        name: impl Into<String>,
        url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            name: name.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, features: &FeatureRow) -> PredictorResult<String> {
        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(features)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PredictorError::Timeout {
                        timeout_ms: self.timeout.as_millis() as u64,
                    }
                } else {
                    PredictorError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictorError::Failed(format!("{status}: {body}")));
        }

        let parsed: PredictionResponse = response
            .json()
            .await
            .map_err(|e| PredictorError::Malformed(e.to_string()))?;
        Ok(parsed.label)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Build the structured pipeline from config, logging which models are present.
pub fn build_pipeline(
    config: &ModelConfig,
    classifier: Arc<SymptomClassifier>,
) -> StructuredPipeline {
    let client = reqwest::Client::new();
    let timeout = Duration::from_secs(config.timeout_secs);

    let load = |name: &str, url: &Option<String>| -> Option<Arc<dyn Predictor>> {
        match url {
            Some(url) => {
                tracing::info!(model = name, url = %url, "model endpoint configured");
                Some(Arc::new(HttpPredictor::new(client.clone(), name, url, timeout)))
            }
            None => {
                tracing::warn!(model = name, "model not configured, symptom fallback only");
                None
            }
        }
    };

    let outcome = load("outcome", &config.outcome_url);
    let disease = load("disease", &config.disease_url);
    StructuredPipeline::new(outcome, disease, classifier)
}
