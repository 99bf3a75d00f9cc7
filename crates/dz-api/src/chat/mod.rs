//! Conversational proxy to external language-model providers.
//!
//! Each provider family has a [`ChatBackend`]. Failures never reach the
//! caller: the router logs them and answers with the backend's apology.
//!
//! - **OpenRouter**: deepseek, llama, gemma.
//! - **OpenAI**: chat completions.
//! - **Gemini**: `generateContent` with a flattened prompt.

pub mod completions;
pub mod gemini;
pub mod openai;
pub mod openrouter;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use dz_protocol::{ChatMessage, Provider};

pub use gemini::GeminiBackend;
pub use openai::OpenAiBackend;
pub use openrouter::OpenRouterBackend;

/// Errors from a provider call. Logged, then replaced by an apology.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("no API key configured for {0}")]
    MissingApiKey(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Malformed(String),
}

/// A provider family reachable over HTTP.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send the conversation and return the assistant's reply text.
    async fn complete(
        &self,
        provider: Provider,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError>;

    /// Reply used when `complete` fails.
    fn apology(&self) -> &'static str;

    /// Backend name (for logging).
    fn name(&self) -> &str;
}

/// Provider credentials, endpoints and timeouts.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub openrouter_api_key: Option<String>,
    #[serde(default = "default_openrouter_base_url")]
    pub openrouter_base_url: String,
    /// Sent as `HTTP-Referer` to OpenRouter.
    #[serde(default = "default_referer")]
    pub referer: String,
    /// Sent as `X-Title` to OpenRouter.
    #[serde(default = "default_app_title")]
    pub app_title: String,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_openrouter_base_url() -> String {
    "https://openrouter.ai/api/v1".into()
}
fn default_referer() -> String {
    "http://localhost:3000".into()
}
fn default_app_title() -> String {
    "HoloHealth".into()
}
fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".into()
}
fn default_openai_model() -> String {
    "gpt-4o-mini".into()
}
fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_gemini_model() -> String {
    "gemini-pro".into()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            openrouter_api_key: None,
            openrouter_base_url: default_openrouter_base_url(),
            referer: default_referer(),
            app_title: default_app_title(),
            openai_api_key: None,
            openai_base_url: default_openai_base_url(),
            openai_model: default_openai_model(),
            gemini_api_key: None,
            gemini_base_url: default_gemini_base_url(),
            gemini_model: default_gemini_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ChatConfig {
    /// Load configuration from environment variables, defaulting the rest.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            openrouter_api_key: var("OPENROUTER_API_KEY"),
            openrouter_base_url: var("OPENROUTER_BASE_URL").unwrap_or(defaults.openrouter_base_url),
            referer: var("OPENROUTER_REFERER").unwrap_or(defaults.referer),
            app_title: var("OPENROUTER_TITLE").unwrap_or(defaults.app_title),
            openai_api_key: var("OPENAI_API_KEY"),
            openai_base_url: var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_model: var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_base_url: var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            gemini_model: var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            timeout_secs: var("CHAT_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

/// Dispatch table from provider to backend.
#[derive(Clone)]
pub struct ChatRouter {
    openrouter: Arc<dyn ChatBackend>,
    openai: Arc<dyn ChatBackend>,
    gemini: Arc<dyn ChatBackend>,
}

impl ChatRouter {
    pub fn new(
        openrouter: Arc<dyn ChatBackend>,
        openai: Arc<dyn ChatBackend>,
        gemini: Arc<dyn ChatBackend>,
    ) -> Self {
        Self {
            openrouter,
            openai,
            gemini,
        }
    }

    /// Build all HTTP backends from config, sharing one client.
    pub fn from_config(config: &ChatConfig) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build all HTTP backends over an existing client.
    pub fn with_client(client: reqwest::Client, config: &ChatConfig) -> Self {
        Self::new(
            Arc::new(OpenRouterBackend::new(client.clone(), config)),
            Arc::new(OpenAiBackend::new(client.clone(), config)),
            Arc::new(GeminiBackend::new(client, config)),
        )
    }

    fn backend(&self, provider: Provider) -> &dyn ChatBackend {
        match provider {
            p if p.is_openrouter() => self.openrouter.as_ref(),
            Provider::OpenAi => self.openai.as_ref(),
            _ => self.gemini.as_ref(),
        }
    }

    /// Reply text from the provider, or its apology on any failure.
    pub async fn reply(&self, provider: Provider, messages: &[ChatMessage]) -> String {
        let backend = self.backend(provider);
        match backend.complete(provider, messages).await {
            Ok(reply) => {
                tracing::debug!(
                    backend = backend.name(),
                    provider = provider.key(),
                    reply_len = reply.len(),
                    "chat reply received"
                );
                reply
            }
            Err(e) => {
                tracing::warn!(
                    backend = backend.name(),
                    provider = provider.key(),
                    error = %e,
                    "chat provider failed"
                );
                backend.apology().to_string()
            }
        }
    }
}

impl Default for ChatRouter {
    fn default() -> Self {
        Self::with_client(reqwest::Client::new(), &ChatConfig::default())
    }
}
