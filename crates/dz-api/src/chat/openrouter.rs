//! OpenRouter backend for the hosted open-weight models.

use async_trait::async_trait;

use dz_protocol::{ChatMessage, Provider};

use super::completions::{self, CompletionRequest};
use super::{ChatBackend, ChatConfig, ChatError};

const SYSTEM_PROMPT: &str = "You are a helpful and supportive medical assistant. Provide helpful, caring responses about health and wellness.";

pub const APOLOGY: &str = "I'm sorry, I'm having trouble connecting to the AI service right now. Please try again later.";

const DEFAULT_MODEL: &str = "deepseek/deepseek-r1-0528:free";

/// OpenRouter model id for a provider key.
pub fn model_for(provider: Provider) -> &'static str {
    match provider {
        Provider::Deepseek => DEFAULT_MODEL,
        Provider::Llama => "meta-llama/llama-3.2-3b-instruct:free",
        Provider::Gemma => "google/gemma-2-9b-it:free",
        Provider::OpenAi | Provider::Gemini => DEFAULT_MODEL,
    }
}

pub struct OpenRouterBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    referer: String,
    title: String,
}

impl OpenRouterBackend {
    pub fn new(client: reqwest::Client, config: &ChatConfig) -> Self {
        Self {
            client,
            base_url: config.openrouter_base_url.trim_end_matches('/').to_string(),
            api_key: config.openrouter_api_key.clone(),
            referer: config.referer.clone(),
            title: config.app_title.clone(),
        }
    }
}

#[async_trait]
impl ChatBackend for OpenRouterBackend {
    async fn complete(
        &self,
        provider: Provider,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ChatError::MissingApiKey("openrouter"))?;

        let body = CompletionRequest::with_system(model_for(provider), SYSTEM_PROMPT, messages);
        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&body);

        completions::send(request).await
    }

    fn apology(&self) -> &'static str {
        APOLOGY
    }

    fn name(&self) -> &str {
        "openrouter"
    }
}
