//! OpenAI chat-completions backend.

use async_trait::async_trait;

use dz_protocol::{ChatMessage, Provider};

use super::completions::{self, CompletionRequest};
use super::{ChatBackend, ChatConfig, ChatError};

const SYSTEM_PROMPT: &str = "You are a helpful and supportive medical assistant.";

pub const APOLOGY: &str = "I'm sorry, I'm having trouble with the OpenAI service right now.";

pub struct OpenAiBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiBackend {
    pub fn new(client: reqwest::Client, config: &ChatConfig) -> Self {
        Self {
            client,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn complete(
        &self,
        _provider: Provider,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ChatError::MissingApiKey("openai"))?;

        let body = CompletionRequest::with_system(&self.model, SYSTEM_PROMPT, messages);
        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body);

        completions::send(request).await
    }

    fn apology(&self) -> &'static str {
        APOLOGY
    }

    fn name(&self) -> &str {
        "openai"
    }
}
