//! Google Gemini backend.
//!
//! Gemini gets the whole conversation as one prompt: the system line, a
//! blank line, then one `role: content` line per message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use dz_protocol::{ChatMessage, Provider};

use super::{ChatBackend, ChatConfig, ChatError};

const SYSTEM_PROMPT: &str = "You are a helpful and supportive medical assistant.";

pub const APOLOGY: &str = "I'm sorry, I'm having trouble with the Gemini service right now.";

/// Flatten a conversation into Gemini's single-prompt form.
pub fn build_prompt(messages: &[ChatMessage]) -> String {
    let mut prompt = format!("{SYSTEM_PROMPT}\n\n");
    for msg in messages {
        prompt.push_str(&msg.role);
        prompt.push_str(": ");
        prompt.push_str(&msg.content);
        prompt.push('\n');
    }
    prompt
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.is_empty()).then_some(text)
    }
}

pub struct GeminiBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl GeminiBackend {
    pub fn new(client: reqwest::Client, config: &ChatConfig) -> Self {
        Self {
            client,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }
}

#[async_trait]
impl ChatBackend for GeminiBackend {
    async fn complete(
        &self,
        _provider: Provider,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ChatError::MissingApiKey("gemini"))?;

        let prompt = build_prompt(messages);
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &prompt }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .into_text()
            .ok_or_else(|| ChatError::Malformed("no text in gemini candidates".into()))
    }

    fn apology(&self) -> &'static str {
        APOLOGY
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
