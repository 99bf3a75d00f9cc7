use serde::{Deserialize, Serialize};

/// A single conversation turn, forwarded verbatim to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Provider key (e.g. "deepseek", "openai"). Validated by the handler.
    #[serde(default = "default_provider")]
    pub provider: String,
}

fn default_provider() -> String {
    Provider::Deepseek.key().to_string()
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Language-model providers reachable through the chat proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// DeepSeek R1, hosted on OpenRouter.
    Deepseek,
    /// Llama 3.2 3B Instruct, hosted on OpenRouter.
    Llama,
    /// Gemma 2 9B, hosted on OpenRouter.
    Gemma,
    /// OpenAI chat completions.
    #[serde(rename = "openai")]
    OpenAi,
    /// Google Gemini.
    Gemini,
}

impl Provider {
    pub const ALL: [Provider; 5] = [
        Provider::Deepseek,
        Provider::Llama,
        Provider::Gemma,
        Provider::OpenAi,
        Provider::Gemini,
    ];

    /// Parse a provider key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Provider::Deepseek => "deepseek",
            Provider::Llama => "llama",
            Provider::Gemma => "gemma",
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
        }
    }

    /// Whether the model is served through OpenRouter.
    pub fn is_openrouter(self) -> bool {
        matches!(self, Provider::Deepseek | Provider::Llama | Provider::Gemma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_defaults_to_deepseek() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"messages": [{"role": "user", "content": "hi"}]}"#).unwrap();
        assert_eq!(req.provider, "deepseek");
        assert_eq!(req.messages, vec![ChatMessage::new("user", "hi")]);
    }

    #[test]
    fn messages_default_to_empty() {
        let req: ChatRequest = serde_json::from_str(r#"{"provider": "gemini"}"#).unwrap();
        assert!(req.messages.is_empty());
    }

    #[test]
    fn provider_keys_roundtrip() {
        for provider in Provider::ALL {
            assert_eq!(Provider::from_key(provider.key()), Some(provider));
            let json = serde_json::to_string(&provider).unwrap();
            assert_eq!(json, format!("\"{}\"", provider.key()));
        }
    }

    #[test]
    fn unknown_provider_key() {
        assert_eq!(Provider::from_key("claude"), None);
        assert_eq!(Provider::from_key("OpenAI"), None);
        assert_eq!(Provider::from_key(""), None);
    }

    #[test]
    fn openrouter_providers() {
        assert!(Provider::Deepseek.is_openrouter());
        assert!(Provider::Gemma.is_openrouter());
        assert!(!Provider::OpenAi.is_openrouter());
        assert!(!Provider::Gemini.is_openrouter());
    }
}
