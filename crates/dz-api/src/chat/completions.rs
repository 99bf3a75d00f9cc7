//! OpenAI-compatible chat-completions wire format, shared by the OpenAI and
//! OpenRouter backends.

use serde::{Deserialize, Serialize};

use dz_protocol::ChatMessage;

use super::ChatError;

/// Request body for `POST {base}/chat/completions`.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
}

impl<'a> CompletionRequest<'a> {
    /// Request with `system` prepended to the caller's messages.
    pub fn with_system(model: &'a str, system: &str, messages: &[ChatMessage]) -> Self {
        let mut all = Vec::with_capacity(messages.len() + 1);
        all.push(ChatMessage::new("system", system));
        all.extend_from_slice(messages);
        Self {
            model,
            messages: all,
        }
    }
}

/// Completion response (only fields we need).
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionResponse {
    /// Content of the first choice.
    pub fn into_reply(self) -> Result<String, ChatError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ChatError::Malformed("no choices in completion response".into()))
    }
}

/// Send a prepared completion request and extract the reply.
pub async fn send(request: reqwest::RequestBuilder) -> Result<String, ChatError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ChatError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: CompletionResponse = response.json().await?;
    parsed.into_reply()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_message_goes_first() {
        let messages = [
            ChatMessage::new("user", "I have a headache"),
            ChatMessage::new("assistant", "How long?"),
        ];
        let req = CompletionRequest::with_system("m", "be kind", &messages);
        assert_eq!(req.messages.len(), 3);
        assert_eq!(req.messages[0], ChatMessage::new("system", "be kind"));
        assert_eq!(req.messages[2].content, "How long?");

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn reply_from_first_choice() {
        let resp: CompletionResponse = serde_json::from_str(
            r#"{"id": "x", "choices": [{"index": 0, "message": {"role": "assistant", "content": "Rest well."}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.into_reply().unwrap(), "Rest well.");
    }

    #[test]
    fn empty_choices_are_malformed() {
        let resp: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(resp.into_reply(), Err(ChatError::Malformed(_))));
    }

    #[test]
    fn null_content_is_malformed() {
        let resp: CompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(resp.into_reply().is_err());
    }
}
