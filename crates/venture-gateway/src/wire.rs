//! Chat-completion request and response bodies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request payload for `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error object OpenRouter may embed in an otherwise successful response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub message: String,
}

impl ApiErrorBody {
    pub fn numeric_code(&self) -> Option<u16> {
        self.code
            .as_ref()
            .and_then(serde_json::Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "id": "gen-123",
        "model": "mistralai/mistral-small-3.2-24b-instruct:free",
        "choices": [
            {
                "index": 0,
                "finish_reason": "stop",
                "message": {"role": "assistant", "content": "{\"ideas\": []}"}
            }
        ],
        "usage": {"prompt_tokens": 210, "completion_tokens": 12}
    }"#;

    #[test]
    fn parse_completion_fixture() {
        let completion: ChatCompletion = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(completion.choices.len(), 1);
        assert_eq!(
            completion.choices[0].message.content.as_deref(),
            Some("{\"ideas\": []}")
        );
        assert!(completion.error.is_none());
    }

    #[test]
    fn parse_embedded_error() {
        let json = r#"{"error": {"code": 429, "message": "Rate limit exceeded"}}"#;
        let completion: ChatCompletion = serde_json::from_str(json).unwrap();
        let error = completion.error.unwrap();
        assert_eq!(error.numeric_code(), Some(429));
        assert_eq!(error.message, "Rate limit exceeded");
    }

    #[test]
    fn request_serializes_expected_keys() {
        let request = ChatRequest {
            model: "m".into(),
            messages: vec![ChatMessage::user("hi")],
            max_tokens: 2000,
            temperature: 0.5,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "m");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hi");
        assert_eq!(value["max_tokens"], 2000);
        assert_eq!(value["temperature"], 0.5);
    }
}
