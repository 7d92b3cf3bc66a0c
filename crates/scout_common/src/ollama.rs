//! Wire types for the Ollama HTTP API.

use serde::{Deserialize, Serialize};

/// One chat message, role is "system", "user", or "assistant".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OllamaMessage {
    pub role: String,
    pub content: String,
}

impl OllamaMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling options sent with each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOptions {
    pub temperature: f32,
    pub top_p: f32,
    /// Response length cap, in tokens.
    pub num_predict: u32,
}

impl ChatOptions {
    /// Options for conversational replies.
    pub fn reply() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            num_predict: 300,
        }
    }

    /// Options for question generation, which needs a longer completion.
    pub fn generation() -> Self {
        Self {
            num_predict: 500,
            ..Self::reply()
        }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaMessage>,
    pub stream: bool,
    pub options: ChatOptions,
}

/// Response body for `POST /api/chat` with `stream: false`.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaChatResponse {
    pub message: OllamaMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_expected_shape() {
        let request = OllamaChatRequest {
            model: "llama2".to_string(),
            messages: vec![OllamaMessage::user("hello")],
            stream: false,
            options: ChatOptions::reply(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama2");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["options"]["num_predict"], 300);
    }

    #[test]
    fn test_response_deserializes() {
        let json = r#"{"message": {"role": "assistant", "content": "hi"}, "done": true}"#;
        let response: OllamaChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.content, "hi");
    }

    #[test]
    fn test_generation_options_longer() {
        assert!(ChatOptions::generation().num_predict > ChatOptions::reply().num_predict);
    }
}
