//! Error types for Scout.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Ollama is not reachable. Start it with 'ollama serve'.")]
    LlmUnavailable,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoutError {
    /// True for errors the conversation recovers from by re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScoutError::Validation { .. } | ScoutError::LlmUnavailable | ScoutError::Llm(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = ScoutError::Validation {
            field: "email address".to_string(),
            reason: "it doesn't look like a valid email format".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid email address: it doesn't look like a valid email format"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_io_error_not_recoverable() {
        let err = ScoutError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(!err.is_recoverable());
    }
}
