//! Completion module: chat completions from a remote text model.
//!
//! # Public API
//!
//! - [`CompletionProvider`]: the seam the send flow talks to
//! - [`CompletionRequest::new`]: request with the fixed model parameters
//! - [`openai::OpenAiProvider`]: OpenAI-compatible `/chat/completions` client
//! - [`config::CompletionConfig`]: API key and endpoint resolution

pub mod config;
pub mod openai;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Model used for every completion.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Upper bound on generated tokens.
pub const MAX_TOKENS: u32 = 2000;

/// Sampling temperature.
pub const TEMPERATURE: f32 = 0.7;

/// Errors that can occur while requesting a completion.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{0}")]
    Provider(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// One prior turn handed to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// A completion request: the ordered context window plus model parameters.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatTurn>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    /// Build a request for `messages` using the fixed model parameters.
    pub fn new(messages: Vec<ChatTurn>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

/// Remote text-completion service.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Produce one completion for the request, or fail.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_fixed_parameters() {
        let req = CompletionRequest::new(vec![ChatTurn {
            role: "user".into(),
            content: "hi".into(),
        }]);
        assert_eq!(req.model, "gpt-4o-mini");
        assert_eq!(req.max_tokens, 2000);
        assert!((req.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(req.messages.len(), 1);
    }

    #[test]
    fn request_serializes_openai_shape() {
        let req = CompletionRequest::new(vec![ChatTurn {
            role: "assistant".into(),
            content: "hello".into(),
        }]);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 2000);
        assert_eq!(json["messages"][0]["role"], "assistant");
        assert_eq!(json["messages"][0]["content"], "hello");
    }
}
