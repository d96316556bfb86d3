//! OpenAI chat completion provider.
//!
//! Calls `{base_url}/chat/completions` once per request. No retry: a failed
//! call is reported to the caller, which rolls back its transaction.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::config::CompletionConfig;
use super::{CompletionError, CompletionProvider, CompletionRequest};

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}

/// OpenAI-compatible completion client.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiProvider {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        }
    }

    /// Build a provider from config, failing if no API key is set.
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| CompletionError::Config("OpenAI API key not configured".into()))?;
        Ok(Self::new(api_key, &config.base_url))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| CompletionError::Provider(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(CompletionError::Provider(format!("{status} {body}")));
        }

        let data: OpenAIResponse = resp
            .json()
            .await
            .map_err(|e| CompletionError::Provider(format!("response parse error: {e}")))?;

        data.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CompletionError::Provider("response contained no completion".into()))
    }
}
