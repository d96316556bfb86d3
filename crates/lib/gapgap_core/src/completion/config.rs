//! Completion provider configuration.

/// Default base URL for the OpenAI API.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Resolved configuration for the completion provider.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// API key. `None` leaves the chat endpoint unconfigured.
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API (no trailing slash needed).
    pub base_url: String,
}

impl CompletionConfig {
    /// Resolve settings from optional raw values. Blank values count as unset.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let api_key = api_key
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let base_url = base_url
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        Self { api_key, base_url }
    }
}
