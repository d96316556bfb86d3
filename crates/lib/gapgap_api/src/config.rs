//! API server configuration.

use gapgap_core::completion::config::CompletionConfig;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3100").
    pub bind_addr: String,
    /// Completion provider settings.
    pub completion: CompletionConfig,
}
