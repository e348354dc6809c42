//! LLM provider factory.
//!
//! This module provides a factory for creating LLM clients based on
//! application configuration. It handles provider resolution and
//! credential injection.

use crate::client::LlmClient;
use crate::providers::{MockClient, OllamaClient, OpenAiClient};
use std::sync::Arc;

/// Create an LLM client based on the provider name.
///
/// # Arguments
/// * `provider` - Provider identifier ("ollama", "openai", "mock")
/// * `endpoint` - Optional custom endpoint URL
/// * `api_key` - Optional API key (for providers that require it)
///
/// # Errors
/// Returns an error message if the provider is unknown or a required
/// credential is missing.
pub fn create_client(
    provider: &str,
    endpoint: Option<&str>,
    api_key: Option<&str>,
) -> Result<Arc<dyn LlmClient>, String> {
    match provider.to_lowercase().as_str() {
        "ollama" => {
            let base_url = endpoint.unwrap_or("http://localhost:11434");
            Ok(Arc::new(OllamaClient::with_base_url(base_url)))
        }
        "openai" => {
            let api_key = api_key.ok_or_else(|| "OpenAI provider requires API key".to_string())?;
            let client = match endpoint {
                Some(base_url) => OpenAiClient::with_base_url(base_url, api_key),
                None => OpenAiClient::new(api_key),
            };
            Ok(Arc::new(client))
        }
        "mock" => Ok(Arc::new(MockClient::with_reply("mock reply"))),
        _ => Err(format!("Unknown provider: {}", provider)),
    }
}
