//! Ollama LLM provider implementation.
//!
//! This module provides integration with Ollama, a local LLM runtime,
//! through its chat endpoint, which accepts role-tagged message lists.
//! Ollama API: https://github.com/ollama/ollama/blob/main/docs/api.md

use crate::client::{ChatRole, LlmClient, LlmRequest, LlmResponse, LlmUsage};
use scout_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound on a single completion round-trip.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);

/// Ollama chat API request format.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Ollama chat API response format.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    model: String,
    message: OllamaResponseMessage,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

/// Ollama LLM client.
pub struct OllamaClient {
    /// Base URL for the Ollama API
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a new Ollama client with default settings.
    ///
    /// Default URL: http://localhost:11434
    pub fn new() -> Self {
        Self::with_base_url("http://localhost:11434")
    }

    /// Create a new Ollama client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Convert LlmRequest to the Ollama chat format.
    fn to_ollama_request(&self, request: &LlmRequest) -> OllamaRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| OllamaMessage {
                role: match m.role {
                    ChatRole::System => "system",
                    ChatRole::User => "user",
                },
                content: m.content.clone(),
            })
            .collect();

        let options = if request.temperature.is_some() || request.max_tokens.is_some() {
            Some(OllamaOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            })
        } else {
            None
        };

        OllamaRequest {
            model: request.model.clone(),
            messages,
            stream: false,
            options,
        }
    }

    /// Convert an Ollama response to LlmResponse.
    fn convert_response(&self, response: OllamaResponse) -> LlmResponse {
        let usage = LlmUsage::new(
            response.prompt_eval_count.unwrap_or(0),
            response.eval_count.unwrap_or(0),
        );

        LlmResponse {
            content: response.message.content,
            model: response.model,
            usage,
        }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for OllamaClient {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        tracing::debug!("Sending completion request to Ollama: {:?}", request);

        let ollama_request = self.to_ollama_request(request);
        let url = format!("{}/api/chat", self.base_url);

        let response = self
            .client
            .post(&url)
            .timeout(COMPLETION_TIMEOUT)
            .json(&ollama_request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send request to Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "Ollama API error ({}): {}",
                status, error_text
            )));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse Ollama response: {}", e)))?;

        tracing::debug!("Received completion from Ollama");

        Ok(self.convert_response(ollama_response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_client_creation() {
        let client = OllamaClient::new();
        assert_eq!(client.provider_name(), "ollama");
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_ollama_request_conversion() {
        let client = OllamaClient::new();
        let request = LlmRequest::new("llama3.2")
            .with_system("be brief")
            .with_user("Hello")
            .with_temperature(0.7)
            .with_max_tokens(100);

        let ollama_req = client.to_ollama_request(&request);
        assert_eq!(ollama_req.model, "llama3.2");
        assert_eq!(ollama_req.messages.len(), 2);
        assert_eq!(ollama_req.messages[0].role, "system");
        assert_eq!(ollama_req.messages[1].role, "user");
        assert_eq!(ollama_req.messages[1].content, "Hello");
        assert!(!ollama_req.stream);

        let options = ollama_req.options.expect("options should be set");
        assert_eq!(options.temperature, Some(0.7));
        assert_eq!(options.num_predict, Some(100));
    }

    #[test]
    fn test_options_omitted_when_unset() {
        let client = OllamaClient::new();
        let request = LlmRequest::new("llama3.2").with_user("Hello");

        let ollama_req = client.to_ollama_request(&request);
        assert!(ollama_req.options.is_none());
    }

    #[test]
    fn test_response_conversion() {
        let client = OllamaClient::new();
        let response = OllamaResponse {
            model: "llama3.2".to_string(),
            message: OllamaResponseMessage {
                content: "hi".to_string(),
            },
            prompt_eval_count: Some(10),
            eval_count: Some(5),
        };

        let converted = client.convert_response(response);
        assert_eq!(converted.content, "hi");
        assert_eq!(converted.usage.total_tokens, 15);
    }
}
