//! OpenAI-compatible LLM provider implementation.
//!
//! Targets the `/v1/chat/completions` wire format, which is also served
//! by Groq, Together, vLLM, and most hosted gateways. Only the first
//! choice's message content is consumed.

use crate::client::{ChatRole, LlmClient, LlmRequest, LlmResponse, LlmUsage};
use scout_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound on a single completion round-trip.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat completions request format.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

/// Chat completions response format.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<WireUsage>,
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

#[derive(Debug, Deserialize)]
struct WireUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

/// OpenAI-compatible LLM client.
pub struct OpenAiClient {
    /// Base URL, e.g. "https://api.openai.com"
    base_url: String,

    /// Bearer token sent with every request
    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a client against the official OpenAI endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url("https://api.openai.com", api_key)
    }

    /// Create a client against a custom OpenAI-compatible endpoint.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn to_wire_request(&self, request: &LlmRequest) -> ChatCompletionRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| WireMessage {
                role: match m.role {
                    ChatRole::System => "system",
                    ChatRole::User => "user",
                },
                content: m.content.clone(),
            })
            .collect();

        ChatCompletionRequest {
            model: request.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for OpenAiClient {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        tracing::debug!("Sending completion request to {}", self.base_url);

        let wire_request = self.to_wire_request(request);
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .timeout(COMPLETION_TIMEOUT)
            .bearer_auth(&self.api_key)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send chat completion: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "Chat completions API error ({}): {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse completion response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::Llm("Completion response had no choices".to_string()))?;

        let usage = completion
            .usage
            .map(|u| LlmUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        let model = if completion.model.is_empty() {
            request.model.clone()
        } else {
            completion.model
        };

        Ok(LlmResponse {
            content,
            model,
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_client_creation() {
        let client = OpenAiClient::new("sk-test");
        assert_eq!(client.provider_name(), "openai");
        assert_eq!(client.base_url, "https://api.openai.com");
    }

    #[test]
    fn test_wire_request_conversion() {
        let client = OpenAiClient::new("sk-test");
        let request = LlmRequest::new("gpt-4o-mini")
            .with_system("be brief")
            .with_user("Hello")
            .with_max_tokens(256);

        let wire = client.to_wire_request(&request);
        assert_eq!(wire.model, "gpt-4o-mini");
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.max_tokens, Some(256));
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "model": "gpt-4o-mini",
            "choices": [{"message": {"role": "assistant", "content": "hi"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;

        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hi"));
    }
}
