//! LLM integration crate for the Scout research service.
//!
//! This crate provides a provider-agnostic abstraction for chat-style
//! completions. A request is an ordered list of role-tagged messages;
//! the response is the first completion's text. Nothing else about a
//! provider's reply is inspected.
//!
//! # Providers
//! - **Ollama**: Local LLM runtime (default)
//! - **OpenAI**: Any OpenAI-compatible `/v1/chat/completions` endpoint
//! - **Mock**: Deterministic scripted client for tests
//!
//! # Example
//! ```no_run
//! use scout_llm::{LlmClient, LlmRequest, providers::OllamaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::new();
//! let request = LlmRequest::new("llama3.2")
//!     .with_system("You are terse.")
//!     .with_user("Hello, world!");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use client::{ChatMessage, ChatRole, LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::{MockClient, OllamaClient, OpenAiClient};
