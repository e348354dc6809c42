//! Mock LLM provider with scripted replies.
//!
//! Used by tests and development to exercise completion-dependent paths
//! without a live provider. Replies are served in order; the client can
//! be scripted to fail outright or after a number of successes.

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use scout_core::{AppError, AppResult};
use std::sync::Mutex;

/// Deterministic scripted client.
pub struct MockClient {
    replies: Mutex<Vec<String>>,
    fail_after: Option<usize>,
    calls: Mutex<Vec<LlmRequest>>,
}

impl MockClient {
    /// A client that answers every completion with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::with_replies(vec![reply.into()])
    }

    /// A client that serves `replies` in order, repeating the last one
    /// once the script is exhausted.
    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies),
            fail_after: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A client whose every completion fails.
    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            fail_after: Some(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A client that succeeds `n` times and fails afterwards.
    pub fn failing_after(n: usize, replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies),
            fail_after: Some(n),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock lock poisoned").len()
    }

    /// Requests recorded so far, in call order.
    pub fn recorded_requests(&self) -> Vec<LlmRequest> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockClient {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        let call_index = {
            let mut calls = self.calls.lock().expect("mock lock poisoned");
            calls.push(request.clone());
            calls.len() - 1
        };

        if let Some(n) = self.fail_after {
            if call_index >= n {
                return Err(AppError::Llm("mock completion failure".to_string()));
            }
        }

        let content = {
            let replies = self.replies.lock().expect("mock lock poisoned");
            if replies.is_empty() {
                String::new()
            } else {
                replies[call_index.min(replies.len() - 1)].clone()
            }
        };

        Ok(LlmResponse {
            content,
            model: request.model.clone(),
            usage: LlmUsage::default(),
        })
    }
}
