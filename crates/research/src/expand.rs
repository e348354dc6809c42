//! Query expansion.
//!
//! One completion call turns the user's question into several targeted
//! search queries. Expansion never fails the pipeline: any completion
//! problem degrades to searching the original question verbatim.

use scout_llm::{LlmClient, LlmRequest};
use std::sync::Arc;

/// System instruction for the expansion completion.
const EXPANSION_SYSTEM_PROMPT: &str = "You generate web search queries. \
    Given a question, produce exactly three specific search queries that \
    together cover it. Output one query per line with no numbering, \
    bullets, or commentary.";

/// Expands a question into search queries via the completion service.
pub struct QueryExpander {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl QueryExpander {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Expand `question` into an ordered list of search queries.
    ///
    /// Returns at least one query. On completion failure or an unusable
    /// completion the list is exactly `[question]`.
    pub async fn expand(&self, question: &str) -> Vec<String> {
        let request = LlmRequest::new(&self.model)
            .with_system(EXPANSION_SYSTEM_PROMPT)
            .with_user(question)
            .with_temperature(0.3)
            .with_max_tokens(200);

        let queries = match self.client.complete(&request).await {
            Ok(response) => parse_queries(&response.content),
            Err(e) => {
                tracing::warn!("Query expansion failed, using original question: {}", e);
                Vec::new()
            }
        };

        if queries.is_empty() {
            return vec![question.to_string()];
        }

        tracing::debug!("Expanded question into {} queries", queries.len());
        queries
    }
}

/// Split a completion into queries: one per line, blanks discarded.
fn parse_queries(completion: &str) -> Vec<String> {
    completion
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
