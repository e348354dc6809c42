//! Answer synthesis with citation tracking.
//!
//! Walks the collected sources in order, extracting page content and
//! accumulating labeled material blocks, then issues one completion
//! call over the whole bundle. A source URL becomes a citation exactly
//! when its page contributed non-empty extracted content; snippets are
//! included as material but do not cite. Synthesis failure degrades the
//! response, it never fails the request.

use crate::extract::Extractor;
use crate::throttle::Throttle;
use crate::types::SearchResult;
use scout_llm::{LlmClient, LlmRequest};
use std::sync::Arc;

/// System instruction for the synthesis completion.
const SYNTHESIS_SYSTEM_PROMPT: &str = "You answer questions from supplied \
    web material. Use only the content and snippet blocks provided; do not \
    draw on outside knowledge. Cite source URLs where possible. If the \
    material is incomplete or contradictory, say so explicitly rather than \
    guessing.";

/// Returned when the completion succeeds but carries no text.
pub(crate) const FALLBACK_ANSWER: &str =
    "No answer could be generated from the retrieved sources.";

/// Returned when the synthesis completion fails outright.
pub(crate) const ERROR_ANSWER: &str =
    "The answer could not be synthesized due to an internal error.";

/// Turns extracted source material into an answer and citation list.
pub struct Synthesizer {
    client: Arc<dyn LlmClient>,
    model: String,
    extractor: Arc<dyn Extractor>,
    throttle: Arc<dyn Throttle>,
}

impl Synthesizer {
    pub fn new(
        client: Arc<dyn LlmClient>,
        model: impl Into<String>,
        extractor: Arc<dyn Extractor>,
        throttle: Arc<dyn Throttle>,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            extractor,
            throttle,
        }
    }

    /// Synthesize an answer for `question` from `sources`.
    ///
    /// Returns the answer text and the citation list: the URLs whose
    /// pages yielded non-empty content, in extraction order. Never
    /// fails; a completion error yields a fixed error answer with no
    /// citations.
    pub async fn synthesize(
        &self,
        question: &str,
        sources: &[SearchResult],
    ) -> (String, Vec<String>) {
        let mut blocks: Vec<String> = Vec::new();
        let mut citations: Vec<String> = Vec::new();

        for (i, source) in sources.iter().enumerate() {
            if i > 0 {
                self.throttle.between_sources().await;
            }

            let content = self.extractor.extract(&source.url).await;
            if !content.is_empty() {
                blocks.push(format!("Content from {}:\n{}", source.url, content));
                citations.push(source.url.clone());
            }

            // Snippets are usable material even when the page is not.
            if !source.snippet.trim().is_empty() {
                blocks.push(format!(
                    "Search snippet from {} ({}):\n{}",
                    source.url, source.title, source.snippet
                ));
            }
        }

        tracing::debug!(
            "Synthesizing from {} blocks ({} citations)",
            blocks.len(),
            citations.len()
        );

        let user_message = format!(
            "Question: {}\n\nSource material:\n\n{}",
            question,
            blocks.join("\n\n")
        );

        let request = LlmRequest::new(&self.model)
            .with_system(SYNTHESIS_SYSTEM_PROMPT)
            .with_user(user_message)
            .with_temperature(0.3)
            .with_max_tokens(1000);

        match self.client.complete(&request).await {
            Ok(response) => {
                let answer = response.content.trim().to_string();
                if answer.is_empty() {
                    (FALLBACK_ANSWER.to_string(), citations)
                } else {
                    (answer, citations)
                }
            }
            Err(e) => {
                tracing::warn!("Synthesis completion failed: {}", e);
                (ERROR_ANSWER.to_string(), Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::throttle::NoThrottle;
    use scout_llm::MockClient;
    use std::collections::HashMap;

    /// Extractor stub serving canned content per URL.
    struct StubExtractor {
        pages: HashMap<String, String>,
    }

    impl StubExtractor {
        fn new(pages: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(Self {
                pages: pages
                    .iter()
                    .map(|(url, content)| (url.to_string(), content.to_string()))
                    .collect(),
            })
        }
    }

    #[async_trait::async_trait]
    impl Extractor for StubExtractor {
        async fn extract(&self, url: &str) -> String {
            self.pages.get(url).cloned().unwrap_or_default()
        }
    }

    fn source(title: &str, url: &str, snippet: &str) -> SearchResult {
        SearchResult::new(title, url, snippet).unwrap()
    }

    #[tokio::test]
    async fn test_citations_are_extracted_sources_in_order() {
        let extractor = StubExtractor::new(&[
            ("https://a.example/", "Content of A"),
            ("https://c.example/", "Content of C"),
        ]);
        let client = Arc::new(MockClient::with_reply("an answer"));
        let synth = Synthesizer::new(client, "mock", extractor, Arc::new(NoThrottle));

        let sources = vec![
            source("A", "https://a.example/", "snippet a"),
            source("B", "https://b.example/", "snippet b"),
            source("C", "https://c.example/", "snippet c"),
        ];

        let (answer, citations) = synth.synthesize("q", &sources).await;
        assert_eq!(answer, "an answer");
        assert_eq!(citations, vec!["https://a.example/", "https://c.example/"]);
    }

    #[tokio::test]
    async fn test_snippet_only_source_contributes_block_but_no_citation() {
        let extractor = StubExtractor::new(&[]);
        let client = Arc::new(MockClient::with_reply("answer"));
        let synth =
            Synthesizer::new(client.clone(), "mock", extractor, Arc::new(NoThrottle));

        let sources = vec![source("Only snippet", "https://s.example/", "the snippet text")];
        let (_, citations) = synth.synthesize("q", &sources).await;

        assert!(citations.is_empty());
        let recorded = synth_user_message(&client);
        assert!(recorded.contains("Search snippet from https://s.example/"));
        assert!(recorded.contains("the snippet text"));
        assert!(!recorded.contains("Content from"));
    }

    #[tokio::test]
    async fn test_content_and_snippet_both_included() {
        let extractor = StubExtractor::new(&[("https://a.example/", "page prose")]);
        let client = Arc::new(MockClient::with_reply("answer"));
        let synth =
            Synthesizer::new(client.clone(), "mock", extractor, Arc::new(NoThrottle));

        let sources = vec![source("A", "https://a.example/", "snippet a")];
        synth.synthesize("the question", &sources).await;

        let recorded = synth_user_message(&client);
        assert!(recorded.contains("Content from https://a.example/:\npage prose"));
        assert!(recorded.contains("Search snippet from https://a.example/ (A):\nsnippet a"));
        assert!(recorded.starts_with("Question: the question"));
    }

    #[tokio::test]
    async fn test_completion_failure_degrades_to_error_answer() {
        let extractor = StubExtractor::new(&[("https://a.example/", "content")]);
        let client = Arc::new(MockClient::failing());
        let synth = Synthesizer::new(client, "mock", extractor, Arc::new(NoThrottle));

        let sources = vec![source("A", "https://a.example/", "snippet")];
        let (answer, citations) = synth.synthesize("q", &sources).await;

        assert_eq!(answer, ERROR_ANSWER);
        assert!(citations.is_empty());
    }

    #[tokio::test]
    async fn test_empty_completion_uses_fallback_keeps_citations() {
        let extractor = StubExtractor::new(&[("https://a.example/", "content")]);
        let client = Arc::new(MockClient::with_reply("   "));
        let synth = Synthesizer::new(client, "mock", extractor, Arc::new(NoThrottle));

        let sources = vec![source("A", "https://a.example/", "snippet")];
        let (answer, citations) = synth.synthesize("q", &sources).await;

        assert_eq!(answer, FALLBACK_ANSWER);
        assert_eq!(citations, vec!["https://a.example/"]);
    }

    #[tokio::test]
    async fn test_no_sources_still_completes() {
        let extractor = StubExtractor::new(&[]);
        let client = Arc::new(MockClient::with_reply("nothing to report"));
        let synth = Synthesizer::new(client, "mock", extractor, Arc::new(NoThrottle));

        let (answer, citations) = synth.synthesize("q", &[]).await;
        assert_eq!(answer, "nothing to report");
        assert!(citations.is_empty());
    }

    fn synth_user_message(client: &MockClient) -> String {
        let recorded = client.recorded_requests();
        recorded
            .last()
            .expect("no completion recorded")
            .messages
            .last()
            .expect("no user message")
            .content
            .clone()
    }
}
