//! Pipeline orchestration.
//!
//! Sequences expansion, retrieval, and synthesis under the politeness
//! policy and assembles the response. Strictly sequential: no parallel
//! fan-out across queries or sources.

use crate::expand::QueryExpander;
use crate::extract::ContentExtractor;
use crate::search::{Searcher, WebSearcher};
use crate::synthesize::Synthesizer;
use crate::throttle::Throttle;
use crate::types::{ResearchResponse, SearchResult};
use scout_llm::LlmClient;
use std::sync::Arc;

/// The four-stage research pipeline.
pub struct Pipeline {
    expander: QueryExpander,
    searcher: Arc<dyn Searcher>,
    synthesizer: Synthesizer,
    throttle: Arc<dyn Throttle>,
}

impl Pipeline {
    /// Wire a pipeline with live search and extraction components.
    ///
    /// The searcher and extractor share one HTTP client; the LLM client
    /// is shared between expansion and synthesis.
    pub fn new(
        llm: Arc<dyn LlmClient>,
        model: impl Into<String>,
        throttle: Arc<dyn Throttle>,
    ) -> Self {
        let model = model.into();
        let http = reqwest::Client::new();

        Self {
            expander: QueryExpander::new(llm.clone(), model.clone()),
            searcher: Arc::new(WebSearcher::with_client(http.clone())),
            synthesizer: Synthesizer::new(
                llm,
                model,
                Arc::new(ContentExtractor::with_client(http)),
                throttle.clone(),
            ),
            throttle,
        }
    }

    /// Wire a pipeline from explicit components (test seam).
    pub fn with_components(
        expander: QueryExpander,
        searcher: Arc<dyn Searcher>,
        synthesizer: Synthesizer,
        throttle: Arc<dyn Throttle>,
    ) -> Self {
        Self {
            expander,
            searcher,
            synthesizer,
            throttle,
        }
    }

    /// Answer `question` end to end.
    ///
    /// Every stage degrades rather than fails, so this always produces
    /// a response for a readable question.
    pub async fn run(&self, question: &str) -> ResearchResponse {
        tracing::info!("Researching: {}", question);

        let queries = self.expander.expand(question).await;

        let mut sources: Vec<SearchResult> = Vec::new();
        for (i, query) in queries.iter().enumerate() {
            let results = self.searcher.search(query).await;
            sources.extend(results);

            // Politeness delay between search-engine hits; the trailing
            // wait after the last query is skipped.
            if i + 1 < queries.len() {
                self.throttle.between_queries().await;
            }
        }

        // No deduplication across queries: a URL surfaced twice is
        // fetched twice.
        tracing::info!(
            "Collected {} sources from {} queries",
            sources.len(),
            queries.len()
        );

        let (answer, citations) = self.synthesizer.synthesize(question, &sources).await;

        ResearchResponse {
            query: question.to_string(),
            answer,
            citations,
            search_queries_used: queries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Extractor;
    use crate::synthesize::{ERROR_ANSWER, FALLBACK_ANSWER};
    use crate::throttle::NoThrottle;
    use scout_llm::MockClient;

    /// Searcher stub serving its results to the first query only;
    /// later queries come back empty, like a query with no hits.
    struct StubSearcher {
        results: std::sync::Mutex<Vec<SearchResult>>,
    }

    impl StubSearcher {
        fn once(results: Vec<SearchResult>) -> Arc<Self> {
            Arc::new(Self {
                results: std::sync::Mutex::new(results),
            })
        }
    }

    #[async_trait::async_trait]
    impl Searcher for StubSearcher {
        async fn search(&self, _query: &str) -> Vec<SearchResult> {
            std::mem::take(&mut *self.results.lock().expect("stub lock poisoned"))
        }
    }

    /// Extractor stub serving one canned page.
    struct StubExtractor {
        url: String,
        content: String,
    }

    #[async_trait::async_trait]
    impl Extractor for StubExtractor {
        async fn extract(&self, url: &str) -> String {
            if url == self.url {
                self.content.clone()
            } else {
                String::new()
            }
        }
    }

    const WATER_URL: &str = "https://example.com/water";

    fn water_pipeline(llm: Arc<MockClient>) -> Pipeline {
        let model = "mock";
        let throttle: Arc<dyn Throttle> = Arc::new(NoThrottle);

        let searcher = StubSearcher::once(vec![SearchResult::new(
            "Boiling point of water",
            WATER_URL,
            "Water boils at 100 degrees Celsius.",
        )
        .unwrap()]);

        let extractor = Arc::new(StubExtractor {
            url: WATER_URL.to_string(),
            content: "Water boils at 100°C at sea level.".to_string(),
        });

        Pipeline::with_components(
            QueryExpander::new(llm.clone(), model),
            searcher,
            Synthesizer::new(llm, model, extractor, throttle.clone()),
            throttle,
        )
    }

    #[tokio::test]
    async fn test_end_to_end_with_stubbed_stages() {
        let llm = Arc::new(MockClient::with_replies(vec![
            "water boiling point sea level\nboiling temperature water\nwater boiling celsius"
                .to_string(),
            "Water boils at 100°C at sea level.".to_string(),
        ]));
        let pipeline = water_pipeline(llm);

        let response = pipeline
            .run("What is the boiling point of water at sea level?")
            .await;

        assert_eq!(response.query, "What is the boiling point of water at sea level?");
        assert!(!response.answer.is_empty());
        assert_eq!(response.search_queries_used.len(), 3);
        assert_eq!(response.citations, vec![WATER_URL]);
    }

    #[tokio::test]
    async fn test_synthesis_failure_degrades_answer_only() {
        let llm = Arc::new(MockClient::failing_after(
            1,
            vec!["q one\nq two".to_string()],
        ));
        let pipeline = water_pipeline(llm);

        let response = pipeline.run("any question").await;

        assert_eq!(response.answer, ERROR_ANSWER);
        assert!(response.citations.is_empty());
        assert_eq!(response.search_queries_used, vec!["q one", "q two"]);
    }

    #[tokio::test]
    async fn test_expansion_failure_searches_original_question() {
        let llm = Arc::new(MockClient::failing());
        let pipeline = water_pipeline(llm);

        let response = pipeline.run("the verbatim question").await;

        assert_eq!(
            response.search_queries_used,
            vec!["the verbatim question"]
        );
        // Synthesis also failed (same failing client), but the request
        // still assembled a full response.
        assert_eq!(response.answer, ERROR_ANSWER);
    }

    #[tokio::test]
    async fn test_no_answer_text_uses_fallback() {
        let llm = Arc::new(MockClient::with_replies(vec![
            "only query".to_string(),
            "".to_string(),
        ]));
        let pipeline = water_pipeline(llm);

        let response = pipeline.run("question").await;
        assert_eq!(response.answer, FALLBACK_ANSWER);
        assert_eq!(response.citations, vec![WATER_URL]);
    }
}
