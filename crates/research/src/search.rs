//! Search-results retrieval and parsing.
//!
//! A query is run as a plain HTTP GET against the Google results page
//! and the returned markup is parsed into candidate sources. Retrieval
//! never fails the pipeline: a dead query contributes zero sources.

use crate::types::SearchResult;
use scout_core::{AppError, AppResult};
use scraper::{Html, Selector};
use std::time::Duration;

/// Search-results endpoint.
const RESULTS_ENDPOINT: &str = "https://www.google.com/search";

/// Results requested per query; more than needed so that malformed
/// containers can be skipped without starving the cap.
const REQUESTED_RESULTS: &str = "20";

/// Maximum accepted results per query.
pub(crate) const MAX_RESULTS_PER_QUERY: usize = 8;

/// Upper bound on a search or page fetch.
pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-like User-Agent; plain client UAs get bot-rejected markup.
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Source retrieval seam; implemented by [`WebSearcher`] and by test stubs.
#[async_trait::async_trait]
pub trait Searcher: Send + Sync {
    /// Run one query and return up to [`MAX_RESULTS_PER_QUERY`] sources.
    async fn search(&self, query: &str) -> Vec<SearchResult>;
}

/// Live searcher against the Google results page.
pub struct WebSearcher {
    http: reqwest::Client,
}

impl WebSearcher {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Share an existing HTTP client (connection pool reuse).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    async fn fetch_results_page(&self, query: &str) -> AppResult<String> {
        let response = self
            .http
            .get(RESULTS_ENDPOINT)
            .query(&[("q", query), ("num", REQUESTED_RESULTS)])
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .header(reqwest::header::ACCEPT, "text/html")
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::Search(format!("Search request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Search(format!(
                "Search returned HTTP {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Search(format!("Failed to read search response: {}", e)))
    }
}

impl Default for WebSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Searcher for WebSearcher {
    async fn search(&self, query: &str) -> Vec<SearchResult> {
        match self.fetch_results_page(query).await {
            Ok(html) => {
                let results = parse_results(&html);
                tracing::debug!("Query {:?} yielded {} results", query, results.len());
                results
            }
            Err(e) => {
                tracing::warn!("Search failed for {:?}: {}", query, e);
                Vec::new()
            }
        }
    }
}

/// Parse a results page into accepted sources, in document order.
///
/// Result containers are `div.g` elements; within each, the `h3` heading
/// is the title, the first hyperlink is the URL, and `.VwiC3b` carries
/// the snippet. Containers missing any field are skipped individually.
/// Kept synchronous: `scraper::Html` is not `Send` and must not live
/// across an await.
pub(crate) fn parse_results(html: &str) -> Vec<SearchResult> {
    let doc = Html::parse_document(html);

    let container_sel = Selector::parse("div.g").unwrap();
    let title_sel = Selector::parse("h3").unwrap();
    let link_sel = Selector::parse("a[href]").unwrap();
    let snippet_sel = Selector::parse(".VwiC3b").unwrap();

    let mut results = Vec::new();
    for container in doc.select(&container_sel) {
        let title = container
            .select(&title_sel)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default();

        let url = container
            .select(&link_sel)
            .next()
            .and_then(|el| el.value().attr("href"))
            .unwrap_or_default();

        let snippet = container
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default();

        if let Some(result) = SearchResult::new(&title, url, &snippet) {
            results.push(result);
            if results.len() == MAX_RESULTS_PER_QUERY {
                break;
            }
        }
    }

    results
}
