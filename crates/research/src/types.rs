//! Pipeline data model.

use serde::{Deserialize, Serialize};

/// A single search-engine result considered for content extraction.
///
/// Construction goes through [`SearchResult::new`], which enforces the
/// field invariants; a value of this type always has a non-empty title
/// and snippet and an `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result heading text
    pub title: String,

    /// Absolute URL of the result page
    pub url: String,

    /// Search-engine snippet for the result
    pub snippet: String,
}

impl SearchResult {
    /// Build a result from raw parsed fields.
    ///
    /// Returns `None` unless the trimmed title and snippet are non-empty
    /// and the URL starts with an HTTP scheme.
    pub fn new(title: &str, url: &str, snippet: &str) -> Option<Self> {
        let title = title.trim();
        let url = url.trim();
        let snippet = snippet.trim();

        if title.is_empty() || snippet.is_empty() || !url.starts_with("http") {
            return None;
        }

        Some(Self {
            title: title.to_string(),
            url: url.to_string(),
            snippet: snippet.to_string(),
        })
    }
}

/// Terminal artifact returned to the caller.
///
/// `citations` holds the URLs whose pages contributed extracted content
/// to the answer, in extraction order. `search_queries_used` holds the
/// expanded queries that drove retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResponse {
    /// The original question
    pub query: String,

    /// Synthesized answer text
    pub answer: String,

    /// URLs that contributed extracted page content, in order
    pub citations: Vec<String>,

    /// Expanded queries used for retrieval, in order
    #[serde(rename = "searchQueriesUsed")]
    pub search_queries_used: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_accepts_valid_fields() {
        let result = SearchResult::new(
            " Rust book ",
            "https://doc.rust-lang.org/book/",
            " The official guide. ",
        )
        .unwrap();

        assert_eq!(result.title, "Rust book");
        assert_eq!(result.url, "https://doc.rust-lang.org/book/");
        assert_eq!(result.snippet, "The official guide.");
    }

    #[test]
    fn test_search_result_rejects_blank_fields() {
        assert!(SearchResult::new("", "https://example.com", "snippet").is_none());
        assert!(SearchResult::new("title", "https://example.com", "   ").is_none());
        assert!(SearchResult::new("title", "", "snippet").is_none());
    }

    #[test]
    fn test_search_result_rejects_non_http_url() {
        assert!(SearchResult::new("title", "ftp://example.com", "snippet").is_none());
        assert!(SearchResult::new("title", "javascript:void(0)", "snippet").is_none());
    }

    #[test]
    fn test_response_serializes_camel_case_queries_field() {
        let response = ResearchResponse {
            query: "q".to_string(),
            answer: "a".to_string(),
            citations: vec!["https://example.com".to_string()],
            search_queries_used: vec!["q1".to_string()],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"searchQueriesUsed\""));
        assert!(json.contains("\"citations\""));
    }
}
