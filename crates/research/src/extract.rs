//! Page content extraction.
//!
//! Fetches a single page and reduces its markup to plain prose. The
//! reduction is heuristic and best-effort: a priority list of likely
//! content containers is tried first, then a paragraph-length filter
//! against boilerplate. Extraction never fails the pipeline; any
//! problem degrades to an empty string.

use crate::search::{BROWSER_USER_AGENT, FETCH_TIMEOUT};
use scout_core::{AppError, AppResult};
use scraper::{ElementRef, Html, Node, Selector};

/// Cap on extracted text, bounding the token budget passed to synthesis.
pub(crate) const MAX_CONTENT_CHARS: usize = 4000;

/// Paragraphs at or below this length are treated as boilerplate
/// fragments (menu labels, cookie notices) and dropped by the fallback.
const MIN_PARAGRAPH_CHARS: usize = 50;

/// Likely content containers, in priority order. The first selector
/// matching an element with non-empty text wins.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    "#content",
    ".content",
    "#main-content",
    ".post-content",
    ".article-body",
    ".entry-content",
];

/// Subtrees that never carry article prose.
const SKIP_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "iframe", "noscript", "svg", "img",
    "form",
];

/// Tags that end a line of prose when flattening the tree.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "br", "h1", "h2", "h3", "h4", "h5", "h6", "li", "tr", "section", "article",
    "blockquote", "pre",
];

/// Page-content seam; implemented by [`ContentExtractor`] and test stubs.
#[async_trait::async_trait]
pub trait Extractor: Send + Sync {
    /// Fetch `url` and return its extracted prose, or `""` when the page
    /// yields nothing usable. Empty is a value, not an error.
    async fn extract(&self, url: &str) -> String;
}

/// Live extractor fetching pages over HTTP.
pub struct ContentExtractor {
    http: reqwest::Client,
}

impl ContentExtractor {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Share an existing HTTP client (connection pool reuse).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    async fn fetch_page(&self, url: &str) -> AppResult<String> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .header(reqwest::header::ACCEPT, "text/html")
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::Extract(format!("Page fetch failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Extract(format!(
                "Page returned HTTP {}",
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if !content_type.is_empty()
            && !content_type.contains("text/html")
            && !content_type.contains("text/plain")
        {
            return Err(AppError::Extract(format!(
                "Unsupported content type: {}",
                content_type
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Extract(format!("Failed to read page body: {}", e)))
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Extractor for ContentExtractor {
    async fn extract(&self, url: &str) -> String {
        match self.fetch_page(url).await {
            Ok(html) => extract_text(&html),
            Err(e) => {
                tracing::warn!("Extraction failed for {}: {}", url, e);
                String::new()
            }
        }
    }
}

/// Reduce markup to normalized prose, capped at [`MAX_CONTENT_CHARS`].
///
/// Pure over the document tree so it is unit-testable against fixed
/// fixtures. Kept synchronous: `scraper::Html` is not `Send`.
pub(crate) fn extract_text(html: &str) -> String {
    let doc = Html::parse_document(html);

    // Priority containers first.
    for sel_str in CONTENT_SELECTORS {
        if let Ok(sel) = Selector::parse(sel_str) {
            if let Some(el) = doc.select(&sel).next() {
                let text = normalize_whitespace(&element_text(&el));
                if !text.is_empty() {
                    return truncate_chars(&text, MAX_CONTENT_CHARS);
                }
            }
        }
    }

    // Fallback: paragraphs long enough to be prose, joined by blank lines.
    if let Ok(p_sel) = Selector::parse("p") {
        let paragraphs: Vec<String> = doc
            .select(&p_sel)
            .map(|el| normalize_whitespace(&element_text(&el)))
            .filter(|text| text.len() > MIN_PARAGRAPH_CHARS)
            .collect();

        if !paragraphs.is_empty() {
            return truncate_chars(&paragraphs.join("\n\n"), MAX_CONTENT_CHARS);
        }
    }

    String::new()
}

/// Flatten an element's subtree to text, skipping non-content subtrees.
fn element_text(el: &ElementRef<'_>) -> String {
    let mut buf = String::new();
    collect_text(el, &mut buf);
    buf
}

fn collect_text(el: &ElementRef<'_>, buf: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => buf.push_str(&text.text),
            Node::Element(element) => {
                let name = element.name();
                if SKIP_TAGS.contains(&name) {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(&child_el, buf);
                }
                if BLOCK_TAGS.contains(&name) {
                    buf.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Collapse whitespace runs to single spaces and blank-line runs to a
/// single blank line; trims every line and the ends.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut blank_pending = false;

    for raw in text.lines() {
        let line = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            blank_pending = !lines.is_empty();
        } else {
            if blank_pending {
                lines.push(String::new());
                blank_pending = false;
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Truncate to the first `max` characters on a character boundary.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect::<String>().trim_end().to_string()
    }
}
