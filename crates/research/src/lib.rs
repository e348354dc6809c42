//! Research pipeline for the Scout service.
//!
//! Answers a natural-language question in four sequential stages:
//!
//! 1. **Expansion** — one completion call turns the question into a
//!    handful of targeted search queries ([`QueryExpander`]).
//! 2. **Retrieval** — each query is run against a search-results page
//!    and parsed into candidate sources ([`WebSearcher`]).
//! 3. **Extraction** — each source page is fetched and reduced to plain
//!    prose ([`ContentExtractor`]).
//! 4. **Synthesis** — one completion call turns the collected material
//!    into an answer with a citation list ([`Synthesizer`]).
//!
//! Every stage below the orchestrator degrades instead of failing: a
//! dead search query contributes no sources, an unreadable page
//! contributes no content, a failed synthesis yields a fixed error
//! answer. Outbound pacing is injected through the [`Throttle`] trait
//! so tests run without wall-clock waits.

pub mod expand;
pub mod extract;
pub mod pipeline;
pub mod search;
pub mod synthesize;
pub mod throttle;
pub mod types;

// Re-export the pipeline surface
pub use expand::QueryExpander;
pub use extract::{ContentExtractor, Extractor};
pub use pipeline::Pipeline;
pub use search::{Searcher, WebSearcher};
pub use synthesize::Synthesizer;
pub use throttle::{FixedThrottle, NoThrottle, Throttle};
pub use types::{ResearchResponse, SearchResult};
