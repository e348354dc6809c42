//! Shared server state.

use scout_research::Pipeline;
use std::sync::Arc;

/// State handed to every request handler.
///
/// The pipeline is the only shared resource; it holds the HTTP and LLM
/// clients, which are safe for concurrent independent use. No request
/// state outlives its request.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}
