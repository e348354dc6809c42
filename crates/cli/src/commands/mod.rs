//! Command handlers.

mod ask;
mod serve;

pub use ask::AskCommand;
pub use serve::ServeCommand;

use scout_core::{AppConfig, AppError, AppResult};
use scout_llm::create_client;
use scout_research::{FixedThrottle, Pipeline};
use std::sync::Arc;

/// Wire a live pipeline from configuration.
///
/// Shared by `serve` and `ask`: validates the provider settings,
/// resolves credentials, and applies the configured politeness delays.
pub(crate) fn build_pipeline(config: &AppConfig) -> AppResult<Pipeline> {
    config.validate()?;

    let api_key = config.resolve_api_key(&config.provider);
    let client = create_client(
        &config.provider,
        config.endpoint.as_deref(),
        api_key.as_deref(),
    )
    .map_err(AppError::Config)?;

    let throttle = Arc::new(FixedThrottle::from_millis(
        config.source_delay_ms,
        config.query_delay_ms,
    ));

    Ok(Pipeline::new(client, config.model.as_str(), throttle))
}
