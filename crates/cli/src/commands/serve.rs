//! Serve command handler.

use clap::Args;
use scout_core::{AppConfig, AppResult};
use std::sync::Arc;

use super::build_pipeline;

/// Serve the research API over HTTP
#[derive(Args, Debug)]
pub struct ServeCommand {
    /// Address to bind, e.g. 127.0.0.1:8080 (overrides config)
    #[arg(short, long, env = "SCOUT_BIND")]
    pub bind: Option<String>,
}

impl ServeCommand {
    /// Execute the serve command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let mut config = config.clone();
        if let Some(ref bind) = self.bind {
            config.bind = bind.clone();
        }

        let pipeline = build_pipeline(&config)?;

        tracing::info!(
            "Serving research API with provider {} ({})",
            config.provider,
            config.model
        );

        scout_server::serve(&config, Arc::new(pipeline)).await
    }
}
