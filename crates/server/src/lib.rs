//! HTTP surface for the Scout research service.
//!
//! Exposes the research pipeline behind a small axum router:
//! `POST /v1/research` runs a question through the pipeline,
//! `GET /health` reports liveness. Everything below the router
//! degrades gracefully; the only transport-level failure is a request
//! body the service cannot read.

pub mod routes;
pub mod state;

pub use routes::create_app;
pub use state::AppState;

use scout_core::{AppConfig, AppError, AppResult};
use scout_research::Pipeline;
use std::net::SocketAddr;
use std::sync::Arc;

/// Bind and serve the research API until shutdown.
pub async fn serve(config: &AppConfig, pipeline: Arc<Pipeline>) -> AppResult<()> {
    let state = AppState { pipeline };
    let app = create_app(state);

    let addr: SocketAddr = config
        .bind
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid bind address {:?}: {}", config.bind, e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Research API listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}
