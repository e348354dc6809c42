//! Route definitions and handlers.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Inbound research request body.
#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub query: String,
}

/// Build the service router.
///
/// Factored out of [`crate::serve`] so tests can drive the router
/// directly with `tower::ServiceExt::oneshot`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/research", post(research_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Run a question through the pipeline.
///
/// A body the service cannot read is the one request-level failure:
/// it maps to HTTP 500 with an `error` payload. Everything past the
/// extractor degrades inside the pipeline and still returns 200.
async fn research_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResearchRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(request)) => {
            let response = state.pipeline.run(&request.query).await;
            Json(response).into_response()
        }
        Err(rejection) => {
            tracing::error!("Unreadable research request: {}", rejection.body_text());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response()
        }
    }
}
