use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handler;
use super::state::AppState;

/// Largest request body accepted by `/summarize`.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

async fn health() -> &'static str {
    "OK"
}

/// Build the application router. CORS is open to any origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/summarize", post(handler::summarize_emails))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
