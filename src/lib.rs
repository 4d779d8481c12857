/// Email Summarizer - an HTTP service that turns raw email text into
/// structured summaries using Gemini.
///
/// The crate exposes a single `POST /summarize` endpoint:
/// 1. The request handler validates a `{ "text": ... }` body
/// 2. The Gemini client sends a fixed prompt plus a strict JSON output schema
/// 3. The model answer is parsed into `[{ sender, subject, summary[] }]`
///
/// # Architecture
///
/// The system uses:
/// - axum and tower-http for the HTTP surface (CORS open to any origin)
/// - reqwest for the Gemini `generateContent` call
/// - A `Summarizer` trait so the Gemini client can be swapped for a stub
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use email_summarizer::ai::GeminiClient;
/// use email_summarizer::api::{AppState, build_router};
/// use email_summarizer::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     email_summarizer::setup_logging();
///
///     // Fails fast when GEMINI_API_KEY is missing
///     let config = AppConfig::from_env()?;
///     let client = GeminiClient::new(&config.gemini)?;
///
///     let app = build_router(AppState::new(Arc::new(client)));
///     let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
///     axum::serve(listener, app).await?;
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod utils;

pub use errors::{ApiError, SummarizerError};

/// Configure structured logging with JSON format.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Call this once at
/// process start.
///
/// # Example
///
/// ```
/// email_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
