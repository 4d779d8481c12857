use std::sync::Arc;

use anyhow::Context;
use email_summarizer::ai::GeminiClient;
use email_summarizer::api::{AppState, build_router};
use email_summarizer::core::config::AppConfig;
use tracing::{error, info};

const FATAL_SETUP_MESSAGE: &str =
    "FATAL ERROR: Gemini client setup failed. Please check GEMINI_API_KEY.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    email_summarizer::setup_logging();

    // No socket is bound until the client handle exists.
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        error!(error = %e, "{}", FATAL_SETUP_MESSAGE);
        std::process::exit(1);
    });

    let client = GeminiClient::new(&config.gemini).unwrap_or_else(|e| {
        error!(error = %e, "{}", FATAL_SETUP_MESSAGE);
        std::process::exit(1);
    });
    info!(model = client.model_name(), "Gemini client initialized");

    let app = build_router(AppState::new(Arc::new(client)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind on {}", config.bind_addr))?;

    info!("Starting email summarizer API on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
