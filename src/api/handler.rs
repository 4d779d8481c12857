//! `POST /summarize` handler.
//!
//! This module handles:
//! - Body validation (JSON object with a non-empty `text` string)
//! - Delegation to the configured [`Summarizer`](crate::ai::Summarizer)
//! - Structural validation of the model output

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use serde_json::Value;
use tracing::{error, info, warn};

use super::state::AppState;
use crate::ai::parse_summary_items;
use crate::core::models::{SummarizationRequest, SummarizationResponse};
use crate::errors::ApiError;

/// Summarize a block of raw email text.
///
/// The body is parsed as JSON whatever its `Content-Type`. At most one remote
/// call is made per request.
///
/// # Errors
///
/// Returns [`ApiError::InvalidJson`] or [`ApiError::NoText`] for bad input
/// (400), [`ApiError::BodyTooLarge`] past the router's body limit (413) and
/// [`ApiError::Processing`] when the model call or its output fails (500).
#[tracing::instrument(
    level = "info",
    skip(state, body),
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn summarize_emails(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SummarizationResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        warn!("Rejecting unreadable request body: {}", rejection);
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::BodyTooLarge
        } else {
            ApiError::InvalidJson
        }
    })?;
    let SummarizationRequest { text: email_text } = extract_request(&body)?;

    info!(
        text_chars = email_text.chars().count(),
        "Summarization request validated"
    );

    let raw = state.summarizer.summarize(&email_text).await.map_err(|e| {
        error!("Processing Error: {}", e);
        ApiError::from(e)
    })?;

    let items = parse_summary_items(&raw).map_err(|e| {
        error!("Processing Error: {}", e);
        ApiError::from(e)
    })?;

    info!(items = items.len(), "Summaries generated");
    Ok(Json(items))
}

/// Pull the `text` field out of a request body.
///
/// # Errors
///
/// [`ApiError::InvalidJson`] when the body is not a JSON object and
/// [`ApiError::NoText`] when `text` is absent, not a string, or empty.
pub fn extract_request(body: &[u8]) -> Result<SummarizationRequest, ApiError> {
    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        warn!("Rejecting request with malformed JSON: {}", e);
        ApiError::InvalidJson
    })?;

    let Some(fields) = payload.as_object() else {
        warn!("Rejecting request whose JSON body is not an object");
        return Err(ApiError::InvalidJson);
    };

    match fields.get("text").and_then(Value::as_str) {
        Some(text) if !text.is_empty() => Ok(SummarizationRequest {
            text: text.to_string(),
        }),
        _ => {
            warn!("Rejecting request without email text");
            Err(ApiError::NoText)
        }
    }
}
