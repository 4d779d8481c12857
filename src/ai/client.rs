//! LLM (Gemini) API client module
//!
//! Encapsulates the single remote call that turns raw email text into
//! structured summaries.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::{error, info};

use super::schema::{OUTPUT_SCHEMA, RESPONSE_MIME_TYPE};
use crate::core::config::{API_KEY_VAR, GeminiSettings};
use crate::errors::SummarizerError;
use crate::prompt::build_prompt;
use crate::utils::json::{v_array, v_str};

/// Something that can turn a block of emails into the raw JSON text of a
/// summary array.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the remote service cannot be reached or does not
    /// produce an answer.
    async fn summarize(&self, email_text: &str) -> Result<String, SummarizerError>;
}

/// Long-lived Gemini handle, built once at startup and shared by all requests.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model_name: String,
    api_base: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`SummarizerError::MissingCredential`] for an empty API key and
    /// [`SummarizerError::HttpError`] if the HTTP client cannot be built.
    pub fn new(settings: &GeminiSettings) -> Result<Self, SummarizerError> {
        if settings.api_key.is_empty() {
            return Err(SummarizerError::MissingCredential(API_KEY_VAR.to_string()));
        }

        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| {
                SummarizerError::HttpError(format!("Failed to build Gemini HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_key: settings.api_key.clone(),
            model_name: settings.model.clone(),
            api_base: settings.api_base.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base, self.model_name
        )
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(&self, email_text: &str) -> Result<String, SummarizerError> {
        let prompt = build_prompt(email_text);

        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            prompt_chars = prompt.chars().count(),
            "Requesting structured summaries from Gemini"
        );

        let request_body = build_request_body(&prompt);

        let mut headers = HeaderMap::new();
        let mut key_value = HeaderValue::from_str(&self.api_key).map_err(|e| {
            SummarizerError::HttpError(format!("Invalid x-goog-api-key header: {e}"))
        })?;
        key_value.set_sensitive(true);
        headers.insert("x-goog-api-key", key_value);

        let response = self
            .http
            .post(self.endpoint())
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SummarizerError::HttpError(format!("Gemini API request timed out: {e}"))
                } else {
                    SummarizerError::HttpError(format!("Gemini API request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            let message = remote_error_message(&error_text);
            error!(%status, "Gemini API returned an error: {}", message);
            return Err(SummarizerError::GeminiError(format!(
                "status {status}: {message}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizerError::GeminiError(format!("Failed to parse Gemini response: {e}"))
        })?;

        extract_candidate_text(&response_json)
    }
}

/// `generateContent` body asking for JSON that conforms to [`OUTPUT_SCHEMA`].
#[must_use]
pub fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": prompt }]
            }
        ],
        "generationConfig": {
            "responseMimeType": RESPONSE_MIME_TYPE,
            "responseSchema": &*OUTPUT_SCHEMA
        }
    })
}

/// Concatenate the text parts of the first candidate.
///
/// # Errors
///
/// Returns [`SummarizerError::GeminiError`] when the prompt was blocked or the
/// first candidate carries no text.
pub fn extract_candidate_text(response: &Value) -> Result<String, SummarizerError> {
    let Some(candidate) = v_array(response, &["candidates"]).and_then(|c| c.first()) else {
        return Err(match v_str(response, &["promptFeedback", "blockReason"]) {
            Some(reason) => {
                SummarizerError::GeminiError(format!("Prompt was blocked: {reason}"))
            }
            None => SummarizerError::GeminiError("Response contained no candidates".to_string()),
        });
    };

    let text: String = v_array(candidate, &["content", "parts"])
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        let finish = v_str(candidate, &["finishReason"]).unwrap_or("unknown");
        return Err(SummarizerError::GeminiError(format!(
            "Response contained no text (finish reason: {finish})"
        )));
    }

    Ok(text)
}

/// Prefer the `error.message` field of a Google API error body.
fn remote_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v_str(&v, &["error", "message"]).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
