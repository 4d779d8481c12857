use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("{0} environment variable is not set.")]
    MissingCredential(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to access Gemini API: {0}")]
    GeminiError(String),

    #[error("Failed to parse model output: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(error: serde_json::Error) -> Self {
        SummarizerError::ParseError(error.to_string())
    }
}

impl From<anyhow::Error> for SummarizerError {
    fn from(error: anyhow::Error) -> Self {
        SummarizerError::GeminiError(error.to_string())
    }
}

/// Failures surfaced at the HTTP boundary of `POST /summarize`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON format received from client.")]
    InvalidJson,

    #[error("No email text provided.")]
    NoText,

    #[error("Request body is too large.")]
    BodyTooLarge,

    #[error("Internal AI processing failed.")]
    Processing(#[source] SummarizerError),
}

impl From<SummarizerError> for ApiError {
    fn from(error: SummarizerError) -> Self {
        ApiError::Processing(error)
    }
}
