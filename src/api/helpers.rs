//! Response builders shared by the HTTP handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::core::models::ErrorBody;
use crate::errors::ApiError;

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status: StatusCode, message: &str) -> Response {
    let body = ErrorBody {
        error: message.to_string(),
        details: None,
    };
    (status, Json(body)).into_response()
}

/// Returns an error response that also carries a `details` string.
#[must_use]
pub fn err_response_with_details(status: StatusCode, message: &str, details: &str) -> Response {
    let body = ErrorBody {
        error: message.to_string(),
        details: Some(details.to_string()),
    };
    (status, Json(body)).into_response()
}

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::NoText => StatusCode::BAD_REQUEST,
            ApiError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::InvalidJson | ApiError::NoText | ApiError::BodyTooLarge => {
                err_response(status, &self.to_string())
            }
            ApiError::Processing(source) => {
                err_response_with_details(status, &self.to_string(), &source.to_string())
            }
        }
    }
}
