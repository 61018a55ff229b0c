//! Response types and error handling for API endpoints
//!
//! Error bodies are `{"error": <message>}`, plus `"errMsg"` carrying the
//! underlying cause when the service reports one.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rfap_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// Message returned for any body that cannot be read as the expected JSON
pub const INVALID_JSON_MESSAGE: &str = "can't read request body. Invalid JSON.";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("can't read request body. Invalid JSON.")]
    InvalidBody(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error code used in logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }

    /// Create an invalid body error carrying the rejection reason
    pub fn invalid_body(reason: impl Into<String>) -> Self {
        Self::InvalidBody(reason.into())
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::Service(e) => e.detail().map(str::to_string),
            _ => None,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(rename = "errMsg", skip_serializing_if = "Option::is_none")]
    pub err_msg: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(code = self.error_code(), error = ?self, "Server error occurred");
        } else if let Self::InvalidBody(reason) = &self {
            debug!(reason = %reason, "Rejected request body");
        }

        let body = ErrorBody {
            error: self.to_string(),
            err_msg: self.detail(),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
