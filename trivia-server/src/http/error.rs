//! API error types with IntoResponse
//!
//! Every error renders as `{"success": false, "error": <code>, "message": ...}`.
//! The detail carried by a variant is logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;
use crate::service::ServiceError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Invalid category or query parameter (400)
    BadRequest(String),

    /// Empty page, unknown id or unknown route (404)
    NotFound(String),

    /// Route exists but not for this verb (405)
    MethodNotAllowed,

    /// Malformed body or failed write (422)
    Unprocessable(String),

    /// Store failure on a read path (500, logged)
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for the status code
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad request",
            Self::NotFound(_) => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable(_) => "unprocessable",
            Self::Internal(_) => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(detail) => tracing::error!("Internal error: {}", detail),
            Self::Unprocessable(detail) => tracing::warn!("Unprocessable: {}", detail),
            Self::BadRequest(detail) | Self::NotFound(detail) => {
                tracing::debug!(status = status.as_u16(), "{}", detail)
            }
            Self::MethodNotAllowed => {}
        }

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::BadRequest(msg) => Self::BadRequest(msg),
            ServiceError::Unprocessable(msg) => Self::Unprocessable(msg),
            ServiceError::Store(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Unprocessable(e.to_string())
    }
}
