//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::error::DashboardError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// No session and no guest fallback
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Dashboard/identity layer error
    #[error(transparent)]
    Identity(#[from] DashboardError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::Identity(DashboardError::SignedOut) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            ApiError::Identity(DashboardError::NotImplemented(_)) => {
                (StatusCode::NOT_IMPLEMENTED, "NOT_IMPLEMENTED")
            }
            ApiError::Identity(DashboardError::InvalidProfile(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_PROFILE")
            }
            ApiError::Identity(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IDENTITY_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::Unauthorized("no session".into()), StatusCode::UNAUTHORIZED),
            (ApiError::Identity(DashboardError::SignedOut), StatusCode::UNAUTHORIZED),
            (
                ApiError::Identity(DashboardError::NotImplemented("Password change")),
                StatusCode::NOT_IMPLEMENTED,
            ),
            (ApiError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
