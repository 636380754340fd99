//! # HTTP API Errors
//!
//! Maps store errors to status codes and the `{error, message}` wire shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// An error surfaced to the HTTP client.
#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct ApiError(#[from] StoreError);

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            // 400 Bad Request
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::InvalidArgument(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// The error category reported in the response body.
    pub fn category(&self) -> &'static str {
        match self.0 {
            StoreError::Validation(_) => "ValidationError",
            StoreError::InvalidArgument(_) => "InvalidArgument",
            StoreError::NotFound(_) => "NotFound",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.category().to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(StoreError::missing_fields(&["title"])).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::InvalidArgument("bad".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::NotFound(1)).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_error_body_shape() {
        let err = ApiError::from(StoreError::NotFound(7));
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(body["error"], "NotFound");
        assert!(body["message"].as_str().unwrap().contains("7"));
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
