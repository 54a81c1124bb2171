//! Error types and their HTTP mapping

use crate::upload::ValidationError;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gcs_file_store::StoreError;
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request rejected before touching storage
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage call failed while performing `action`
    #[error("Failed to {action}: {source}")]
    Store {
        action: &'static str,
        #[source]
        source: StoreError,
    },

    /// Malformed multipart body
    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Wrap a storage failure with the action that was attempted
    pub fn store(action: &'static str, source: StoreError) -> Self {
        Self::Store { action, source }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store { source, .. } if source.is_not_found() => StatusCode::NOT_FOUND,
            Self::Store { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Multipart(e) => e.status(),
        }
    }

    /// Human-readable detail returned to the caller
    pub fn detail(&self) -> String {
        match self {
            // The not-found message already names the file
            Self::Store { source, .. } if source.is_not_found() => source.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.detail();

        if status.is_server_error() {
            tracing::error!(status = %status.as_u16(), detail = %detail, "Request failed");
        } else {
            tracing::debug!(status = %status.as_u16(), detail = %detail, "Request rejected");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(ValidationError::TooLarge { size: 11, max: 10 });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.detail(),
            "File size (11 bytes) exceeds maximum allowed size (10 bytes)"
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::store("download file", StoreError::not_found("a.txt"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "File 'a.txt' not found in bucket");
    }

    #[test]
    fn test_backend_failure_maps_to_500_with_message() {
        let err = ApiError::store(
            "upload file",
            StoreError::Backend("connection refused".to_string()),
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.detail(),
            "Failed to upload file: storage backend error: connection refused"
        );
    }

    #[test]
    fn test_response_body_is_json_detail() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
