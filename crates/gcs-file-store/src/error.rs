//! Error types for the gcs-file-store crate

use thiserror::Error;

/// Result type alias using `StoreError`
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during object storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Object does not exist in the bucket
    #[error("File '{name}' not found in bucket")]
    NotFound { name: String },

    /// Backend request failed (auth, transport, quota, ...)
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Create a not-found error for an object name
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Classify an `object_store` failure for the named object
    pub fn from_backend(name: &str, err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { .. } => Self::not_found(name),
            other => Self::Backend(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_file() {
        let err = StoreError::not_found("report.pdf");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "File 'report.pdf' not found in bucket");
    }

    #[test]
    fn test_backend_not_found_uses_requested_name() {
        let err = StoreError::from_backend(
            "report.pdf",
            object_store::Error::NotFound {
                path: "report.pdf".to_string(),
                source: "No such object".into(),
            },
        );
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "File 'report.pdf' not found in bucket");
    }

    #[test]
    fn test_other_backend_errors_pass_message_through() {
        let err = StoreError::from_backend(
            "report.pdf",
            object_store::Error::Generic {
                store: "GCS",
                source: "401 Unauthorized".into(),
            },
        );
        assert!(!err.is_not_found());
        assert!(matches!(err, StoreError::Backend(_)));
        assert!(err.to_string().contains("401 Unauthorized"));
    }
}
