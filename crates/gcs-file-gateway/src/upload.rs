//! Upload validation

use crate::config::GatewayConfig;
use std::collections::BTreeSet;
use thiserror::Error;

/// Client-side upload problems, rejected before any storage call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File size ({size} bytes) exceeds maximum allowed size ({max} bytes)")]
    TooLarge { size: u64, max: u64 },

    #[error("File type '{extension}' not allowed. Allowed types: {}", .allowed.join(", "))]
    TypeNotAllowed {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Missing multipart field 'file'")]
    MissingFile,

    #[error("Uploaded file has no filename")]
    MissingFilename,
}

/// Size and type limits applied to every upload
#[derive(Clone, Debug)]
pub struct UploadPolicy {
    pub max_file_size: u64,
    /// `None` allows every extension
    pub allowed_extensions: Option<BTreeSet<String>>,
}

impl UploadPolicy {
    /// Derive the policy from gateway configuration
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            max_file_size: config.max_file_size,
            allowed_extensions: config.allowed_extensions(),
        }
    }

    /// Reject files above the size limit
    pub fn check_size(&self, size: u64) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::TooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Reject files whose extension is not on the allow-list
    pub fn check_type(&self, filename: &str) -> Result<(), ValidationError> {
        let Some(allowed) = &self.allowed_extensions else {
            return Ok(());
        };

        let extension = file_extension(filename);
        if !allowed.contains(&extension) {
            return Err(ValidationError::TypeNotAllowed {
                extension,
                allowed: allowed.iter().cloned().collect(),
            });
        }
        Ok(())
    }
}

/// Text after the last `.`, lowercased; empty when there is no `.`
pub fn file_extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn policy(max: u64, allowed: Option<&[&str]>) -> UploadPolicy {
        UploadPolicy {
            max_file_size: max,
            allowed_extensions: allowed.map(|exts| exts.iter().map(|e| e.to_string()).collect()),
        }
    }

    #[rstest]
    #[case("a.txt", "txt")]
    #[case("REPORT.PDF", "pdf")]
    #[case("archive.tar.gz", "gz")]
    #[case("Makefile", "")]
    #[case(".bashrc", "bashrc")]
    #[case("trailing.", "")]
    fn test_file_extension(#[case] filename: &str, #[case] expected: &str) {
        assert_eq!(file_extension(filename), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(999)]
    #[case(1000)]
    fn test_size_within_limit(#[case] size: u64) {
        assert!(policy(1000, None).check_size(size).is_ok());
    }

    #[test]
    fn test_size_over_limit() {
        let err = policy(1000, None).check_size(1001).unwrap_err();
        assert_eq!(err, ValidationError::TooLarge { size: 1001, max: 1000 });
        assert_eq!(
            err.to_string(),
            "File size (1001 bytes) exceeds maximum allowed size (1000 bytes)"
        );
    }

    #[test]
    fn test_unrestricted_accepts_any_type() {
        let policy = policy(1000, None);
        assert!(policy.check_type("b.exe").is_ok());
        assert!(policy.check_type("no_extension").is_ok());
    }

    #[test]
    fn test_disallowed_type_names_extension_and_allow_list() {
        let err = policy(1000, Some(&["txt", "csv"])).check_type("b.exe").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'exe'"));
        assert!(message.contains("Allowed types: csv, txt"));
    }

    #[test]
    fn test_type_match_is_case_insensitive_on_filename() {
        let policy = policy(1000, Some(&["txt"]));
        assert!(policy.check_type("NOTES.TXT").is_ok());
        assert!(policy.check_type("notes").is_err());
    }

    #[test]
    fn test_from_config() {
        let config = GatewayConfig {
            max_file_size: 42,
            allowed_file_types: Some("JPG,png".to_string()),
            ..GatewayConfig::for_bucket("files")
        };
        let policy = UploadPolicy::from_config(&config);
        assert_eq!(policy.max_file_size, 42);
        assert!(policy.check_type("cat.jpg").is_ok());
        assert!(policy.check_type("cat.gif").is_err());
    }
}
