//! Gateway configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default maximum upload size (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Gateway server configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Bucket all files are stored in
    pub bucket_name: String,
    /// Maximum accepted file size (bytes)
    pub max_file_size: u64,
    /// Comma-separated extension allow-list; `None` allows every type
    pub allowed_file_types: Option<String>,
    /// Static OAuth2 access token; credentials are discovered when unset
    pub gcs_access_token: Option<String>,
    /// Storage backend request timeout (seconds)
    pub gcs_timeout_secs: u64,
    /// Use in-memory storage (for testing/development)
    pub use_memory_store: bool,
    /// Enable CORS
    pub cors_enabled: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            bucket_name: String::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_file_types: None,
            gcs_access_token: None,
            gcs_timeout_secs: 30,
            use_memory_store: false,
            cors_enabled: true,
        }
    }
}

impl GatewayConfig {
    /// Create a config for a bucket with every other field defaulted
    pub fn for_bucket(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            ..Default::default()
        }
    }

    /// Get the bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse the extension allow-list into a lowercased, trimmed set
    pub fn allowed_extensions(&self) -> Option<BTreeSet<String>> {
        let raw = self.allowed_file_types.as_deref()?;
        if raw.is_empty() {
            return None;
        }
        Some(raw.split(',').map(|ext| ext.trim().to_lowercase()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::for_bucket("files");
        assert_eq!(config.bucket_name, "files");
        assert_eq!(config.max_file_size, 10_485_760);
        assert_eq!(config.port, 8080);
        assert!(config.allowed_extensions().is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_allowed_extensions_normalized() {
        let config = GatewayConfig {
            allowed_file_types: Some(" TXT, pdf ,Png".to_string()),
            ..GatewayConfig::for_bucket("files")
        };

        let allowed = config.allowed_extensions().unwrap();
        let expected: BTreeSet<String> = ["txt", "pdf", "png"].iter().map(|s| s.to_string()).collect();
        assert_eq!(allowed, expected);
    }

    #[test]
    fn test_empty_allow_list_means_unrestricted() {
        let config = GatewayConfig {
            allowed_file_types: Some(String::new()),
            ..GatewayConfig::for_bucket("files")
        };
        assert!(config.allowed_extensions().is_none());
    }
}
