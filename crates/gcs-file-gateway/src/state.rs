//! Application state

use crate::config::GatewayConfig;
use crate::upload::UploadPolicy;
use gcs_file_store::{GcsConfig, GcsObjectStore, MemoryObjectStore, ObjectStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Application state shared across handlers
pub struct AppState {
    /// Gateway configuration
    pub config: GatewayConfig,
    /// Upload limits derived from the configuration
    pub upload_policy: UploadPolicy,
    /// Object store (GCS or memory fallback)
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Create a new application state, building the store from configuration
    pub fn new(config: GatewayConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn ObjectStore> = if config.use_memory_store {
            info!("Using in-memory object store (data will not persist)");
            Arc::new(MemoryObjectStore::new(config.bucket_name.clone()))
        } else {
            let store = Self::create_gcs_store(&config)?;
            info!("Initialized storage client for bucket: {}", config.bucket_name);
            if config.gcs_access_token.is_some() {
                info!("Using static access token for storage requests");
            }
            Arc::new(store)
        };

        if store.is_persistent() {
            info!("✓ Storage mode: GCS (persistent)");
        } else {
            warn!("⚠ Storage mode: In-memory (NOT persistent - for development only)");
        }

        Ok(Self::with_store(config, store))
    }

    /// Create state around an existing store
    pub fn with_store(config: GatewayConfig, store: Arc<dyn ObjectStore>) -> Self {
        let upload_policy = UploadPolicy::from_config(&config);
        Self {
            config,
            upload_policy,
            store,
        }
    }

    fn create_gcs_store(config: &GatewayConfig) -> anyhow::Result<GcsObjectStore> {
        let mut gcs_config = GcsConfig::new(&config.bucket_name)
            .with_timeout(Duration::from_secs(config.gcs_timeout_secs));

        if let Some(token) = &config.gcs_access_token {
            gcs_config = gcs_config.with_access_token(token);
        }

        Ok(GcsObjectStore::new(gcs_config)?)
    }
}
