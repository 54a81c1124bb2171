//! Google Cloud Storage backend built on `object_store`
//!
//! Credentials are discovered the way Google client libraries do it:
//! `GOOGLE_SERVICE_ACCOUNT` / `GOOGLE_SERVICE_ACCOUNT_PATH` /
//! `GOOGLE_SERVICE_ACCOUNT_KEY`, `GOOGLE_APPLICATION_CREDENTIALS`, the gcloud
//! application-default file, and finally the GCE metadata server. Tokens are
//! refreshed by the credential provider.

use crate::object::DEFAULT_CONTENT_TYPE;
use crate::{DeletedObject, ObjectInfo, ObjectStore, Result, StoreError, StoredObject};
use async_trait::async_trait;
use bytes::Bytes;
use object_store::gcp::{GcpCredential, GoogleCloudStorageBuilder};
use object_store::path::Path;
use object_store::{
    Attribute, AttributeValue, Attributes, ClientOptions, GetOptions, ObjectStore as RemoteStore,
    PutOptions, PutPayload, StaticCredentialProvider,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Configuration for the GCS connection
#[derive(Clone, Debug)]
pub struct GcsConfig {
    /// Bucket all objects live in
    pub bucket: String,
    /// Static OAuth2 access token; overrides credential discovery when set
    pub access_token: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl GcsConfig {
    /// Create a config for a bucket, discovering credentials from the environment
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            access_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Authenticate with a fixed bearer token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Object store for one GCS bucket
#[derive(Clone)]
pub struct GcsObjectStore {
    bucket: String,
    backend: Arc<dyn RemoteStore>,
}

impl GcsObjectStore {
    /// Create a new GCS object store
    pub fn new(config: GcsConfig) -> Result<Self> {
        if config.bucket.trim().is_empty() {
            return Err(StoreError::Configuration("bucket name is empty".to_string()));
        }

        let mut builder = GoogleCloudStorageBuilder::from_env()
            .with_bucket_name(&config.bucket)
            .with_client_options(ClientOptions::new().with_timeout(config.timeout));

        if let Some(token) = &config.access_token {
            let credential = GcpCredential {
                bearer: token.clone(),
            };
            builder = builder.with_credentials(Arc::new(StaticCredentialProvider::new(credential)));
        }

        let backend = builder
            .build()
            .map_err(|e| StoreError::Configuration(e.to_string()))?;

        Ok(Self::with_backend(config.bucket, Arc::new(backend)))
    }

    /// Wrap an already-built `object_store` backend
    pub fn with_backend(bucket: impl Into<String>, backend: Arc<dyn RemoteStore>) -> Self {
        Self {
            bucket: bucket.into(),
            backend,
        }
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    #[instrument(skip(self, data), fields(bucket = %self.bucket, size = data.len()))]
    async fn put(&self, name: &str, data: Bytes, content_type: Option<&str>) -> Result<StoredObject> {
        let size = data.len() as u64;

        let mut attributes = Attributes::new();
        attributes.insert(
            Attribute::ContentType,
            AttributeValue::from(content_type.unwrap_or(DEFAULT_CONTENT_TYPE).to_string()),
        );
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        if let Err(e) = self
            .backend
            .put_opts(&Path::from(name), PutPayload::from(data), options)
            .await
        {
            tracing::error!(error = %e, name = %name, "Failed to upload file");
            return Err(StoreError::from_backend(name, e));
        }

        tracing::info!(name = %name, "Successfully uploaded file");
        Ok(StoredObject {
            name: name.to_string(),
            bucket: self.bucket.clone(),
            size,
            content_type: content_type.map(str::to_string),
        })
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn get(&self, name: &str) -> Result<Bytes> {
        let result = self
            .backend
            .get(&Path::from(name))
            .await
            .map_err(|e| StoreError::from_backend(name, e))?;
        let data = result
            .bytes()
            .await
            .map_err(|e| StoreError::from_backend(name, e))?;

        tracing::info!(name = %name, size = data.len(), "Successfully downloaded file");
        Ok(data)
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn stat(&self, name: &str) -> Result<ObjectInfo> {
        let options = GetOptions {
            head: true,
            ..Default::default()
        };
        let result = self
            .backend
            .get_opts(&Path::from(name), options)
            .await
            .map_err(|e| StoreError::from_backend(name, e))?;

        Ok(ObjectInfo {
            name: name.to_string(),
            size: result.meta.size as u64,
            content_type: result
                .attributes
                .get(&Attribute::ContentType)
                .map(|value| value.to_string()),
            created: None,
            updated: Some(result.meta.last_modified),
        })
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn delete(&self, name: &str) -> Result<DeletedObject> {
        self.backend
            .delete(&Path::from(name))
            .await
            .map_err(|e| StoreError::from_backend(name, e))?;

        tracing::info!(name = %name, "Successfully deleted file");
        Ok(DeletedObject {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    fn in_memory() -> GcsObjectStore {
        GcsObjectStore::with_backend("test-bucket", Arc::new(InMemory::new()))
    }

    #[test]
    fn test_config_default() {
        let config = GcsConfig::new("files");
        assert_eq!(config.bucket, "files");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_empty_bucket_rejected() {
        let result = GcsObjectStore::new(GcsConfig::new("  "));
        assert!(matches!(result, Err(StoreError::Configuration(_))));
    }

    #[test]
    fn test_static_token_store_builds_without_network() {
        let config = GcsConfig::new("files")
            .with_access_token("ya29.token")
            .with_timeout(Duration::from_secs(5));
        let store = GcsObjectStore::new(config).unwrap();
        assert_eq!(store.bucket(), "files");
        assert!(store.is_persistent());
    }

    #[tokio::test]
    async fn test_put_then_get_and_stat() {
        let store = in_memory();

        let stored = store
            .put("a.txt", Bytes::from_static(b"hello"), Some("text/plain"))
            .await
            .unwrap();
        assert_eq!(stored.name, "a.txt");
        assert_eq!(stored.bucket, "test-bucket");
        assert_eq!(stored.size, 5);
        assert_eq!(stored.content_type.as_deref(), Some("text/plain"));

        let data = store.get("a.txt").await.unwrap();
        assert_eq!(data.as_ref(), b"hello");

        let info = store.stat("a.txt").await.unwrap();
        assert_eq!(info.size, 5);
        assert_eq!(info.content_type.as_deref(), Some("text/plain"));
        assert!(info.updated.is_some());
    }

    #[tokio::test]
    async fn test_untyped_upload_stored_as_octet_stream() {
        let store = in_memory();

        let stored = store.put("blob", Bytes::from_static(b"x"), None).await.unwrap();
        assert_eq!(stored.content_type, None);

        let info = store.stat("blob").await.unwrap();
        assert_eq!(info.content_type_or_default(), DEFAULT_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn test_missing_object_is_not_found() {
        let store = in_memory();

        let err = store.get("nope.txt").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "File 'nope.txt' not found in bucket");

        assert!(store.stat("nope.txt").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_content() {
        let store = in_memory();
        store.put("doc.md", Bytes::from_static(b"v1"), None).await.unwrap();
        store.put("doc.md", Bytes::from_static(b"version 2"), None).await.unwrap();

        assert_eq!(store.get("doc.md").await.unwrap().as_ref(), b"version 2");
        assert_eq!(store.stat("doc.md").await.unwrap().size, 9);
    }

    #[tokio::test]
    async fn test_delete_removes_object() {
        let store = in_memory();
        store.put("a.txt", Bytes::from_static(b"hello"), None).await.unwrap();

        let deleted = store.delete("a.txt").await.unwrap();
        assert_eq!(deleted.name, "a.txt");
        assert!(store.get("a.txt").await.unwrap_err().is_not_found());
    }
}
