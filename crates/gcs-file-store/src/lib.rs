//! # GCS File Store
//!
//! Object storage layer for the GCS file gateway.
//!
//! This crate provides:
//! - **Object operations**: Put, get, stat, and delete named objects in one bucket
//! - **GCS backend**: Google Cloud Storage via `object_store`, with credential discovery
//! - **Memory backend**: In-process store for development and tests
//! - **Error taxonomy**: Backend failures reduced to "not found" or a backend error
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Request Handlers             │
//! ├─────────────────────────────────────────┤
//! │            ObjectStore Trait            │
//! ├────────────────────┬────────────────────┤
//! │   GcsObjectStore   │ MemoryObjectStore  │
//! ├────────────────────┼────────────────────┤
//! │ object_store (GCS) │      DashMap       │
//! └────────────────────┴────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use gcs_file_store::{GcsConfig, GcsObjectStore, ObjectStore};
//!
//! let store = GcsObjectStore::new(GcsConfig::new("my-bucket"))?;
//! store.put("a.txt", data, Some("text/plain")).await?;
//! let bytes = store.get("a.txt").await?;
//! ```

pub mod error;
pub mod gcs;
pub mod memory;
pub mod object;

pub use error::{Result, StoreError};
pub use gcs::{GcsConfig, GcsObjectStore};
pub use memory::MemoryObjectStore;
pub use object::{DeletedObject, ObjectInfo, StoredObject, DEFAULT_CONTENT_TYPE};

use async_trait::async_trait;
use bytes::Bytes;

/// Trait for single-bucket object storage backends
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Name of the bucket this store writes to
    fn bucket(&self) -> &str;

    /// Whether objects survive a process restart
    fn is_persistent(&self) -> bool {
        true
    }

    /// Write an object, replacing any existing object of the same name
    async fn put(&self, name: &str, data: Bytes, content_type: Option<&str>) -> Result<StoredObject>;

    /// Read the full content of an object
    async fn get(&self, name: &str) -> Result<Bytes>;

    /// Read the current metadata of an object
    async fn stat(&self, name: &str) -> Result<ObjectInfo>;

    /// Remove an object
    async fn delete(&self, name: &str) -> Result<DeletedObject>;
}
