//! In-memory object store for development and testing

use crate::object::DEFAULT_CONTENT_TYPE;
use crate::{DeletedObject, ObjectInfo, ObjectStore, Result, StoreError, StoredObject};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

#[derive(Clone, Debug)]
struct MemoryObject {
    data: Bytes,
    content_type: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

/// An in-memory single-bucket store
#[derive(Clone)]
pub struct MemoryObjectStore {
    bucket: String,
    objects: Arc<DashMap<String, MemoryObject>>,
}

impl MemoryObjectStore {
    /// Create a new empty store for the given bucket name
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::new(DashMap::new()),
        }
    }

    /// Get the number of objects stored
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Check whether an object exists
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn is_persistent(&self) -> bool {
        false
    }

    async fn put(&self, name: &str, data: Bytes, content_type: Option<&str>) -> Result<StoredObject> {
        let now = Utc::now();
        let size = data.len() as u64;
        let stored_type = content_type.unwrap_or(DEFAULT_CONTENT_TYPE).to_string();

        // Overwrites keep the first creation time
        self.objects
            .entry(name.to_string())
            .and_modify(|existing| {
                existing.data = data.clone();
                existing.content_type = stored_type.clone();
                existing.updated = now;
            })
            .or_insert_with(|| MemoryObject {
                data,
                content_type: stored_type,
                created: now,
                updated: now,
            });

        Ok(StoredObject {
            name: name.to_string(),
            bucket: self.bucket.clone(),
            size,
            content_type: content_type.map(str::to_string),
        })
    }

    async fn get(&self, name: &str) -> Result<Bytes> {
        self.objects
            .get(name)
            .map(|entry| entry.value().data.clone())
            .ok_or_else(|| StoreError::not_found(name))
    }

    async fn stat(&self, name: &str) -> Result<ObjectInfo> {
        self.objects
            .get(name)
            .map(|entry| {
                let object = entry.value();
                ObjectInfo {
                    name: name.to_string(),
                    size: object.data.len() as u64,
                    content_type: Some(object.content_type.clone()),
                    created: Some(object.created),
                    updated: Some(object.updated),
                }
            })
            .ok_or_else(|| StoreError::not_found(name))
    }

    async fn delete(&self, name: &str) -> Result<DeletedObject> {
        self.objects
            .remove(name)
            .map(|(name, _)| DeletedObject { name })
            .ok_or_else(|| StoreError::not_found(name))
    }
}
