//! Object metadata and operation receipts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content type used when neither the caller nor the backend supplies one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Receipt for a completed upload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    /// Object name
    #[serde(rename = "filename")]
    pub name: String,
    /// Bucket the object was written to
    pub bucket: String,
    /// Number of bytes written
    pub size: u64,
    /// Content type supplied with the upload
    pub content_type: Option<String>,
}

/// Current metadata of an object in the bucket
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInfo {
    #[serde(rename = "filename")]
    pub name: String,
    pub size: u64,
    pub content_type: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

impl ObjectInfo {
    /// Content type to serve the object with
    pub fn content_type_or_default(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

/// Receipt for a completed delete
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedObject {
    #[serde(rename = "filename")]
    pub name: String,
}
