//! # GCS File Gateway
//!
//! HTTP gateway for uploading, downloading, and deleting files in a single
//! Google Cloud Storage bucket.
//!
//! This crate provides:
//! - **File API**: `POST /upload`, `GET /download/{filename}`, `DELETE /delete/{filename}`
//! - **Validation**: Size limit and extension allow-list checked before any storage call
//! - **Error mapping**: Validation → 400, missing object → 404, backend failure → 500
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   HTTP Clients                      │
//! │               (curl, browsers, SDKs)                │
//! └─────────────────────────┬───────────────────────────┘
//!                           │
//! ┌─────────────────────────▼───────────────────────────┐
//! │                  GCS File Gateway                    │
//! ├─────────────────────────────────────────────────────┤
//! │   Request ID │ Logging │ CORS │ Compression          │
//! ├─────────────────────────────────────────────────────┤
//! │        Handlers + Upload Policy validation          │
//! ├─────────────────────────────────────────────────────┤
//! │                  gcs-file-store                      │
//! │         (object_store GCS, in-memory store)         │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod upload;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use server::{run_server, run_server_with_shutdown};
pub use state::AppState;
pub use upload::{UploadPolicy, ValidationError};
