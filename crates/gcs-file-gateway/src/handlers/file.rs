//! File operation handlers

use crate::upload::{UploadPolicy, ValidationError};
use crate::{ApiError, AppState};
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::{Bytes, BytesMut};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Multipart form field carrying the upload
pub const FILE_FIELD: &str = "file";

/// A file read from an upload request
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub content: Bytes,
    pub content_type: Option<String>,
}

/// Read the `file` field of a multipart body into memory.
///
/// Bytes past the size limit are counted but not kept, so an oversized
/// upload is rejected with its exact size without being buffered.
pub async fn read_upload(
    multipart: &mut Multipart,
    policy: &UploadPolicy,
) -> Result<UploadedFile, ApiError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        let filename = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or(ValidationError::MissingFilename)?;
        let content_type = field.content_type().map(str::to_string);

        let mut content = BytesMut::new();
        let mut size: u64 = 0;
        while let Some(chunk) = field.chunk().await? {
            size += chunk.len() as u64;
            if size <= policy.max_file_size {
                content.extend_from_slice(&chunk);
            } else if !content.is_empty() {
                content = BytesMut::new();
            }
        }
        policy.check_size(size)?;

        return Ok(UploadedFile {
            filename,
            content: content.freeze(),
            content_type,
        });
    }

    Err(ValidationError::MissingFile.into())
}

/// POST /upload - Upload a file to the bucket
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let upload = read_upload(&mut multipart, &state.upload_policy).await?;
    state.upload_policy.check_type(&upload.filename)?;

    let stored = state
        .store
        .put(&upload.filename, upload.content, upload.content_type.as_deref())
        .await
        .map_err(|e| ApiError::store("upload file", e))?;

    info!(filename = %stored.name, size = stored.size, "File uploaded successfully");

    Ok(Json(json!({
        "message": "File uploaded successfully",
        "data": stored,
    }))
    .into_response())
}

/// GET /download/{filename} - Download a file from the bucket
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let data = state
        .store
        .get(&filename)
        .await
        .map_err(|e| ApiError::store("download file", e))?;

    // Separate call; a concurrent delete in between surfaces as 404
    let info = state
        .store
        .stat(&filename)
        .await
        .map_err(|e| ApiError::store("get file metadata", e))?;

    let content_type = info.content_type_or_default().to_string();
    let disposition = content_disposition(&filename);

    debug!(filename = %filename, size = data.len(), content_type = %content_type, "Serving file");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        data,
    )
        .into_response())
}

/// `attachment` disposition with the filename as a quoted-string
fn content_disposition(filename: &str) -> String {
    let escaped = filename.replace('\\', "\\\\").replace('"', "\\\"");
    format!("attachment; filename=\"{}\"", escaped)
}

/// DELETE /delete/{filename} - Delete a file from the bucket
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let deleted = state
        .store
        .delete(&filename)
        .await
        .map_err(|e| ApiError::store("delete file", e))?;

    info!(filename = %deleted.name, "File deleted successfully");

    Ok(Json(json!({
        "message": "File deleted successfully",
        "data": deleted,
    }))
    .into_response())
}
