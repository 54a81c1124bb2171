//! Service-level handlers (health check, API info)

use axum::{response::IntoResponse, Json};
use serde_json::json;

/// API title reported by the info endpoint
pub const API_NAME: &str = "GCP Bucket File API";

/// GET /health - Health check
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

/// GET / - API information
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": API_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "upload": "/upload",
            "download": "/download/{filename}",
            "delete": "/delete/{filename}"
        }
    }))
}
