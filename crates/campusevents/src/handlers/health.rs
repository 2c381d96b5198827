//! Health check endpoint.

use axum::Json;

/// GET /health - basic liveness probe.
///
/// Returns 200 immediately without touching the remote database.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
