use axum::{Json, response::IntoResponse};
use serde_json::json;

/// GET /health
///
/// Liveness probe for uptime checks and load balancers.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
