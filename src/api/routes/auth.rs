use axum::Json;
use serde_json::{json, Value};

/// Reached only after the bearer check passed (or when the API is open).
pub async fn session() -> Json<Value> {
    Json(json!({ "authenticated": true }))
}
