use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "ideafy",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.service.provider_name(),
        "model": state.service.model_name(),
    }))
}
