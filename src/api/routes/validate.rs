use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::warn;
use crate::api::AppState;
use crate::errors::IdeafyError;
use crate::models::IdeaSubmission;

/// `POST /api/validate-startup`: generate a report for one idea and return
/// the model's JSON object as-is.
pub async fn validate_startup(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, IdeafyError> {
    let Json(body) = payload.map_err(|e| {
        warn!(error = %e.body_text(), "Rejected unreadable submission");
        IdeafyError::InvalidSubmission(e.body_text())
    })?;

    let idea = IdeaSubmission::from_value(&body).inspect_err(|e| {
        warn!(error = %e, "Rejected invalid submission");
    })?;

    let report = state.service.generate(&idea).await?;
    Ok(Json(report))
}
