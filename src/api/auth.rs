use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;
use crate::api::AppState;
use crate::errors::IdeafyError;

/// Require a configured bearer token. With no tokens configured every
/// request passes through.
pub async fn api_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, IdeafyError> {
    if state.api_tokens.is_empty() {
        return Ok(next.run(request).await);
    }

    let auth_header = request.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok());

    match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if state.api_tokens.iter().any(|t| t == token.trim()) => {
            Ok(next.run(request).await)
        }
        Some(_) => {
            warn!(path = %request.uri().path(), "Rejected request with invalid API token");
            Err(IdeafyError::Authentication("Invalid API token".into()))
        }
        None => Err(IdeafyError::Authentication("Missing Authorization header".into())),
    }
}
