pub mod routes;
pub mod models;
pub mod errors;
pub mod auth;

use std::sync::Arc;
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::service::ReportService;

#[derive(Clone)]
pub struct AppState {
    pub service: ReportService,
    /// Accepted bearer tokens; empty means the API is open.
    pub api_tokens: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(service: ReportService, api_tokens: Vec<String>) -> Self {
        Self {
            service,
            api_tokens: Arc::new(api_tokens),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let guarded = Router::new()
        .route("/api/validate-startup", post(routes::validate::validate_startup))
        .route("/api/auth/session", get(routes::auth::session))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::api_auth_middleware));

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .merge(guarded)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
