use tracing::info;

use crate::api::{self, AppState};
use crate::cli::commands::ServeArgs;
use crate::config::credentials::mask_secret;
use crate::config::{IdeafyConfig, ServeOverrides, ServeSettings};
use crate::errors::IdeafyError;
use crate::llm::create_provider;
use crate::prompts::PromptTemplate;
use crate::service::ReportService;

/// Wire settings, provider and prompt into the shared state the router serves.
pub fn build_state(settings: &ServeSettings) -> Result<AppState, IdeafyError> {
    let provider = create_provider(&settings.provider, &settings.llm)?;
    let template = match &settings.prompt_template {
        Some(path) => PromptTemplate::load(path)?,
        None => PromptTemplate::builtin(),
    };

    let mut secrets = settings.api_tokens.clone();
    if !settings.llm.api_key.is_empty() {
        secrets.push(settings.llm.api_key.clone());
    }

    let service = ReportService::new(provider, template).with_secrets(secrets);
    Ok(AppState::new(service, settings.api_tokens.clone()))
}

pub async fn handle_serve(args: ServeArgs, config: &IdeafyConfig) -> Result<(), IdeafyError> {
    let overrides = ServeOverrides {
        host: args.host,
        port: args.port,
        provider: args.provider,
        model: args.model,
        prompt_template: args.prompt_template,
    };
    let settings = ServeSettings::resolve(config, &overrides)?;
    let state = build_state(&settings)?;

    info!(
        provider = %settings.provider,
        model = %state.service.model_name(),
        api_key = %mask_secret(&settings.llm.api_key),
        auth = !settings.api_tokens.is_empty(),
        "Starting report service"
    );

    let app = api::build_router(state);
    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| IdeafyError::Internal(format!("Server error: {}", e)))?;

    info!("Report service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
