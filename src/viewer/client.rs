use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::api::models::ErrorResponse;
use crate::config::ViewerSettings;
use crate::errors::IdeafyError;
use crate::models::{ensure_report_object, IdeaSubmission};

/// Talks to a running report service on behalf of the viewer.
#[derive(Debug, Clone)]
pub struct ReportClient {
    http: Client,
    base_url: String,
    api_token: Option<String>,
}

impl ReportClient {
    pub fn new(settings: &ViewerSettings) -> Result<Self, IdeafyError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| IdeafyError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: settings.service_url.trim_end_matches('/').to_string(),
            api_token: settings.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit an idea and return the report JSON exactly as the service sent it.
    pub async fn fetch_report(&self, idea: &IdeaSubmission) -> Result<Value, IdeafyError> {
        let url = format!("{}/api/validate-startup", self.base_url);
        debug!(%url, business = %idea.business_name, "Requesting report");

        let mut req = self.http.post(&url).json(idea);
        if let Some(token) = &self.api_token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| IdeafyError::Network(format!("Could not reach report service at {}: {}", self.base_url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_response(status, &body));
        }

        let report: Value = resp
            .json()
            .await
            .map_err(|e| IdeafyError::MalformedResponse(format!("Report service sent invalid JSON: {}", e)))?;
        ensure_report_object(&report)?;
        Ok(report)
    }
}

/// Map a non-2xx reply from the service back onto the error domain it came from.
fn error_from_response(status: StatusCode, body: &str) -> IdeafyError {
    let parsed: Option<ErrorResponse> = serde_json::from_str(body).ok();
    let message = match &parsed {
        Some(e) => match &e.details {
            Some(details) => format!("{}: {}", e.error, details),
            None => e.error.clone(),
        },
        None => format!("HTTP {}", status),
    };

    match status {
        StatusCode::BAD_REQUEST => IdeafyError::InvalidSubmission(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => IdeafyError::Authentication(message),
        _ => match parsed.and_then(|e| e.kind).as_deref() {
            Some("malformed_response") => IdeafyError::MalformedResponse(message),
            _ => IdeafyError::Upstream(message),
        },
    }
}
