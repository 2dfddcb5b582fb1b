use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::IdeafyError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub model: String,
}

/// Everything needed to construct a provider.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl ProviderSettings {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: None,
            base_url: None,
            timeout: Duration::from_secs(120),
        }
    }

    pub(crate) fn http_client(&self) -> Result<Client, IdeafyError> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| IdeafyError::Config(format!("Failed to build HTTP client: {}", e)))
    }
}
