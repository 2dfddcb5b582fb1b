use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::IdeafyError;
use super::provider::LLMProvider;
use super::types::{LLMResponse, ProviderSettings};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completions client; also serves local OpenAI-compatible servers
/// such as Ollama through a custom base URL.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    label: &'static str,
}

impl OpenAIProvider {
    pub fn new(settings: &ProviderSettings) -> Result<Self, IdeafyError> {
        Self::with_base_url(settings, DEFAULT_BASE_URL, DEFAULT_MODEL, "openai")
    }

    pub fn with_base_url(
        settings: &ProviderSettings,
        default_base_url: &str,
        default_model: &str,
        label: &'static str,
    ) -> Result<Self, IdeafyError> {
        Ok(Self {
            client: settings.http_client()?,
            api_key: settings.api_key.clone(),
            model: settings.model.clone().unwrap_or_else(|| default_model.to_string()),
            base_url: settings
                .base_url
                .as_deref()
                .unwrap_or(default_base_url)
                .trim_end_matches('/')
                .to_string(),
            label,
        })
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, IdeafyError> {
        let mut messages = Vec::new();
        if let Some(sys) = system {
            messages.push(json!({"role": "system", "content": sys}));
        }
        messages.push(json!({"role": "user", "content": prompt}));

        let body = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": 4096,
        });

        let mut request = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body);
        if !self.api_key.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let resp = request
            .send()
            .await
            .map_err(|e| IdeafyError::Network(format!("{} request failed: {}", self.label, e)))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(IdeafyError::RateLimit(format!("{} rate limit", self.label)));
        }
        if status.as_u16() == 401 {
            return Err(IdeafyError::Authentication(format!("Invalid {} API key", self.label)));
        }

        let text = resp.text().await
            .map_err(|e| IdeafyError::Network(format!("Failed to read {} response: {}", self.label, e)))?;
        let parsed = serde_json::from_str::<Value>(&text);

        if let Some(error) = parsed.as_ref().ok().and_then(|data| data.get("error")) {
            let message = error["message"].as_str().or_else(|| error.as_str()).unwrap_or("Unknown");
            return Err(IdeafyError::LLMApi(message.to_string()));
        }
        if !status.is_success() {
            return Err(IdeafyError::LLMApi(format!("{} returned HTTP {}", self.label, status)));
        }
        let data = parsed
            .map_err(|e| IdeafyError::LLMApi(format!("Failed to parse {} response: {}", self.label, e)))?;

        let content = data["choices"][0]["message"]["content"].as_str()
            .ok_or_else(|| IdeafyError::LLMApi(format!("No content in {} response", self.label)))?
            .to_string();
        let input_tokens = data["usage"]["prompt_tokens"].as_u64();
        let output_tokens = data["usage"]["completion_tokens"].as_u64();

        Ok(LLMResponse {
            content,
            input_tokens,
            output_tokens,
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str { self.label }
    fn model_name(&self) -> &str { &self.model }
}
