use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;
use crate::errors::IdeafyError;
use super::provider::LLMProvider;
use super::types::{LLMResponse, ProviderSettings};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(settings: &ProviderSettings) -> Result<Self, IdeafyError> {
        Ok(Self {
            client: settings.http_client()?,
            api_key: settings.api_key.clone(),
            model: settings.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, IdeafyError> {
        let text = match system {
            Some(sys) => format!("System: {}\n\n{}", sys, prompt),
            None => prompt.to_string(),
        };

        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": text}]}],
        });

        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        debug!(model = %self.model, prompt_chars = prompt.len(), "Calling Gemini");

        let resp = self.client.post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| IdeafyError::Network(format!("Gemini request failed: {}", e)))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(IdeafyError::RateLimit("Gemini rate limit exceeded".into()));
        }
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(IdeafyError::Authentication("Gemini rejected the API key".into()));
        }

        let text = resp.text().await
            .map_err(|e| IdeafyError::Network(format!("Failed to read Gemini response: {}", e)))?;
        let parsed = serde_json::from_str::<Value>(&text);

        if let Some(error) = parsed.as_ref().ok().and_then(|data| data.get("error")) {
            return Err(IdeafyError::LLMApi(error["message"].as_str().unwrap_or("Unknown").to_string()));
        }
        if !status.is_success() {
            return Err(IdeafyError::LLMApi(format!("Gemini returned HTTP {}", status)));
        }
        let data = parsed
            .map_err(|e| IdeafyError::LLMApi(format!("Failed to parse Gemini response: {}", e)))?;

        // Replies may be split across several parts; join their text.
        let parts = data["candidates"][0]["content"]["parts"].as_array();
        let content: String = parts
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        if content.is_empty() {
            let reason = data["candidates"][0]["finishReason"]
                .as_str()
                .or_else(|| data["promptFeedback"]["blockReason"].as_str())
                .unwrap_or("no candidates");
            return Err(IdeafyError::LLMApi(format!("Gemini returned no text ({})", reason)));
        }

        let input_tokens = data["usageMetadata"]["promptTokenCount"].as_u64();
        let output_tokens = data["usageMetadata"]["candidatesTokenCount"].as_u64();

        Ok(LLMResponse {
            content,
            input_tokens,
            output_tokens,
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str { "gemini" }
    fn model_name(&self) -> &str { &self.model }
}
