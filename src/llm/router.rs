use std::sync::Arc;

use crate::errors::IdeafyError;
use super::catalog;
use super::gemini::GeminiProvider;
use super::openai::OpenAIProvider;
use super::provider::LLMProvider;
use super::types::ProviderSettings;

/// Construct the provider named in configuration.
pub fn create_provider(
    provider_name: &str,
    settings: &ProviderSettings,
) -> Result<Arc<dyn LLMProvider>, IdeafyError> {
    let info = catalog::get_provider(provider_name)
        .ok_or_else(|| IdeafyError::Config(format!("Unknown LLM provider: {}", provider_name)))?;

    if settings.api_key.is_empty() && !info.env_var.is_empty() {
        return Err(IdeafyError::Config(format!(
            "{} requires an API key (set {} or llm.api_key)",
            info.name, info.env_var
        )));
    }

    match info.id {
        "gemini" => Ok(Arc::new(GeminiProvider::new(settings)?)),
        "openai" => Ok(Arc::new(OpenAIProvider::new(settings)?)),
        "local" => {
            let base_url = info.base_url.unwrap_or("http://localhost:11434/v1");
            let model = catalog::get_default_model("local").unwrap_or("llama3.1:8b");
            Ok(Arc::new(OpenAIProvider::with_base_url(settings, base_url, model, "local")?))
        }
        other => Err(IdeafyError::Config(format!("Unknown LLM provider: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_gemini_with_default_model() {
        let provider = create_provider("gemini", &ProviderSettings::new("key")).unwrap();
        assert_eq!(provider.provider_name(), "gemini");
        assert_eq!(provider.model_name(), "gemini-2.0-flash");
    }

    #[test]
    fn test_create_local_without_key() {
        let provider = create_provider("local", &ProviderSettings::new("")).unwrap();
        assert_eq!(provider.provider_name(), "local");
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = create_provider("gemini", &ProviderSettings::new("")).err().unwrap();
        assert!(matches!(err, IdeafyError::Config(ref m) if m.contains("GEMINI_API_KEY")));
    }

    #[test]
    fn test_unknown_provider() {
        assert!(create_provider("anthropic-ish", &ProviderSettings::new("k")).is_err());
    }
}
