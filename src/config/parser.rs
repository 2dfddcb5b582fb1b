use std::path::Path;
use crate::errors::IdeafyError;
use crate::llm::catalog;
use super::types::IdeafyConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<IdeafyConfig, IdeafyError> {
    if !path.exists() {
        return Err(IdeafyError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(IdeafyError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<IdeafyConfig, IdeafyError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // An empty file is a valid, empty config
    if yaml.is_null() {
        return Ok(IdeafyConfig::default());
    }

    for msg in schema_warnings(&yaml)? {
        warn!(validation_error = %msg, "Config schema warning");
    }

    let config: IdeafyConfig = serde_yaml::from_value(yaml)?;
    validate_conflicts(&config)?;

    Ok(config)
}

/// Check the config against the JSON schema. Violations are advisory and
/// returned as messages rather than failing the load.
pub fn schema_warnings(yaml: &serde_yaml::Value) -> Result<Vec<String>, IdeafyError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| IdeafyError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| IdeafyError::Config(format!("Schema compilation error: {}", e)))?;

    let messages = match compiled.validate(&json_value) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect(),
    };
    Ok(messages)
}

/// Reject settings that cannot work at runtime.
fn validate_conflicts(config: &IdeafyConfig) -> Result<(), IdeafyError> {
    if let Some(server) = &config.server {
        if server.port == Some(0) {
            return Err(IdeafyError::Config("server.port must be between 1 and 65535".into()));
        }
        if let Some(tokens) = &server.api_tokens {
            if tokens.iter().any(|t| t.trim().is_empty()) {
                return Err(IdeafyError::Config("server.api_tokens must not contain empty tokens".into()));
            }
        }
    }

    if let Some(llm) = &config.llm {
        if let Some(provider) = &llm.provider {
            if catalog::get_provider(provider).is_none() {
                return Err(IdeafyError::Config(format!("Unknown LLM provider: {}", provider)));
            }
        }
        if llm.timeout_secs == Some(0) {
            return Err(IdeafyError::Config("llm.timeout_secs must be at least 1".into()));
        }
    }

    if let Some(viewer) = &config.viewer {
        if viewer.timeout_secs == Some(0) {
            return Err(IdeafyError::Config("viewer.timeout_secs must be at least 1".into()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LLMConfig, ServerConfig, ViewerConfig};

    #[test]
    fn test_validate_conflicts_unknown_provider() {
        let config = IdeafyConfig {
            llm: Some(LLMConfig { provider: Some("mystery".into()), ..Default::default() }),
            ..Default::default()
        };
        assert!(validate_conflicts(&config).is_err());
    }

    #[test]
    fn test_validate_conflicts_zero_port() {
        let config = IdeafyConfig {
            server: Some(ServerConfig { port: Some(0), ..Default::default() }),
            ..Default::default()
        };
        assert!(validate_conflicts(&config).is_err());
    }

    #[test]
    fn test_validate_conflicts_zero_timeout() {
        let config = IdeafyConfig {
            llm: Some(LLMConfig { timeout_secs: Some(0), ..Default::default() }),
            ..Default::default()
        };
        assert!(validate_conflicts(&config).is_err());
    }

    #[test]
    fn test_validate_conflicts_zero_viewer_timeout() {
        let config = IdeafyConfig {
            viewer: Some(ViewerConfig { timeout_secs: Some(0), ..Default::default() }),
            ..Default::default()
        };
        assert!(validate_conflicts(&config).is_err());
    }

    #[test]
    fn test_validate_conflicts_empty_config() {
        assert!(validate_conflicts(&IdeafyConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = parse_config_str("").unwrap();
        assert!(config.server.is_none());
    }

    #[test]
    fn test_schema_warnings_for_unknown_key() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("server:\n  prot: 80\n").unwrap();
        let warnings = schema_warnings(&yaml).unwrap();
        assert!(!warnings.is_empty());
    }

    #[test]
    fn test_schema_clean_config() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("server:\n  port: 8080\nllm:\n  provider: gemini\n").unwrap();
        assert!(schema_warnings(&yaml).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_parse_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_config(&dir.path().join("absent.yaml")).await.unwrap_err();
        assert!(matches!(err, IdeafyError::Config(_)));
    }

    #[tokio::test]
    async fn test_parse_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideafy.yaml");
        std::fs::write(&path, "server:\n  port: 7000\nllm:\n  model: gemini-2.5-flash\n").unwrap();
        let config = parse_config(&path).await.unwrap();
        assert_eq!(config.server.unwrap().port, Some(7000));
        assert_eq!(config.llm.unwrap().model.as_deref(), Some("gemini-2.5-flash"));
    }
}
