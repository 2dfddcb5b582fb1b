use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::errors::IdeafyError;
use crate::llm::{catalog, ProviderSettings};
use super::credentials::resolve_credential;
use super::types::IdeafyConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PROVIDER: &str = "gemini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";
/// Viewer requests wait longer than the service's own model timeout.
pub const DEFAULT_VIEWER_TIMEOUT_SECS: u64 = 180;

/// Command-line values for `serve`; each one wins over file and environment.
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub prompt_template: Option<PathBuf>,
}

/// Fully resolved settings for the report service.
#[derive(Debug, Clone)]
pub struct ServeSettings {
    pub host: String,
    pub port: u16,
    pub provider: String,
    pub llm: ProviderSettings,
    pub prompt_template: Option<PathBuf>,
    pub api_tokens: Vec<String>,
}

impl ServeSettings {
    /// Resolve from the process environment.
    pub fn resolve(config: &IdeafyConfig, overrides: &ServeOverrides) -> Result<Self, IdeafyError> {
        Self::resolve_with(config, overrides, |name| std::env::var(name).ok())
    }

    /// Layer defaults, config file, environment (via `env`), then CLI overrides.
    pub fn resolve_with(
        config: &IdeafyConfig,
        overrides: &ServeOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, IdeafyError> {
        let server = config.server.clone().unwrap_or_default();
        let llm = config.llm.clone().unwrap_or_default();

        let env_port = match env("PORT") {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|_| {
                IdeafyError::Config(format!("PORT is not a valid port number: {}", raw))
            })?),
            None => None,
        };

        let port = overrides.port.or(env_port).or(server.port).unwrap_or(DEFAULT_PORT);
        let host = overrides.host.clone().or(server.host).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let provider = overrides
            .provider
            .clone()
            .or(llm.provider)
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
        if catalog::get_provider(&provider).is_none() {
            return Err(IdeafyError::Config(format!("Unknown LLM provider: {}", provider)));
        }

        // A key in the config file wins; otherwise fall back to the provider's env var.
        let api_key = match llm.api_key {
            Some(raw) => resolve_credential(&raw, &env),
            None => catalog::api_key_env_var(&provider)
                .and_then(&env)
                .unwrap_or_default(),
        };

        let model = overrides.model.clone().or(llm.model);
        let timeout = Duration::from_secs(llm.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        let api_tokens = match env("IDEAFY_API_TOKENS") {
            Some(raw) => split_tokens(&raw),
            None => server.api_tokens.unwrap_or_default(),
        };

        let prompt_template = overrides
            .prompt_template
            .clone()
            .or_else(|| server.prompt_template.map(PathBuf::from));

        debug!(%host, port, %provider, tokens = api_tokens.len(), "Resolved serve settings");

        Ok(Self {
            host,
            port,
            provider,
            llm: ProviderSettings {
                api_key,
                model,
                base_url: llm.base_url,
                timeout,
            },
            prompt_template,
            api_tokens,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Command-line values for `report`.
#[derive(Debug, Clone, Default)]
pub struct ViewerOverrides {
    pub service_url: Option<String>,
    pub api_token: Option<String>,
}

/// Resolved settings for the report viewer.
#[derive(Debug, Clone)]
pub struct ViewerSettings {
    pub service_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl ViewerSettings {
    pub fn resolve(config: &IdeafyConfig, overrides: &ViewerOverrides) -> Self {
        Self::resolve_with(config, overrides, |name| std::env::var(name).ok())
    }

    pub fn resolve_with(
        config: &IdeafyConfig,
        overrides: &ViewerOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let viewer = config.viewer.clone().unwrap_or_default();

        let service_url = overrides
            .service_url
            .clone()
            .or_else(|| env("IDEAFY_SERVICE_URL"))
            .or(viewer.service_url)
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let api_token = overrides
            .api_token
            .clone()
            .or_else(|| env("IDEAFY_API_TOKEN"))
            .or_else(|| viewer.api_token.map(|t| resolve_credential(&t, &env)))
            .filter(|t| !t.is_empty());

        let timeout = Duration::from_secs(viewer.timeout_secs.unwrap_or(DEFAULT_VIEWER_TIMEOUT_SECS));

        Self { service_url, api_token, timeout }
    }

    /// Settings for a known service URL with default timeout and no token.
    pub fn for_url(service_url: &str) -> Self {
        Self {
            service_url: service_url.trim_end_matches('/').to_string(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_VIEWER_TIMEOUT_SECS),
        }
    }
}

fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LLMConfig, ServerConfig, ViewerConfig};
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = ServeSettings::resolve_with(
            &IdeafyConfig::default(),
            &ServeOverrides::default(),
            env_of(&[("GEMINI_API_KEY", "gk")]),
        )
        .unwrap();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.provider, "gemini");
        assert_eq!(settings.llm.api_key, "gk");
        assert_eq!(settings.llm.timeout, Duration::from_secs(120));
        assert!(settings.api_tokens.is_empty());
    }

    #[test]
    fn test_precedence_flag_env_file() {
        let config = IdeafyConfig {
            server: Some(ServerConfig { port: Some(7000), ..Default::default() }),
            ..Default::default()
        };

        let from_file = ServeSettings::resolve_with(&config, &ServeOverrides::default(), env_of(&[])).unwrap();
        assert_eq!(from_file.port, 7000);

        let from_env =
            ServeSettings::resolve_with(&config, &ServeOverrides::default(), env_of(&[("PORT", "8000")])).unwrap();
        assert_eq!(from_env.port, 8000);

        let overrides = ServeOverrides { port: Some(9000), ..Default::default() };
        let from_flag = ServeSettings::resolve_with(&config, &overrides, env_of(&[("PORT", "8000")])).unwrap();
        assert_eq!(from_flag.port, 9000);
    }

    #[test]
    fn test_invalid_port_env() {
        let err = ServeSettings::resolve_with(
            &IdeafyConfig::default(),
            &ServeOverrides::default(),
            env_of(&[("PORT", "http")]),
        )
        .unwrap_err();
        assert!(matches!(err, IdeafyError::Config(_)));
    }

    #[test]
    fn test_config_api_key_reference() {
        let config = IdeafyConfig {
            llm: Some(LLMConfig { api_key: Some("$MY_KEY".into()), ..Default::default() }),
            ..Default::default()
        };
        let settings =
            ServeSettings::resolve_with(&config, &ServeOverrides::default(), env_of(&[("MY_KEY", "resolved")]))
                .unwrap();
        assert_eq!(settings.llm.api_key, "resolved");
    }

    #[test]
    fn test_api_tokens_from_env() {
        let settings = ServeSettings::resolve_with(
            &IdeafyConfig::default(),
            &ServeOverrides::default(),
            env_of(&[("IDEAFY_API_TOKENS", " one, ,two ")]),
        )
        .unwrap();
        assert_eq!(settings.api_tokens, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_unknown_provider_override() {
        let overrides = ServeOverrides { provider: Some("nope".into()), ..Default::default() };
        assert!(ServeSettings::resolve_with(&IdeafyConfig::default(), &overrides, env_of(&[])).is_err());
    }

    #[test]
    fn test_viewer_defaults_and_trailing_slash() {
        let viewer = ViewerSettings::resolve_with(&IdeafyConfig::default(), &ViewerOverrides::default(), env_of(&[]));
        assert_eq!(viewer.service_url, "http://localhost:5000");
        assert!(viewer.api_token.is_none());
        assert_eq!(viewer.timeout, Duration::from_secs(DEFAULT_VIEWER_TIMEOUT_SECS));

        let config = IdeafyConfig {
            viewer: Some(ViewerConfig { service_url: Some("http://reports.local/".into()), ..Default::default() }),
            ..Default::default()
        };
        let viewer = ViewerSettings::resolve_with(&config, &ViewerOverrides::default(), env_of(&[]));
        assert_eq!(viewer.service_url, "http://reports.local");
    }

    #[test]
    fn test_viewer_env_beats_file() {
        let config = IdeafyConfig {
            viewer: Some(ViewerConfig {
                service_url: Some("http://file".into()),
                api_token: Some("t".into()),
                timeout_secs: Some(600),
            }),
            ..Default::default()
        };
        let viewer = ViewerSettings::resolve_with(
            &config,
            &ViewerOverrides::default(),
            env_of(&[("IDEAFY_SERVICE_URL", "http://env")]),
        );
        assert_eq!(viewer.service_url, "http://env");
        assert_eq!(viewer.api_token.as_deref(), Some("t"));
        assert_eq!(viewer.timeout, Duration::from_secs(600));
    }
}
