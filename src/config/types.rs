use serde::{Deserialize, Serialize};

/// Contents of an `ideafy.yaml` configuration file. Every section is optional.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct IdeafyConfig {
    pub server: Option<ServerConfig>,
    pub llm: Option<LLMConfig>,
    pub viewer: Option<ViewerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Path to a custom prompt template file
    pub prompt_template: Option<String>,
    /// Bearer tokens accepted by the API; empty disables the check
    pub api_tokens: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LLMConfig {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ViewerConfig {
    pub service_url: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: Option<u64>,
}
