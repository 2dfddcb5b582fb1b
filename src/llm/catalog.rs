pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub env_var: &'static str,
    pub base_url: Option<&'static str>,
    pub models: &'static [ModelInfo],
}

pub struct ModelInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub recommended: bool,
}

pub static PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: "gemini",
        name: "Google Gemini",
        env_var: "GEMINI_API_KEY",
        base_url: None,
        models: &[
            ModelInfo { id: "gemini-2.0-flash", label: "Gemini 2.0 Flash", recommended: true },
            ModelInfo { id: "gemini-2.5-flash", label: "Gemini 2.5 Flash", recommended: false },
            ModelInfo { id: "gemini-2.5-pro", label: "Gemini 2.5 Pro", recommended: false },
        ],
    },
    ProviderInfo {
        id: "openai",
        name: "OpenAI",
        env_var: "OPENAI_API_KEY",
        base_url: None,
        models: &[
            ModelInfo { id: "gpt-4o-mini", label: "GPT-4o Mini", recommended: true },
            ModelInfo { id: "gpt-4o", label: "GPT-4o", recommended: false },
        ],
    },
    ProviderInfo {
        id: "local",
        name: "Local / Ollama",
        env_var: "",
        base_url: Some("http://localhost:11434/v1"),
        models: &[
            ModelInfo { id: "llama3.1:8b", label: "Llama 3.1 8B", recommended: true },
        ],
    },
];

pub fn get_provider(id: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.id == id)
}

pub fn get_default_model(provider_id: &str) -> Option<&'static str> {
    let provider = get_provider(provider_id)?;
    provider.models.iter()
        .find(|m| m.recommended)
        .or_else(|| provider.models.first())
        .map(|m| m.id)
}

/// Environment variable holding the API key for a provider, if it needs one.
pub fn api_key_env_var(provider_id: &str) -> Option<&'static str> {
    get_provider(provider_id)
        .map(|p| p.env_var)
        .filter(|v| !v.is_empty())
}
