use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdeafyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    /// The generative model could not be reached or rejected the call.
    #[error("Upstream model error: {0}")]
    Upstream(String),

    /// The model replied, but the reply is not a usable JSON report.
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IdeafyError {
    /// Message text without the variant prefix, as reported to API callers.
    pub fn detail(&self) -> String {
        match self {
            Self::Config(m)
            | Self::InvalidSubmission(m)
            | Self::Upstream(m)
            | Self::MalformedResponse(m)
            | Self::Authentication(m)
            | Self::LLMApi(m)
            | Self::RateLimit(m)
            | Self::Network(m)
            | Self::Prompt(m)
            | Self::Internal(m) => m.clone(),
            Self::Io(e) => e.to_string(),
            Self::Json(e) => e.to_string(),
            Self::Yaml(e) => e.to_string(),
        }
    }

    /// Fold a provider-level failure into the upstream failure domain.
    /// Errors that already belong to a report failure domain pass through.
    pub fn into_upstream(self) -> Self {
        match self {
            Self::Upstream(_) | Self::MalformedResponse(_) => self,
            other => Self::Upstream(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_strips_prefix() {
        let err = IdeafyError::MalformedResponse("expected value at line 1".into());
        assert_eq!(err.detail(), "expected value at line 1");
        assert_eq!(err.to_string(), "Malformed model response: expected value at line 1");
    }

    #[test]
    fn test_into_upstream_wraps_provider_errors() {
        let err = IdeafyError::RateLimit("Gemini rate limit".into()).into_upstream();
        assert!(matches!(err, IdeafyError::Upstream(ref m) if m == "Rate limited: Gemini rate limit"));
    }

    #[test]
    fn test_into_upstream_keeps_malformed() {
        let err = IdeafyError::MalformedResponse("bad".into()).into_upstream();
        assert!(matches!(err, IdeafyError::MalformedResponse(_)));
    }
}
