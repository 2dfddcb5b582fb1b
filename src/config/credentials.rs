use tracing::debug;

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference and resolve it through `env`.
pub fn resolve_credential(value: &str, env: impl Fn(&str) -> Option<String>) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match env(var_name) {
            Some(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            None => {
                debug!(var = %var_name, "Environment variable not set, using literal");
                value.to_string()
            }
        }
    } else {
        value.to_string()
    }
}

/// Mask a secret for log output, keeping a short prefix for identification.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<unset>".to_string();
    }
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

/// Redact sensitive values in a string. Replaces each secret of at least
/// four characters with [REDACTED].
pub fn redact_credentials(text: &str, secrets: &[&str]) -> String {
    let mut result = text.to_string();
    for secret in secrets {
        if !secret.is_empty() && secret.len() >= 4 {
            result = result.replace(secret, "[REDACTED]");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_env(name: &str) -> Option<String> {
        (name == "TEST_IDEAFY_CRED").then(|| "secret123".to_string())
    }

    #[test]
    fn test_resolve_credential_literal() {
        assert_eq!(resolve_credential("mykey", fake_env), "mykey");
    }

    #[test]
    fn test_resolve_credential_env_var() {
        assert_eq!(resolve_credential("$TEST_IDEAFY_CRED", fake_env), "secret123");
    }

    #[test]
    fn test_resolve_credential_missing_env_var() {
        assert_eq!(resolve_credential("$NONEXISTENT_IDEAFY_VAR", fake_env), "$NONEXISTENT_IDEAFY_VAR");
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "<unset>");
        assert_eq!(mask_secret("short"), "****");
        assert_eq!(mask_secret("AIzaSyD-long-key"), "AIza****");
    }

    #[test]
    fn test_redact_credentials() {
        let text = "upstream said: bad key AIzaSecret99 and id=ab";
        let redacted = redact_credentials(text, &["AIzaSecret99", "ab"]);
        assert!(redacted.contains("[REDACTED]"));
        assert!(!redacted.contains("AIzaSecret99"));
        assert!(redacted.contains("id=ab"));
    }
}
