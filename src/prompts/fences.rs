use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::errors::IdeafyError;
use crate::models::report::ensure_report_object;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```json|```").unwrap());

/// Remove every markdown code-fence marker (with or without a `json` tag)
/// and trim surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    FENCE_RE.replace_all(text, "").trim().to_string()
}

/// Fence-strip a model reply and parse it as a report-shaped JSON object.
pub fn parse_json_reply(text: &str) -> Result<Value, IdeafyError> {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(IdeafyError::MalformedResponse("model returned an empty reply".into()));
    }

    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|e| IdeafyError::MalformedResponse(format!("reply is not valid JSON: {}", e)))?;
    ensure_report_object(&value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BODY: &str = r#"{"executiveOverview": {"summary": "ok"}}"#;

    #[test]
    fn test_strip_json_tagged_fence() {
        let text = format!("```json\n{}\n```", BODY);
        assert_eq!(strip_code_fences(&text), BODY);
    }

    #[test]
    fn test_strip_bare_fence() {
        let text = format!("  ```\n{}\n```  \n", BODY);
        assert_eq!(strip_code_fences(&text), BODY);
    }

    #[test]
    fn test_unfenced_is_unchanged() {
        assert_eq!(strip_code_fences(BODY), BODY);
    }

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let plain = parse_json_reply(BODY).unwrap();
        let tagged = parse_json_reply(&format!("```json\n{}\n```", BODY)).unwrap();
        let bare = parse_json_reply(&format!("```\n{}\n```", BODY)).unwrap();
        assert_eq!(plain, tagged);
        assert_eq!(plain, bare);
        assert_eq!(plain, json!({"executiveOverview": {"summary": "ok"}}));
    }

    #[test]
    fn test_prose_reply_is_malformed() {
        let err = parse_json_reply("Sure! Here is your report.").unwrap_err();
        assert!(matches!(err, IdeafyError::MalformedResponse(_)));
        assert!(!err.detail().is_empty());
    }

    #[test]
    fn test_empty_reply_is_malformed() {
        assert!(matches!(parse_json_reply("```json\n```"), Err(IdeafyError::MalformedResponse(_))));
    }

    #[test]
    fn test_non_object_json_is_malformed() {
        assert!(matches!(parse_json_reply("[1, 2]"), Err(IdeafyError::MalformedResponse(_))));
    }
}
