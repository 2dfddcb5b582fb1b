use serde_json::{Map, Value};

use crate::cli::commands::IdeaArgs;
use crate::errors::IdeafyError;
use crate::models::IdeaSubmission;

/// Build the submission from `--idea` and the per-field flags. Returns
/// `None` when neither was given.
pub fn load_idea(args: &IdeaArgs) -> Result<Option<IdeaSubmission>, IdeafyError> {
    let mut fields = match &args.idea {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                IdeafyError::InvalidSubmission(format!("Failed to read idea file {}: {}", path.display(), e))
            })?;
            match serde_json::from_str::<Value>(&content)? {
                Value::Object(map) => map,
                _ => {
                    return Err(IdeafyError::InvalidSubmission(format!(
                        "{} must contain a JSON object",
                        path.display()
                    )))
                }
            }
        }
        None => Map::new(),
    };

    let flags = [
        ("businessName", &args.name),
        ("industry", &args.industry),
        ("description", &args.description),
        ("targetMarket", &args.target_market),
        ("problemSolving", &args.problem),
        ("uniqueValue", &args.unique_value),
        ("businessModel", &args.business_model),
        ("funding", &args.funding),
        ("timeline", &args.timeline),
        ("experience", &args.experience),
    ];
    let any_flag = flags.iter().any(|(_, v)| v.is_some());
    if args.idea.is_none() && !any_flag {
        return Ok(None);
    }

    for (key, value) in flags {
        if let Some(v) = value {
            fields.insert(key.to_string(), Value::String(v.clone()));
        }
    }

    IdeaSubmission::from_value(&Value::Object(fields)).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_no_input_is_none() {
        assert!(load_idea(&IdeaArgs::default()).unwrap().is_none());
    }

    #[test]
    fn test_flags_only() {
        let args = IdeaArgs {
            name: Some("Acme".into()),
            industry: Some("SaaS".into()),
            ..Default::default()
        };
        let idea = load_idea(&args).unwrap().unwrap();
        assert_eq!(idea.business_name, "Acme");
        assert_eq!(idea.industry.as_deref(), Some("SaaS"));
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("idea.json");
        fs::write(&path, r#"{"businessName": "Acme", "industry": "SaaS", "funding": "Seed"}"#).unwrap();

        let args = IdeaArgs {
            idea: Some(path),
            industry: Some("Fintech".into()),
            ..Default::default()
        };
        let idea = load_idea(&args).unwrap().unwrap();
        assert_eq!(idea.industry.as_deref(), Some("Fintech"));
        assert_eq!(idea.funding.as_deref(), Some("Seed"));
    }

    #[test]
    fn test_flags_without_name_rejected() {
        let args = IdeaArgs { industry: Some("SaaS".into()), ..Default::default() };
        assert!(matches!(load_idea(&args), Err(IdeafyError::InvalidSubmission(_))));
    }

    #[test]
    fn test_file_must_be_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("idea.json");
        fs::write(&path, "[]").unwrap();
        let args = IdeaArgs { idea: Some(path), ..Default::default() };
        assert!(load_idea(&args).is_err());
    }
}
