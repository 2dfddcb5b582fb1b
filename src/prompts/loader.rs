use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::errors::IdeafyError;
use crate::models::idea::{IdeaSubmission, IDEA_FIELDS};

/// Rendered in place of any idea field the user left out.
pub const MISSING_FIELD: &str = "Not specified";

/// The report layout the model is told to follow.
pub const REPORT_SCHEMA: &str = r#"{
  "executiveOverview": {
    "summary": "string",
    "metrics": [{ "label": "string", "value": "string" }],
    "highlights": ["string"]
  },
  "financials": {
    "summary": "string",
    "revenue": [
      { "year": "Year 1", "Revenue": number },
      { "year": "Year 2", "Revenue": number },
      { "year": "Year 3", "Revenue": number }
    ],
    "kpis": [
      { "label": "CAC", "value": "string" },
      { "label": "LTV", "value": "string" },
      { "label": "Burn Rate", "value": "string" }
    ],
    "insights": ["string"]
  },
  "marketCompetition": {
    "summary": "string",
    "stats": [
      { "name": "Competitor A", "value": number },
      { "name": "Competitor B", "value": number },
      { "name": "Competitor C", "value": number },
      { "name": "Others", "value": number }
    ],
    "drivers": ["string"],
    "competitors": [{ "name": "string", "detail": "string" }],
    "radar": [
      { "aspect": "Pricing", "You": number, "Competitors": number },
      { "aspect": "Innovation", "You": number, "Competitors": number },
      { "aspect": "Support", "You": number, "Competitors": number },
      { "aspect": "Scalability", "You": number, "Competitors": number }
    ],
    "insights": ["string"]
  },
  "productValidation": {
    "summary": "string",
    "metrics": [{ "label": "string", "value": "string" }],
    "trends": [{ "month": "string", "MVP": number, "Advanced": number }],
    "feedback": ["string"]
  },
  "recommendations": {
    "summary": "string",
    "actions": [{ "title": "string", "tasks": ["string"] }],
    "risks": [{ "risk": "string", "mitigation": "string" }],
    "finalNote": "string"
  }
}"#;

const TEMPLATE_HEADER: &str = "You are an expert startup analyst.
Generate a complete startup evaluation report in JSON format only.
Follow the schema exactly. Do not include any explanation outside the JSON.

Startup Details:
";

const TEMPLATE_FOOTER: &str = "
Schema:
{{REPORT_SCHEMA}}

Return only valid JSON.
";

/// Built-in template: one `- Label: {{PLACEHOLDER}}` line per idea field.
fn default_template() -> String {
    let mut source = TEMPLATE_HEADER.to_string();
    for field in IDEA_FIELDS {
        source.push_str(&format!("- {}: {{{{{}}}}}\n", field.label, field.placeholder));
    }
    source.push_str(TEMPLATE_FOOTER);
    source
}

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z_]+)\}\}").unwrap());

/// Prompt template with `{{PLACEHOLDER}}` slots for each idea field and
/// `{{REPORT_SCHEMA}}` for the report layout.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    source: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptTemplate {
    pub fn builtin() -> Self {
        Self { source: default_template() }
    }

    /// Build a template from custom text. `{{BUSINESS_NAME}}` is required and
    /// no idea placeholder may appear more than once.
    pub fn from_source(source: &str) -> Result<Self, IdeafyError> {
        let found = placeholders(source);

        for field in IDEA_FIELDS {
            let count = found.iter().filter(|p| p.as_str() == field.placeholder).count();
            if count > 1 {
                return Err(IdeafyError::Prompt(format!(
                    "placeholder {{{{{}}}}} appears {} times; each idea field may appear once",
                    field.placeholder, count
                )));
            }
            if count == 0 {
                if field.key == "businessName" {
                    return Err(IdeafyError::Prompt(
                        "template must contain {{BUSINESS_NAME}}".into(),
                    ));
                }
                warn!(placeholder = field.placeholder, "Prompt template omits idea field");
            }
        }

        Ok(Self { source: source.to_string() })
    }

    /// Load a custom template from a text file.
    pub fn load(path: &Path) -> Result<Self, IdeafyError> {
        if !path.exists() {
            return Err(IdeafyError::Prompt(format!(
                "Prompt template not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            IdeafyError::Prompt(format!("Failed to read prompt {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded custom prompt template");
        Self::from_source(&content)
    }

    /// Substitute the idea into the template in a single pass, so values that
    /// happen to contain placeholder syntax are inserted literally.
    pub fn render(&self, idea: &IdeaSubmission) -> String {
        PLACEHOLDER_RE
            .replace_all(&self.source, |caps: &Captures| {
                let name = &caps[1];
                if name == "REPORT_SCHEMA" {
                    return REPORT_SCHEMA.to_string();
                }
                match IDEA_FIELDS.iter().find(|f| f.placeholder == name) {
                    Some(field) => idea.get(field.key).unwrap_or(MISSING_FIELD).to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

fn placeholders(source: &str) -> Vec<String> {
    PLACEHOLDER_RE
        .captures_iter(source)
        .map(|cap| cap[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn marked_idea() -> IdeaSubmission {
        IdeaSubmission {
            business_name: "Acme-NAME-01".into(),
            industry: Some("Industry-02".into()),
            description: Some("Description-03".into()),
            target_market: Some("Market-04".into()),
            problem_solving: Some("Problem-05".into()),
            unique_value: Some("Value-06".into()),
            business_model: Some("Model-07".into()),
            funding: Some("Funding-08".into()),
            timeline: Some("Timeline-09".into()),
            experience: Some("Experience-10".into()),
        }
    }

    #[test]
    fn test_each_field_appears_exactly_once() {
        let idea = marked_idea();
        let prompt = PromptTemplate::builtin().render(&idea);
        for field in IDEA_FIELDS {
            let value = idea.get(field.key).unwrap();
            assert_eq!(prompt.matches(value).count(), 1, "{} should appear once", field.key);
        }
    }

    #[test]
    fn test_prompt_carries_instructions_and_schema() {
        let prompt = PromptTemplate::builtin().render(&marked_idea());
        assert!(prompt.starts_with("You are an expert startup analyst."));
        assert!(prompt.contains("\"executiveOverview\""));
        assert!(prompt.contains("\"finalNote\": \"string\""));
        assert!(prompt.trim_end().ends_with("Return only valid JSON."));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_builtin_lists_fields_by_label() {
        let prompt = PromptTemplate::builtin().render(&marked_idea());
        assert!(prompt.contains("Startup Details:\n- Name: Acme-NAME-01\n- Industry: Industry-02\n"));
        assert!(prompt.contains("- Problem Solved: Problem-05\n"));
        assert!(prompt.contains("- Experience: Experience-10\n\nSchema:\n"));
    }

    #[test]
    fn test_missing_fields_render_not_specified() {
        let idea = IdeaSubmission { business_name: "Solo".into(), ..Default::default() };
        let prompt = PromptTemplate::builtin().render(&idea);
        assert!(prompt.contains("- Industry: Not specified"));
        assert!(!prompt.contains("undefined"));
    }

    #[test]
    fn test_values_with_placeholder_syntax_are_literal() {
        let idea = IdeaSubmission {
            business_name: "{{INDUSTRY}}".into(),
            industry: Some("Fintech".into()),
            ..Default::default()
        };
        let prompt = PromptTemplate::builtin().render(&idea);
        assert!(prompt.contains("- Name: {{INDUSTRY}}"));
        assert_eq!(prompt.matches("Fintech").count(), 1);
    }

    #[test]
    fn test_custom_template_requires_business_name() {
        assert!(PromptTemplate::from_source("Rate {{INDUSTRY}}").is_err());
        assert!(PromptTemplate::from_source("Rate {{BUSINESS_NAME}}").is_ok());
    }

    #[test]
    fn test_custom_template_rejects_duplicates() {
        let err = PromptTemplate::from_source("{{BUSINESS_NAME}} and {{BUSINESS_NAME}}").unwrap_err();
        assert!(matches!(err, IdeafyError::Prompt(_)));
    }

    #[test]
    fn test_unknown_placeholders_left_in_place() {
        let template = PromptTemplate::from_source("{{BUSINESS_NAME}} {{MOOD}}").unwrap();
        let idea = IdeaSubmission { business_name: "Acme".into(), ..Default::default() };
        assert_eq!(template.render(&idea), "Acme {{MOOD}}");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.txt");
        fs::write(&path, "Assess {{BUSINESS_NAME}}.\n{{REPORT_SCHEMA}}").unwrap();

        let template = PromptTemplate::load(&path).unwrap();
        let idea = IdeaSubmission { business_name: "Acme".into(), ..Default::default() };
        let prompt = template.render(&idea);
        assert!(prompt.starts_with("Assess Acme."));
        assert!(prompt.contains("\"recommendations\""));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PromptTemplate::load(&dir.path().join("nope.txt")).is_err());
    }
}
