use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::IdeafyError;

/// Maximum characters accepted for any single submission field.
pub const MAX_FIELD_CHARS: usize = 4000;

/// Wire name, prompt label, and template placeholder for each idea field,
/// in prompt order.
pub const IDEA_FIELDS: &[IdeaField] = &[
    IdeaField { key: "businessName", label: "Name", placeholder: "BUSINESS_NAME" },
    IdeaField { key: "industry", label: "Industry", placeholder: "INDUSTRY" },
    IdeaField { key: "description", label: "Description", placeholder: "DESCRIPTION" },
    IdeaField { key: "targetMarket", label: "Target Market", placeholder: "TARGET_MARKET" },
    IdeaField { key: "problemSolving", label: "Problem Solved", placeholder: "PROBLEM_SOLVING" },
    IdeaField { key: "uniqueValue", label: "Unique Value", placeholder: "UNIQUE_VALUE" },
    IdeaField { key: "businessModel", label: "Business Model", placeholder: "BUSINESS_MODEL" },
    IdeaField { key: "funding", label: "Funding", placeholder: "FUNDING" },
    IdeaField { key: "timeline", label: "Timeline", placeholder: "TIMELINE" },
    IdeaField { key: "experience", label: "Experience", placeholder: "EXPERIENCE" },
];

#[derive(Debug, Clone, Copy)]
pub struct IdeaField {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// A user's business idea, as submitted for evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaSubmission {
    pub business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_solving: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl IdeaSubmission {
    /// Validate an untrusted JSON payload and build a submission from it.
    ///
    /// The payload must be an object. Known fields must be strings (`null`
    /// counts as absent), `businessName` must be non-blank, and no field may
    /// exceed [`MAX_FIELD_CHARS`]. Unknown fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self, IdeafyError> {
        let obj = value.as_object().ok_or_else(|| {
            IdeafyError::InvalidSubmission("request body must be a JSON object".into())
        })?;

        let mut idea = IdeaSubmission::default();
        for field in IDEA_FIELDS {
            let text = match obj.get(field.key) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(other) => {
                    return Err(IdeafyError::InvalidSubmission(format!(
                        "field '{}' must be a string, got {}",
                        field.key,
                        json_type_name(other)
                    )));
                }
            };

            if let Some(t) = &text {
                if t.chars().count() > MAX_FIELD_CHARS {
                    return Err(IdeafyError::InvalidSubmission(format!(
                        "field '{}' exceeds {} characters",
                        field.key, MAX_FIELD_CHARS
                    )));
                }
            }

            idea.set(field.key, text);
        }

        if idea.business_name.trim().is_empty() {
            return Err(IdeafyError::InvalidSubmission("businessName is required".into()));
        }

        Ok(idea)
    }

    /// Look up a field by its wire name.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "businessName" => Some(self.business_name.as_str()),
            "industry" => self.industry.as_deref(),
            "description" => self.description.as_deref(),
            "targetMarket" => self.target_market.as_deref(),
            "problemSolving" => self.problem_solving.as_deref(),
            "uniqueValue" => self.unique_value.as_deref(),
            "businessModel" => self.business_model.as_deref(),
            "funding" => self.funding.as_deref(),
            "timeline" => self.timeline.as_deref(),
            "experience" => self.experience.as_deref(),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: Option<String>) {
        match key {
            "businessName" => self.business_name = value.unwrap_or_default(),
            "industry" => self.industry = value,
            "description" => self.description = value,
            "targetMarket" => self.target_market = value,
            "problemSolving" => self.problem_solving = value,
            "uniqueValue" => self.unique_value = value,
            "businessModel" => self.business_model = value,
            "funding" => self.funding = value,
            "timeline" => self.timeline = value,
            "experience" => self.experience = value,
            _ => {}
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
