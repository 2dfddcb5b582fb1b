use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::IdeafyError;

/// The generated evaluation, as returned by the report service.
///
/// Every section is optional: the model is trusted to follow the requested
/// schema, but a missing or unreadable section only blanks that one view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupReport {
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub executive_overview: Option<ExecutiveOverview>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub financials: Option<Financials>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub market_competition: Option<MarketCompetition>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub product_validation: Option<ProductValidation>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
}

impl StartupReport {
    /// Read a report from a parsed model reply. The reply must be a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, IdeafyError> {
        ensure_report_object(value)?;
        serde_json::from_value(value.clone())
            .map_err(|e| IdeafyError::MalformedResponse(format!("unreadable report: {}", e)))
    }

    /// Number of the five sections that are present.
    pub fn section_count(&self) -> usize {
        [
            self.executive_overview.is_some(),
            self.financials.is_some(),
            self.market_competition.is_some(),
            self.product_validation.is_some(),
            self.recommendations.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Reject replies that parsed as JSON but are not report-shaped objects.
pub fn ensure_report_object(value: &Value) -> Result<(), IdeafyError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(IdeafyError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            match value {
                Value::Array(_) => "an array",
                Value::String(_) => "a string",
                Value::Number(_) => "a number",
                Value::Bool(_) => "a boolean",
                _ => "null",
            }
        )))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    #[serde(deserialize_with = "text")]
    pub label: String,
    #[serde(deserialize_with = "text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutiveOverview {
    #[serde(deserialize_with = "text")]
    pub summary: String,
    #[serde(deserialize_with = "list")]
    pub metrics: Vec<Metric>,
    #[serde(deserialize_with = "list")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenuePoint {
    #[serde(deserialize_with = "text")]
    pub year: String,
    #[serde(rename = "Revenue", deserialize_with = "number")]
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Financials {
    #[serde(deserialize_with = "text")]
    pub summary: String,
    #[serde(deserialize_with = "list")]
    pub revenue: Vec<RevenuePoint>,
    #[serde(deserialize_with = "list")]
    pub kpis: Vec<Metric>,
    #[serde(deserialize_with = "list")]
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketShare {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "number")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Competitor {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarPoint {
    #[serde(deserialize_with = "text")]
    pub aspect: String,
    #[serde(rename = "You", deserialize_with = "number")]
    pub you: Option<f64>,
    #[serde(rename = "Competitors", deserialize_with = "number")]
    pub competitors: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketCompetition {
    #[serde(deserialize_with = "text")]
    pub summary: String,
    #[serde(deserialize_with = "list")]
    pub stats: Vec<MarketShare>,
    #[serde(deserialize_with = "list")]
    pub drivers: Vec<String>,
    #[serde(deserialize_with = "list")]
    pub competitors: Vec<Competitor>,
    #[serde(deserialize_with = "list")]
    pub radar: Vec<RadarPoint>,
    #[serde(deserialize_with = "list")]
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendPoint {
    #[serde(deserialize_with = "text")]
    pub month: String,
    #[serde(rename = "MVP", deserialize_with = "number")]
    pub mvp: Option<f64>,
    #[serde(rename = "Advanced", deserialize_with = "number")]
    pub advanced: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductValidation {
    #[serde(deserialize_with = "text")]
    pub summary: String,
    #[serde(deserialize_with = "list")]
    pub metrics: Vec<Metric>,
    #[serde(deserialize_with = "list")]
    pub trends: Vec<TrendPoint>,
    #[serde(deserialize_with = "list")]
    pub feedback: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "list")]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Risk {
    #[serde(deserialize_with = "text")]
    pub risk: String,
    #[serde(deserialize_with = "text")]
    pub mitigation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recommendations {
    #[serde(deserialize_with = "text")]
    pub summary: String,
    #[serde(deserialize_with = "list")]
    pub actions: Vec<Action>,
    #[serde(deserialize_with = "list")]
    pub risks: Vec<Risk>,
    #[serde(deserialize_with = "text")]
    pub final_note: String,
}

// Lenient readers: the model's output is loosely typed, so each reader
// accepts whatever it can use and drops the rest instead of failing the
// whole report.

fn section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s
            .trim()
            .trim_start_matches('$')
            .replace(',', "")
            .parse::<f64>()
            .ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_report_parses() {
        let report = StartupReport::from_value(&json!({
            "executiveOverview": {
                "summary": "Strong niche",
                "metrics": [{"label": "Score", "value": "82/100"}],
                "highlights": ["Clear pain point"]
            },
            "financials": {
                "summary": "Lean",
                "revenue": [{"year": "Year 1", "Revenue": 120000}],
                "kpis": [{"label": "CAC", "value": "$40"}],
                "insights": []
            },
            "marketCompetition": {
                "summary": "Crowded",
                "stats": [{"name": "Competitor A", "value": 40}],
                "drivers": ["Remote work"],
                "competitors": [{"name": "FreshBooks", "detail": "Incumbent"}],
                "radar": [{"aspect": "Pricing", "You": 8, "Competitors": 6}],
                "insights": ["Price on value"]
            },
            "productValidation": {
                "summary": "Promising",
                "metrics": [],
                "trends": [{"month": "Jan", "MVP": 10, "Advanced": 2}],
                "feedback": ["Love the reminders"]
            },
            "recommendations": {
                "summary": "Go",
                "actions": [{"title": "Launch beta", "tasks": ["Recruit 20 users"]}],
                "risks": [{"risk": "Churn", "mitigation": "Annual plans"}],
                "finalNote": "Worth pursuing"
            }
        }))
        .unwrap();

        assert_eq!(report.section_count(), 5);
        let fin = report.financials.as_ref().unwrap();
        assert_eq!(fin.revenue[0].revenue, Some(120000.0));
        let market = report.market_competition.as_ref().unwrap();
        assert_eq!(market.radar[0].you, Some(8.0));
        assert_eq!(report.recommendations.as_ref().unwrap().final_note, "Worth pursuing");
    }

    #[test]
    fn test_missing_sections_are_none() {
        let report = StartupReport::from_value(&json!({
            "executiveOverview": {"summary": "Only this"}
        }))
        .unwrap();
        assert_eq!(report.section_count(), 1);
        assert!(report.financials.is_none());
        assert!(report.executive_overview.as_ref().unwrap().metrics.is_empty());
    }

    #[test]
    fn test_wrongly_typed_section_is_dropped() {
        let report = StartupReport::from_value(&json!({
            "executiveOverview": "just a string",
            "financials": null
        }))
        .unwrap();
        assert!(report.executive_overview.is_none());
        assert!(report.financials.is_none());
    }

    #[test]
    fn test_numbers_read_leniently() {
        let report = StartupReport::from_value(&json!({
            "financials": {
                "revenue": [
                    {"year": "Year 1", "Revenue": "$1,200"},
                    {"year": "Year 2", "Revenue": "lots"}
                ],
                "kpis": [{"label": "LTV", "value": 300}]
            }
        }))
        .unwrap();
        let fin = report.financials.unwrap();
        assert_eq!(fin.revenue[0].revenue, Some(1200.0));
        assert_eq!(fin.revenue[1].revenue, None);
        assert_eq!(fin.kpis[0].value, "300");
    }

    #[test]
    fn test_bad_list_items_are_skipped() {
        let report = StartupReport::from_value(&json!({
            "recommendations": {
                "actions": [{"title": "Ship", "tasks": ["a"]}, "not an action"],
                "risks": "none"
            }
        }))
        .unwrap();
        let recs = report.recommendations.unwrap();
        assert_eq!(recs.actions.len(), 1);
        assert!(recs.risks.is_empty());
    }

    #[test]
    fn test_non_object_is_malformed() {
        let err = StartupReport::from_value(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, IdeafyError::MalformedResponse(ref m) if m.contains("array")));
    }
}
