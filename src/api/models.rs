use serde::{Deserialize, Serialize};

pub const REPORT_FAILURE_MESSAGE: &str = "Failed to generate report";
pub const INVALID_SUBMISSION_MESSAGE: &str = "Invalid submission";

/// JSON body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
