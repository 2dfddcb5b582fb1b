use axum::{response::IntoResponse, Json};
use crate::api::models::{ErrorResponse, INVALID_SUBMISSION_MESSAGE, REPORT_FAILURE_MESSAGE};
use crate::errors::IdeafyError;

impl IntoResponse for IdeafyError {
    fn into_response(self) -> axum::response::Response {
        let class = self.classify();
        let body = match &self {
            IdeafyError::InvalidSubmission(_) => ErrorResponse {
                error: INVALID_SUBMISSION_MESSAGE.to_string(),
                kind: Some(class.error_type.to_string()),
                details: Some(self.detail()),
            },
            IdeafyError::Upstream(_) | IdeafyError::MalformedResponse(_) => ErrorResponse {
                error: REPORT_FAILURE_MESSAGE.to_string(),
                kind: Some(class.error_type.to_string()),
                details: Some(self.detail()),
            },
            IdeafyError::Authentication(_) => ErrorResponse {
                error: self.detail(),
                kind: None,
                details: None,
            },
            _ => ErrorResponse {
                error: "Internal server error".to_string(),
                kind: Some(class.error_type.to_string()),
                details: Some(self.detail()),
            },
        };

        (class.status, Json(body)).into_response()
    }
}
