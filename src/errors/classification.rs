use axum::http::StatusCode;

use super::types::IdeafyError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub status: StatusCode,
}

impl IdeafyError {
    /// Classify this error into a stable kind tag and the HTTP status it maps to.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            IdeafyError::InvalidSubmission(_) => ErrorClassification {
                error_type: "invalid_submission",
                status: StatusCode::BAD_REQUEST,
            },
            IdeafyError::Upstream(_) => ErrorClassification {
                error_type: "upstream",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            IdeafyError::MalformedResponse(_) => ErrorClassification {
                error_type: "malformed_response",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            IdeafyError::Authentication(_) => ErrorClassification {
                error_type: "authentication",
                status: StatusCode::UNAUTHORIZED,
            },
            IdeafyError::Config(_) => ErrorClassification {
                error_type: "config",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            IdeafyError::RateLimit(_) => ErrorClassification {
                error_type: "rate_limit",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            IdeafyError::LLMApi(_) | IdeafyError::Network(_) => ErrorClassification {
                error_type: "upstream",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            IdeafyError::Prompt(_) => ErrorClassification {
                error_type: "prompt",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            IdeafyError::Io(_)
            | IdeafyError::Json(_)
            | IdeafyError::Yaml(_)
            | IdeafyError::Internal(_) => ErrorClassification {
                error_type: "internal",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            IdeafyError::Config(_) => 2,
            IdeafyError::Authentication(_) => 4,
            IdeafyError::InvalidSubmission(_) => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_and_malformed_are_distinct_kinds() {
        let up = IdeafyError::Upstream("connection refused".into()).classify();
        let bad = IdeafyError::MalformedResponse("not json".into()).classify();
        assert_eq!(up.error_type, "upstream");
        assert_eq!(bad.error_type, "malformed_response");
        assert_eq!(up.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(bad.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_submission_is_bad_request() {
        let class = IdeafyError::InvalidSubmission("businessName is required".into()).classify();
        assert_eq!(class.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_is_unauthorized() {
        let class = IdeafyError::Authentication("Invalid API token".into()).classify();
        assert_eq!(class.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(IdeafyError::Config("x".into()).exit_code(), 2);
        assert_eq!(IdeafyError::Authentication("x".into()).exit_code(), 4);
        assert_eq!(IdeafyError::InvalidSubmission("x".into()).exit_code(), 5);
        assert_eq!(IdeafyError::Network("x".into()).exit_code(), 1);
    }
}
