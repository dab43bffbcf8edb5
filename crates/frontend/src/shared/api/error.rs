use contracts::shared::ValidationProblem;
use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never got a response (offline, CORS, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("Server returned HTTP {status}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Field-level validation report carried in an error response, if any
    pub fn validation_problem(&self) -> Option<ValidationProblem> {
        match self {
            ApiError::Status { body, .. } => ValidationProblem::from_body(body),
            _ => None,
        }
    }

    /// Validation messages joined with ", ", falling back to `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.validation_problem()
            .map(|p| p.joined_messages())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_validation_errors() {
        let err = ApiError::Status {
            status: 400,
            body: r#"{"title":"One or more validation errors occurred.","errors":{"Email":["The Email field is not a valid e-mail address."],"FullName":["The FullName field is required."]}}"#.into(),
        };
        assert_eq!(
            err.user_message("Failed"),
            "The Email field is not a valid e-mail address., The FullName field is required."
        );
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message("Failed to update employee"), "Failed to update employee");

        let err = ApiError::Status { status: 500, body: "boom".into() };
        assert_eq!(err.user_message("Failed"), "Failed");
    }
}
