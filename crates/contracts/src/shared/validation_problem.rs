use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Validation failure body returned by the backend:
/// `{"title": "...", "errors": {"FullName": ["The FullName field is required."]}}`
///
/// Fields keep the order the backend sent them in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationProblem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub errors: IndexMap<String, Vec<String>>,
}

impl ValidationProblem {
    /// Parse a response body, returning `None` unless it carries a non-empty `errors` map
    pub fn from_body(body: &str) -> Option<Self> {
        let problem: ValidationProblem = serde_json::from_str(body).ok()?;
        if problem.errors.is_empty() {
            None
        } else {
            Some(problem)
        }
    }

    /// All field messages flattened and joined with ", "
    pub fn joined_messages(&self) -> String {
        self.errors
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_flattened() {
        let body = r#"{"title":"One or more validation errors occurred.","errors":{"Email":["Invalid email."],"FullName":["Required.","Too short."]}}"#;
        let problem = ValidationProblem::from_body(body).unwrap();
        assert_eq!(problem.joined_messages(), "Invalid email., Required., Too short.");
    }

    #[test]
    fn test_messages_keep_backend_field_order() {
        let body = r#"{"errors":{"Mobile1":["Invalid mobile."],"Email":["Invalid email."]}}"#;
        let problem = ValidationProblem::from_body(body).unwrap();
        assert_eq!(problem.joined_messages(), "Invalid mobile., Invalid email.");
    }

    #[test]
    fn test_non_problem_bodies() {
        assert!(ValidationProblem::from_body("Internal error").is_none());
        assert!(ValidationProblem::from_body(r#"{"errors":{}}"#).is_none());
    }
}
