//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required route parameter was not supplied. This is a caller bug,
    /// not a data condition, and must never be reported as `NotFound`.
    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),

    #[error("No contact found for {id}")]
    NotFound { id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(id: T) -> Self {
        Self::NotFound {
            id: id.as_ref().to_string(),
        }
    }

    /// Whether this error describes a missing record rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = DomainError::not_found("abc-123");
        assert_eq!(err.to_string(), "No contact found for abc-123");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_parameter_message() {
        let err = DomainError::MissingParameter("contactId");
        assert_eq!(err.to_string(), "Missing contactId parameter");
        assert!(!err.is_not_found());
    }
}
