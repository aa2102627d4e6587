//! Contacts API Routes
//!
//! - /contacts/:contact_id - loader (GET) and favourite action (POST)
//! - /contacts/:contact_id/edit - edit action
//! - /contacts/:contact_id/destroy - destroy action

pub mod contact;
pub mod swagger;

use axum::http::StatusCode;
use contacts::DomainError;

/// Map a domain failure onto the HTTP boundary
pub fn into_http_error(err: DomainError) -> (StatusCode, String) {
    match err {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        DomainError::MissingParameter(_) => {
            tracing::error!("{}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        DomainError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_body_is_literal_message() {
        let (status, body) = into_http_error(DomainError::not_found("xyz"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "No contact found for xyz");
    }

    #[test]
    fn test_missing_parameter_is_server_error() {
        let (status, body) = into_http_error(DomainError::MissingParameter("contactId"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Missing contactId parameter");
    }

    #[test]
    fn test_repository_error_propagates_text() {
        let (status, body) = into_http_error(DomainError::Repository("pool timed out".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Repository error: pool timed out");
    }
}
