//! Structured REST error value.
//!
//! A [`RestError`] carries four things:
//! - a human-readable message,
//! - the HTTP status code a handler should answer with,
//! - a short machine-readable error code (see [`crate::codes`]),
//! - the display strings of the errors that caused it.
//!
//! Its display form is
//! `message: {message} - status: {status} - error: {error_code} - cause: [{causes}]`
//! with the causes joined by `", "`.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::codes;

/// RestErr is the read-only capability every structured error exposes.
///
/// HTTP handler layers read `status()` to pick the response code and
/// `message()` or `code_or_display()` to build the body.
pub trait RestErr: std::error::Error + Send + Sync {
    fn message(&self) -> &str;

    fn status(&self) -> u16;

    fn error_code(&self) -> &str;

    fn causes(&self) -> &[String];

    /// Diagnostic string combining every field.
    fn code_or_display(&self) -> String {
        self.to_string()
    }
}

/// RestError is the single concrete structured error.
///
/// Values are immutable once built; use the functions in [`crate::factory`]
/// to create them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error(
    "message: {message} - status: {status} - error: {error_code} - cause: [{}]",
    .causes.join(", ")
)]
pub struct RestError {
    message: String,
    status: u16,
    #[serde(rename = "error")]
    error_code: String,
    #[serde(default)]
    causes: Vec<String>,
}

impl RestError {
    pub(crate) fn new(
        message: impl Into<String>,
        status: u16,
        error_code: impl Into<String>,
        causes: Vec<String>,
    ) -> Self {
        Self {
            message: message.into(),
            status,
            error_code: error_code.into(),
            causes,
        }
    }

    /// Typed status, or `None` when the number is not a valid HTTP status.
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    /// Whether the status is valid and agrees with a well-known error code.
    ///
    /// Codes outside [`crate::codes`] only need a valid status.
    pub fn is_consistent(&self) -> bool {
        match (self.status_code(), codes::status_for(&self.error_code)) {
            (None, _) => false,
            (Some(actual), Some(expected)) => actual == expected,
            (Some(_), None) => true,
        }
    }

    pub fn into_boxed(self) -> Box<dyn RestErr> {
        Box::new(self)
    }
}

impl RestErr for RestError {
    fn message(&self) -> &str {
        &self.message
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn error_code(&self) -> &str {
        &self.error_code
    }

    fn causes(&self) -> &[String] {
        &self.causes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(causes: Vec<String>) -> RestError {
        RestError::new("db down", 500, codes::INTERNAL_SERVER_ERROR, causes)
    }

    #[test]
    fn test_display_without_causes() {
        let err = RestError::new("bad input", 400, codes::BAD_REQUEST, vec![]);
        assert_eq!(
            err.to_string(),
            "message: bad input - status: 400 - error: bad_request - cause: []"
        );
    }

    #[test]
    fn test_display_joins_causes() {
        let err = sample(vec!["timeout".to_string(), "connection reset".to_string()]);
        assert_eq!(
            err.code_or_display(),
            "message: db down - status: 500 - error: internal_server_error - cause: [timeout, connection reset]"
        );
    }

    #[test]
    fn test_code_or_display_matches_display() {
        let err = sample(vec!["boom".to_string()]);
        assert_eq!(err.code_or_display(), format!("{err}"));
    }

    #[test]
    fn test_status_code_valid_and_invalid() {
        assert_eq!(sample(vec![]).status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));

        let err = RestError::new("weird", 42, "custom", vec![]);
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_is_consistent() {
        assert!(sample(vec![]).is_consistent());
        // unknown code with a valid status
        assert!(RestError::new("gone", 410, "gone", vec![]).is_consistent());
        // well-known code with the wrong status
        assert!(!RestError::new("nope", 500, codes::NOT_FOUND, vec![]).is_consistent());
        // invalid status
        assert!(!RestError::new("weird", 42, "custom", vec![]).is_consistent());
    }

    #[test]
    fn test_into_boxed_keeps_fields() {
        let boxed = sample(vec!["boom".to_string()]).into_boxed();
        assert_eq!(boxed.message(), "db down");
        assert_eq!(boxed.status(), 500);
        assert_eq!(boxed.error_code(), codes::INTERNAL_SERVER_ERROR);
        assert_eq!(boxed.causes(), ["boom".to_string()]);
    }
}
