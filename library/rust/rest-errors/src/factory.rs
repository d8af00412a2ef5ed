//! Factory functions for common HTTP failure categories.

use http::StatusCode;

use crate::codes;
use crate::error::{RestErr, RestError};

/// Create a plain, unstructured error carrying only a message.
pub fn new_generic_error(message: impl Into<String>) -> anyhow::Error {
    anyhow::Error::msg(message.into())
}

/// Create a RestError from all four fields as given.
///
/// A status that is not a valid HTTP status, or that contradicts a
/// well-known error code, is still accepted but logged.
pub fn new_rest_error(
    message: impl Into<String>,
    status: u16,
    error_code: impl Into<String>,
    causes: Vec<String>,
) -> RestError {
    let err = RestError::new(message, status, error_code, causes);
    if !err.is_consistent() {
        tracing::warn!(
            status = status,
            error_code = %err.error_code(),
            "status does not match error code"
        );
    }
    err
}

/// 400 Bad Request
pub fn new_bad_request_error(message: impl Into<String>) -> RestError {
    RestError::new(
        message,
        StatusCode::BAD_REQUEST.as_u16(),
        codes::BAD_REQUEST,
        Vec::new(),
    )
}

/// 404 Not Found
pub fn new_not_found_error(message: impl Into<String>) -> RestError {
    RestError::new(
        message,
        StatusCode::NOT_FOUND.as_u16(),
        codes::NOT_FOUND,
        Vec::new(),
    )
}

/// 401 Unauthorized
///
/// The message is always [`codes::UNAUTHORIZED_MESSAGE`]; the argument is
/// discarded.
pub fn new_unauthorized_error(message: impl Into<String>) -> RestError {
    let discarded = message.into();
    if !discarded.is_empty() {
        tracing::debug!(discarded = %discarded, "unauthorized error uses fixed message");
    }
    RestError::new(
        codes::UNAUTHORIZED_MESSAGE,
        StatusCode::UNAUTHORIZED.as_u16(),
        codes::UNAUTHORIZED,
        Vec::new(),
    )
}

/// 500 Internal Server Error
///
/// When `err` is present its display string becomes the only cause. The
/// error itself is not retained.
pub fn new_internal_server_error(
    message: impl Into<String>,
    err: Option<&dyn std::error::Error>,
) -> RestError {
    let causes = match err {
        Some(err) => {
            let cause = err.to_string();
            tracing::debug!(cause = %cause, "internal server error with cause");
            vec![cause]
        }
        None => Vec::new(),
    };
    RestError::new(
        message,
        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        codes::INTERNAL_SERVER_ERROR,
        causes,
    )
}
