//! Well-known error codes.
//!
//! Each code is a short snake_case category string paired with the HTTP
//! status the factory functions assign to it.

use http::StatusCode;

pub const BAD_REQUEST: &str = "bad_request";
pub const NOT_FOUND: &str = "not_found";
pub const UNAUTHORIZED: &str = "unauthorized";
pub const INTERNAL_SERVER_ERROR: &str = "internal_server_error";

/// Message carried by every unauthorized error, whatever the caller passed in.
pub const UNAUTHORIZED_MESSAGE: &str =
    "unable to retrieve user information from given access_token";

/// Return the HTTP status for a well-known error code.
///
/// Unknown codes yield `None`; callers are free to pair them with any status.
pub fn status_for(code: &str) -> Option<StatusCode> {
    match code {
        BAD_REQUEST => Some(StatusCode::BAD_REQUEST),
        NOT_FOUND => Some(StatusCode::NOT_FOUND),
        UNAUTHORIZED => Some(StatusCode::UNAUTHORIZED),
        INTERNAL_SERVER_ERROR => Some(StatusCode::INTERNAL_SERVER_ERROR),
        _ => None,
    }
}
