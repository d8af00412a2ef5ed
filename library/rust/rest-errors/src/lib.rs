//! k1s0-rest-errors: structured, HTTP-status-aware error values.
//!
//! Every error carries a message, an HTTP status, a machine-readable error
//! code and the display strings of its causes. Factory functions cover the
//! common categories (bad request, not found, unauthorized, internal server
//! error).

pub mod codes;
pub mod error;
pub mod factory;

pub use error::{RestErr, RestError};
pub use factory::{
    new_bad_request_error, new_generic_error, new_internal_server_error, new_not_found_error,
    new_rest_error, new_unauthorized_error,
};
