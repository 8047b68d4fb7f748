//! Error types for the loan API client.
//!
//! # Design
//! Every non-2xx response collapses into `HttpStatus` with only the numeric
//! code; client and server errors are not distinguished and the body is
//! never inspected. Network failures are not represented here: they belong
//! to the transport and surface through `CallError::Transport` untouched.

use std::fmt;

/// Errors returned by `LoanClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a status outside 200..=299.
    HttpStatus { status: u16 },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl ApiError {
    /// The HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::HttpStatus { status } => write!(f, "HTTP error! status: {status}"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
