//! Error types for the user API client.
//!
//! # Design
//! A wrong status code is reported with the full status line so the message
//! reads the same whatever the code was. Transport failures pass through
//! untouched: the message a caller sees is the network layer's own.

use thiserror::Error;

use crate::http::reason_phrase;
use crate::transport::TransportError;

/// Errors returned by `UserClient` operations and `UserEndpoints` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built, every send attempt failed, or the
    /// response body could not be read.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A response arrived with a status other than the operation's success code.
    #[error("unexpected status: {}", status_line(*.status))]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into a `User`.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl ApiError {
    /// Status code of an `UnexpectedStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// "404 Not Found", or just "599" when the code has no canonical reason.
pub fn status_line(status: u16) -> String {
    match reason_phrase(status) {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}

/// Result type for user API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
