//! Error types for the todo API client.
//!
//! # Design
//! Four flat cases cover the whole taxonomy: the network failing outright,
//! the server answering outside the 2xx range, and serde failing in either
//! direction. There is deliberately no dedicated not-found variant — the one
//! place that cares about absence (the update handler's existence check)
//! collapses every failure to absence, so nothing may branch on 404.

use std::fmt;

/// Errors produced while talking to the todo service.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed: connection refused, DNS failure, timeout.
    Transport(String),

    /// The server returned a non-2xx status.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Http { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {body}")
                }
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
