//! Error types.
//!
//! The integration itself raises nothing while configuring or starting a
//! client. These cover the adapters handed to the client library and
//! loading options from JSON.

use thiserror::Error;

/// Failure reported by a transport adapter to the client library.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("socket error: {0}")]
    Socket(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure loading [`EwdParams`](crate::EwdParams) from a config document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid EWD options: {0}")]
    Json(#[from] serde_json::Error),
}
