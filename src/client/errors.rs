//! # Client Errors
//!
//! Error types for the HTTP client. Server-reported failures are not errors
//! here; they arrive as failure envelopes and are the caller's to interpret.

use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not a valid envelope
    #[error("malformed server response: {0}")]
    Decode(#[from] serde_json::Error),
}
