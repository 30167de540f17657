//! # CLI Errors
//!
//! Error types for CLI commands. A failure envelope from the server becomes
//! `OperationFailed`, carrying the server's message verbatim.

use thiserror::Error;

use crate::client::ClientError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// Seed file could not be read, parsed, or validated
    #[error("seed error: {0}")]
    Seed(String),

    /// Async runtime could not be created
    #[error("runtime error: {0}")]
    Runtime(String),

    /// Server failed to bind or serve
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// Request could not be sent or decoded
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A command argument failed local validation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The server reported a failure envelope
    #[error("{0}")]
    OperationFailed(String),
}
