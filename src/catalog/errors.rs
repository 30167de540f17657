//! # Catalog Errors
//!
//! Error types for catalog operations.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
///
/// Every variant is caught at the operation boundary and converted into a
/// failure envelope; none propagate to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A malformed or missing required field on create/update
    #[error("validation failed: {0}")]
    Validation(String),

    /// The id does not resolve to a record
    #[error("book {0} not found")]
    NotFound(u64),

    /// Underlying store failure
    #[error("store error: {0}")]
    Store(String),
}

impl CatalogError {
    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        CatalogError::Validation(reason.into())
    }
}
