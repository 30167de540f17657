//! # API Errors
//!
//! Error types for the HTTP surface. Every variant renders as a failure
//! envelope; nothing propagates to the transport layer unconverted.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::filter::ParseError;

use super::envelope::Envelope;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Validation, not-found, or store failure from the catalog
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Malformed publish-year filter expression
    #[error("invalid publish year filter: {0}")]
    Filter(#[from] ParseError),

    /// Malformed query parameter (e.g. a non-numeric page)
    #[error("invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Path id segment that is not a valid record id
    #[error("invalid book id: {0:?}")]
    InvalidBookId(String),
}

impl ApiError {
    /// Conventional HTTP status for this error; the envelope in the body is
    /// the actual contract
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Catalog(CatalogError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Filter(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBookId(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(Envelope::<Value>::failure(self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Catalog(CatalogError::validation("title is required")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Catalog(CatalogError::NotFound(7)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Catalog(CatalogError::Store("lock poisoned".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Filter(ParseError::UnrecognizedFilter("abc".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages_explain_the_cause() {
        let err = ApiError::Filter(ParseError::UnrecognizedFilter("abc".to_string()));
        assert_eq!(
            err.to_string(),
            "invalid publish year filter: unrecognized year filter: \"abc\""
        );

        let err = ApiError::Catalog(CatalogError::NotFound(7));
        assert_eq!(err.to_string(), "book 7 not found");
    }
}
