//! # Filter Parse Errors
//!
//! Error types for the year-filter parser.

use thiserror::Error;

/// Result type for filter parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Year-filter parse errors
///
/// An empty or whitespace-only input is not an error; it parses to "no
/// filter". Only genuinely malformed non-empty input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not match the year-filter grammar
    #[error("unrecognized year filter: {0:?}")]
    UnrecognizedFilter(String),

    /// A numeric component does not fit in a year
    #[error("year value out of range: {0:?}")]
    YearOutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::UnrecognizedFilter("Range".to_string());
        assert_eq!(err.to_string(), "unrecognized year filter: \"Range\"");

        let err = ParseError::YearOutOfRange("99999999999".to_string());
        assert_eq!(err.to_string(), "year value out of range: \"99999999999\"");
    }
}
