//! # Search Parameter Parsing
//!
//! Translates the raw query string of `GET /books` into a page number and a
//! composed [`BookQuery`].

use std::collections::HashMap;

use crate::filter::parse_year_filter;
use crate::query::BookQuery;

use super::errors::{ApiError, ApiResult};

/// Parsed search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// 1-based requested page
    pub page: usize,

    /// Composed filter query
    pub query: BookQuery,
}

impl SearchParams {
    /// Parse search parameters from decoded query pairs.
    ///
    /// Absent or empty terms are skipped entirely; a malformed non-empty
    /// `publish_year` is rejected rather than silently matched with
    /// undefined bounds.
    pub fn from_query(params: &HashMap<String, String>) -> ApiResult<Self> {
        let page = parse_page(params.get("page"))?;

        let mut query = BookQuery::new();
        if let Some(term) = params.get("title") {
            query = query.with_title(term);
        }
        if let Some(term) = params.get("author") {
            query = query.with_author(term);
        }
        if let Some(term) = params.get("description") {
            query = query.with_description(term);
        }
        if let Some(expr) = params.get("publish_year") {
            if let Some(filter) = parse_year_filter(expr)? {
                query = query.with_year(filter);
            }
        }

        Ok(Self { page, query })
    }
}

/// Parse the page parameter; absent or empty means the first page
fn parse_page(raw: Option<&String>) -> ApiResult<usize> {
    let raw = match raw {
        None => return Ok(1),
        Some(r) if r.trim().is_empty() => return Ok(1),
        Some(r) => r.trim(),
    };

    let page: usize = raw
        .parse()
        .map_err(|_| ApiError::InvalidQueryParam(format!("page must be a positive integer, got {:?}", raw)))?;

    // Page 0 navigates to the first page rather than erroring
    Ok(page.max(1))
}
