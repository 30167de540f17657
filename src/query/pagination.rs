//! # Pagination Engine
//!
//! Executes a composed query against the store, orders matches newest-first,
//! and slices them into fixed-size pages.
//!
//! `last_page` never drops below 1, even with zero matches, so navigation
//! controls never divide by zero. A requested page beyond `last_page` returns
//! an empty item list rather than failing: with concurrent deletes a page
//! that existed at request time may be gone by execution time, and that is
//! accepted behavior.

use serde::{Deserialize, Serialize};

use crate::catalog::{Book, BookStore, CatalogResult};

use super::builder::BookQuery;

/// Fixed page size, constant across the deployment
pub const ITEMS_PER_PAGE: usize = 5;

/// One page of results plus pagination metadata
///
/// Serialized field names are the wire contract consumed by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub data: Vec<Book>,
    pub current_page: usize,
    pub last_page: usize,
    pub per_page: usize,
    pub total: usize,
}

/// Run a query and return the requested page.
///
/// Pages are 1-based; a requested page of 0 is treated as 1. Matches are
/// ordered newest-first (descending id, ids being the creation sequence),
/// which keeps repeated identical queries deterministic while the underlying
/// data is unchanged.
pub fn paginate(
    store: &dyn BookStore,
    query: &BookQuery,
    requested_page: usize,
) -> CatalogResult<Page> {
    let mut matches = store.search(query)?;
    matches.sort_unstable_by(|a, b| b.id.cmp(&a.id));

    let current_page = requested_page.max(1);
    let total = matches.len();
    let last_page = total.div_ceil(ITEMS_PER_PAGE).max(1);

    let data: Vec<Book> = matches
        .into_iter()
        .skip((current_page - 1).saturating_mul(ITEMS_PER_PAGE))
        .take(ITEMS_PER_PAGE)
        .collect();

    Ok(Page {
        data,
        current_page,
        last_page,
        per_page: ITEMS_PER_PAGE,
        total,
    })
}
