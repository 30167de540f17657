//! # Record Store
//!
//! Abstract persistence collaborator for the catalog. Implementations must
//! support substring, comparison, and range matching over book fields; the
//! composed [`BookQuery`] carries those predicates.

use super::book::{Book, BookDraft};
use super::errors::CatalogResult;
use crate::query::BookQuery;

/// Store trait for book records
///
/// Each single-record mutation is atomic at the store level; no multi-record
/// transactions are required.
pub trait BookStore: Send + Sync {
    /// Insert a new record, assigning its id
    fn insert(&self, draft: BookDraft) -> CatalogResult<Book>;

    /// Replace the fields of an existing record
    ///
    /// Fails with `NotFound` if the id does not resolve.
    fn update(&self, id: u64, draft: BookDraft) -> CatalogResult<Book>;

    /// Remove a record, returning the pre-deletion snapshot
    ///
    /// Fails with `NotFound` if the id does not resolve.
    fn delete(&self, id: u64) -> CatalogResult<Book>;

    /// Look up a record by id; absence is not an error here
    fn find(&self, id: u64) -> CatalogResult<Option<Book>>;

    /// Return every record matching the query, in store order
    fn search(&self, query: &BookQuery) -> CatalogResult<Vec<Book>>;
}
