//! # In-Memory Store
//!
//! The default [`BookStore`] implementation: a `RwLock`-guarded vector with a
//! monotonically increasing id sequence.

use std::sync::RwLock;

use super::book::{Book, BookDraft};
use super::errors::{CatalogError, CatalogResult};
use super::store::BookStore;
use crate::query::BookQuery;

/// Store contents behind the lock
struct Inner {
    books: Vec<Book>,
    next_id: u64,
}

/// In-memory book store
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                books: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Total number of records, ignoring any filter
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.books.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore for MemoryStore {
    fn insert(&self, draft: BookDraft) -> CatalogResult<Book> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| CatalogError::Store("lock poisoned".to_string()))?;

        let id = inner.next_id;
        inner.next_id += 1;

        let book = draft.into_book(id);
        inner.books.push(book.clone());
        Ok(book)
    }

    fn update(&self, id: u64, draft: BookDraft) -> CatalogResult<Book> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| CatalogError::Store("lock poisoned".to_string()))?;

        let book = inner
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        book.title = draft.title;
        book.author = draft.author;
        book.publish_year = draft.publish_year;
        book.description = draft.description;
        Ok(book.clone())
    }

    fn delete(&self, id: u64) -> CatalogResult<Book> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| CatalogError::Store("lock poisoned".to_string()))?;

        let idx = inner
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        Ok(inner.books.remove(idx))
    }

    fn find(&self, id: u64) -> CatalogResult<Option<Book>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| CatalogError::Store("lock poisoned".to_string()))?;

        Ok(inner.books.iter().find(|b| b.id == id).cloned())
    }

    fn search(&self, query: &BookQuery) -> CatalogResult<Vec<Book>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| CatalogError::Store("lock poisoned".to_string()))?;

        Ok(inner
            .books
            .iter()
            .filter(|b| query.matches(b))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, year: u32) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "Author".to_string(),
            publish_year: year,
            description: None,
        }
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.insert(draft("A", 1990)).unwrap();
        let b = store.insert(draft("B", 1991)).unwrap();
        assert!(b.id > a.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_returns_option() {
        let store = MemoryStore::new();
        let a = store.insert(draft("A", 1990)).unwrap();

        assert_eq!(store.find(a.id).unwrap(), Some(a));
        assert_eq!(store.find(9999).unwrap(), None);
    }

    #[test]
    fn test_update_replaces_fields() {
        let store = MemoryStore::new();
        let a = store.insert(draft("A", 1990)).unwrap();

        let updated = store.update(a.id, draft("A2", 1995)).unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.publish_year, 1995);

        // Persisted, not just returned
        assert_eq!(store.find(a.id).unwrap().unwrap().title, "A2");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = store.update(42, draft("A", 1990)).unwrap_err();
        assert_eq!(err, CatalogError::NotFound(42));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_returns_snapshot() {
        let store = MemoryStore::new();
        let a = store.insert(draft("A", 1990)).unwrap();

        let removed = store.delete(a.id).unwrap();
        assert_eq!(removed, a);
        assert_eq!(store.find(a.id).unwrap(), None);

        let err = store.delete(a.id).unwrap_err();
        assert_eq!(err, CatalogError::NotFound(a.id));
    }

    #[test]
    fn test_search_applies_query() {
        let store = MemoryStore::new();
        store.insert(draft("Dune", 1965)).unwrap();
        store.insert(draft("Neuromancer", 1984)).unwrap();

        let query = BookQuery::new().with_title("dune");
        let results = store.search(&query).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Dune");
    }
}
