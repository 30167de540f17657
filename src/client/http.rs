//! # HTTP Client
//!
//! Thin typed client over the catalog's wire contract. The envelope is
//! present in the response body even on error statuses, so decoding ignores
//! the status code entirely.
//!
//! No timeout or retry policy is applied here; overlapping refreshes resolve
//! last-writer-wins in the caller's state.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::Envelope;
use crate::catalog::Book;
use crate::query::Page;

use super::errors::ClientResult;

/// Typed client for a running catalog server
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL, e.g. `http://127.0.0.1:8000`
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    fn books_url(&self, page: usize, query: &str) -> String {
        if query.is_empty() {
            format!("{}/books?page={}", self.base, page)
        } else {
            format!("{}/books?page={}&{}", self.base, page, query)
        }
    }

    fn book_url(&self, id: u64) -> String {
        format!("{}/books/{}", self.base, id)
    }

    /// Fetch one page of filtered results
    pub async fn search(&self, page: usize, query: &str) -> ClientResult<Envelope<Page>> {
        let response = self.http.get(self.books_url(page, query)).send().await?;
        decode(response).await
    }

    /// Fetch a single record by id
    pub async fn fetch(&self, id: u64) -> ClientResult<Envelope<Book>> {
        let response = self.http.get(self.book_url(id)).send().await?;
        decode(response).await
    }

    /// Create a record
    pub async fn create(&self, payload: &Value) -> ClientResult<Envelope<Book>> {
        let response = self
            .http
            .post(format!("{}/books", self.base))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    /// Update a record
    pub async fn update(&self, id: u64, payload: &Value) -> ClientResult<Envelope<Book>> {
        let response = self
            .http
            .put(self.book_url(id))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete a record; the envelope carries the pre-deletion snapshot
    pub async fn delete(&self, id: u64) -> ClientResult<Envelope<Book>> {
        let response = self.http.delete(self.book_url(id)).send().await?;
        decode(response).await
    }
}

/// Decode an envelope from the response body, whatever the status
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<Envelope<T>> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
