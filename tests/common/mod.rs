//! Shared helpers for HTTP contract tests
//!
//! Every test drives the real router via `tower::ServiceExt::oneshot`; no
//! network listener is involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use bibliodb::api::{CatalogServer, Envelope, ServerConfig};
use bibliodb::catalog::{Book, MemoryStore};
use bibliodb::query::Page;

/// Router over a fresh, empty store
pub fn test_router() -> Router {
    CatalogServer::new(Arc::new(MemoryStore::new()), ServerConfig::default()).router()
}

/// Send a request, returning the status and decoded JSON body
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

/// GET a path
pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

/// POST a JSON body
pub async fn post_json(router: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

/// Create a book and return it, asserting success
pub async fn create_book(
    router: &Router,
    title: &str,
    author: &str,
    year: u32,
    description: Option<&str>,
) -> Book {
    let payload = json!({
        "title": title,
        "author": author,
        "publish_year": year,
        "description": description,
    });
    let (status, body) = post_json(router, "/books", &payload).await;
    assert_eq!(status, StatusCode::CREATED);

    let envelope: Envelope<Book> = serde_json::from_value(body).unwrap();
    assert!(envelope.success, "create failed: {}", envelope.message);
    envelope.data.unwrap()
}

/// Run a search and decode the envelope
pub async fn search_page(router: &Router, query: &str) -> Envelope<Page> {
    let uri = if query.is_empty() {
        "/books".to_string()
    } else {
        format!("/books?{}", query)
    };
    let (_, body) = get(router, &uri).await;
    serde_json::from_value(body).unwrap()
}
