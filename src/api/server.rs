//! # Catalog HTTP Server
//!
//! Axum router and handlers for the catalog endpoints.
//!
//! Request bodies are read as raw text and parsed manually so that every
//! failure path, including malformed JSON, converts to a failure envelope
//! instead of a framework rejection.

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::{Book, BookDraft, BookStore, CatalogError};
use crate::query::{paginate, Page};

use super::config::ServerConfig;
use super::envelope::Envelope;
use super::errors::{ApiError, ApiResult};
use super::request::SearchParams;

/// Catalog API server state
pub struct CatalogServer {
    store: Arc<dyn BookStore>,
    config: ServerConfig,
}

/// Shared state type
type ServerState = Arc<CatalogServer>;

impl CatalogServer {
    pub fn new(store: Arc<dyn BookStore>, config: ServerConfig) -> Self {
        Self { store, config }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let cors = build_cors(&self.config);
        let state: ServerState = Arc::new(self);

        Router::new()
            .route("/health", get(health_handler))
            .route("/books", get(search_handler).post(create_handler))
            .route(
                "/books/:id",
                get(get_handler).put(update_handler).delete(delete_handler),
            )
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state)
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid listen address {:?}: {}", self.config.socket_addr(), e),
            )
        })?;

        tracing::info!(%addr, "catalog server listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}

/// Configure CORS from config
fn build_cors(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        // No origins configured: permissive, for development
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Parse a path id segment
fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse()
        .map_err(|_| ApiError::InvalidBookId(raw.to_string()))
}

/// Parse a request body into a validated draft
fn parse_body(raw: &str) -> ApiResult<BookDraft> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|_| CatalogError::validation("request body must be valid JSON"))?;
    Ok(BookDraft::from_json(&value)?)
}

/// Liveness probe
async fn health_handler() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Filtered, paginated search handler
async fn search_handler(
    State(server): State<ServerState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<Page>>, ApiError> {
    let params = SearchParams::from_query(&query)?;
    let page = paginate(server.store.as_ref(), &params.query, params.page)?;

    Ok(Json(Envelope::success("Showing books", page)))
}

/// Single record handler
async fn get_handler(
    State(server): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Book>>, ApiError> {
    let id = parse_id(&id)?;
    let book = server.store.find(id)?.ok_or(CatalogError::NotFound(id))?;

    Ok(Json(Envelope::success("Book found", book)))
}

/// Create handler
async fn create_handler(
    State(server): State<ServerState>,
    body: String,
) -> Result<(StatusCode, Json<Envelope<Book>>), ApiError> {
    let draft = parse_body(&body)?;
    let book = server.store.insert(draft)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success("Book added", book)),
    ))
}

/// Update handler
async fn update_handler(
    State(server): State<ServerState>,
    Path(id): Path<String>,
    body: String,
) -> Result<Json<Envelope<Book>>, ApiError> {
    let id = parse_id(&id)?;
    let draft = parse_body(&body)?;
    let book = server.store.update(id, draft)?;

    Ok(Json(Envelope::success("Book edited", book)))
}

/// Delete handler; `data` carries the pre-deletion snapshot
async fn delete_handler(
    State(server): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Book>>, ApiError> {
    let id = parse_id(&id)?;
    let book = server.store.delete(id)?;

    Ok(Json(Envelope::success("Book deleted", book)))
}
