//! # HTTP API Module
//!
//! Axum HTTP surface for the catalog: CRUD plus filtered, paginated search,
//! every outcome wrapped in a uniform response envelope.

pub mod config;
pub mod envelope;
pub mod errors;
pub mod request;
pub mod server;

pub use config::ServerConfig;
pub use envelope::Envelope;
pub use errors::{ApiError, ApiResult};
pub use request::SearchParams;
pub use server::CatalogServer;
