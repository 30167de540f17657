//! # Catalog Client
//!
//! Client-side counterpart of the HTTP API: the filter composer that builds
//! the query string the server parses, the browsing state container, and a
//! thin typed HTTP client.

pub mod composer;
pub mod errors;
pub mod http;
pub mod state;

pub use composer::{FilterForm, YearOperator};
pub use errors::{ClientError, ClientResult};
pub use http::ApiClient;
pub use state::{CatalogState, FormMode};
