//! # Book Record
//!
//! The catalog's single record type plus the validated draft used for
//! create and update requests.
//!
//! Validation semantics:
//! - `title` and `author` are required, non-empty, at most 255 characters
//! - `publish_year` is a required integer >= 0
//! - `description` is optional; an empty string is normalized to null
//!
//! Requests arrive as raw JSON and are validated field by field so that every
//! failure becomes a failure envelope rather than a framework rejection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{CatalogError, CatalogResult};

/// Maximum length of `title` and `author`, in characters
pub const MAX_TEXT_LEN: usize = 255;

/// A book record
///
/// `id` is assigned by the store on insert and is opaque to clients. Ids are
/// allocated from a monotonically increasing sequence, so they double as the
/// newest-first ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub publish_year: u32,
    pub description: Option<String>,
}

/// Validated input for creating or updating a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publish_year: u32,
    pub description: Option<String>,
}

impl BookDraft {
    /// Validate a raw JSON body into a draft.
    ///
    /// Unknown fields (for example a client-side `id`) are ignored.
    pub fn from_json(body: &Value) -> CatalogResult<Self> {
        let obj = body
            .as_object()
            .ok_or_else(|| CatalogError::validation("request body must be a JSON object"))?;

        let title = required_text(obj, "title")?;
        let author = required_text(obj, "author")?;
        let publish_year = required_year(obj)?;
        let description = optional_text(obj, "description")?;

        Ok(Self {
            title,
            author,
            publish_year,
            description,
        })
    }

    /// Build the record this draft describes, with a store-assigned id
    pub fn into_book(self, id: u64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publish_year: self.publish_year,
            description: self.description,
        }
    }
}

/// Extract a required, non-empty, bounded text field
fn required_text(obj: &serde_json::Map<String, Value>, field: &str) -> CatalogResult<String> {
    let value = match obj.get(field) {
        None | Some(Value::Null) => {
            return Err(CatalogError::validation(format!("{} is required", field)))
        }
        Some(v) => v,
    };

    let text = value
        .as_str()
        .ok_or_else(|| CatalogError::validation(format!("{} must be a string", field)))?;

    if text.is_empty() {
        return Err(CatalogError::validation(format!(
            "{} must not be empty",
            field
        )));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(CatalogError::validation(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LEN
        )));
    }

    Ok(text.to_string())
}

/// Extract the required non-negative publish year
fn required_year(obj: &serde_json::Map<String, Value>) -> CatalogResult<u32> {
    let value = match obj.get("publish_year") {
        None | Some(Value::Null) => {
            return Err(CatalogError::validation("publish_year is required"))
        }
        Some(v) => v,
    };

    let year = value.as_i64().ok_or_else(|| {
        CatalogError::validation("publish_year must be an integer")
    })?;

    if year < 0 {
        return Err(CatalogError::validation(
            "publish_year must not be negative",
        ));
    }

    u32::try_from(year).map_err(|_| CatalogError::validation("publish_year is out of range"))
}

/// Extract an optional text field, normalizing empty strings to null
fn optional_text(
    obj: &serde_json::Map<String, Value>,
    field: &str,
) -> CatalogResult<Option<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(CatalogError::validation(format!(
            "{} must be a string",
            field
        ))),
    }
}
