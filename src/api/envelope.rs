//! # Response Envelope
//!
//! Uniform `{success, message, data}` wrapper for every operation outcome,
//! success or failure, consumed identically by all operations.

use serde::{Deserialize, Serialize};

/// Operation result envelope
///
/// Invariant: `success == false` implies `data == None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Wrap a successful outcome
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Wrap a failure; `data` is always null
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_success_serialization() {
        let envelope = Envelope::success("Book added", json!({"id": 1}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["message"], json!("Book added"));
        assert_eq!(value["data"]["id"], json!(1));
    }

    #[test]
    fn test_failure_has_null_data() {
        let envelope = Envelope::<Value>::failure("book 7 not found");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["data"], Value::Null);
    }

    #[test]
    fn test_round_trip() {
        let envelope = Envelope::success("ok", json!({"title": "Dune"}));
        let raw = serde_json::to_string(&envelope).unwrap();
        let back: Envelope<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, envelope);
    }
}
