//! Normalization of the data API's inconsistent response envelopes.
//!
//! The hosted API returns rows in three shapes depending on the endpoint's
//! vintage: `{"success": true, "data": [...]}`, `{"data": [...], "count": n,
//! "total": n}`, or a bare array. Historically every call site re-derived
//! the shape; here it is decided exactly once.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::repository::{ErrorContext, RepositoryError, RepositoryResult};

/// Extract the row array from any of the API's envelope shapes.
///
/// A `{"success": false, ...}` body is an error response, not an empty
/// result, and is surfaced as such (with the body's `error` field when
/// present).
pub fn extract_rows(body: Value) -> RepositoryResult<Vec<Value>> {
    match body {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut obj) => {
            if obj.get("success").and_then(Value::as_bool) == Some(false) {
                let message = obj
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("request failed")
                    .to_string();
                return Err(RepositoryError::query_with_context(
                    message,
                    ErrorContext::new("extract_rows"),
                ));
            }
            match obj.remove("data") {
                Some(Value::Array(rows)) => Ok(rows),
                Some(other) => Err(RepositoryError::validation_with_context(
                    format!("expected data array, got {}", type_name(&other)),
                    ErrorContext::new("extract_rows"),
                )),
                None => Err(RepositoryError::validation_with_context(
                    "response object has no data field",
                    ErrorContext::new("extract_rows"),
                )),
            }
        }
        other => Err(RepositoryError::validation_with_context(
            format!("unrecognized response shape: {}", type_name(&other)),
            ErrorContext::new("extract_rows"),
        )),
    }
}

/// Deserialize rows individually, dropping malformed ones with a warning.
///
/// One bad row from the API must not blank a whole dashboard panel.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>, entity: &str) -> Vec<T> {
    let mut decoded = Vec::with_capacity(rows.len());
    for row in rows {
        match serde_json::from_value::<T>(row) {
            Ok(item) => decoded.push(item),
            Err(err) => warn!(entity, error = %err, "dropping malformed row"),
        }
    }
    decoded
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
