//! Reduce a raw n8n document to one working object.
//!
//! n8n output can be:
//! - an object
//! - a list like `[{"json": {...}}]` (item envelope)
//! - a list like `[{"output": [...]}]`
//!
//! Whatever arrives, callers get a `Map` back. Unknown shapes become empty.

use serde_json::{Map, Value};

/// A JSON object, the working shape for every extractor.
pub type JsonObject = Map<String, Value>;

/// Normalize uploaded output to a single object.
///
/// Prefers the `json` envelope of the first list item when present, then the
/// first item itself. Empty lists, scalars and lists of non-objects yield `{}`.
pub fn normalize(raw: &Value) -> JsonObject {
    match raw {
        Value::Object(map) => map.clone(),
        Value::Array(items) => match items.first() {
            Some(Value::Object(first)) => match first.get("json") {
                Some(Value::Object(inner)) => inner.clone(),
                _ => first.clone(),
            },
            _ => JsonObject::new(),
        },
        _ => JsonObject::new(),
    }
}

/// Normalize a webhook response to a single object.
///
/// Unlike [`normalize`] this never unwraps a `json` envelope. Values with no
/// usable object are kept under a `raw` key so they still show up in the
/// debug view.
pub fn normalize_response(raw: Value) -> JsonObject {
    match raw {
        Value::Object(map) => map,
        Value::Array(mut items) if matches!(items.first(), Some(Value::Object(_))) => {
            match items.swap_remove(0) {
                Value::Object(first) => first,
                _ => JsonObject::new(),
            }
        }
        other => {
            let mut wrapped = JsonObject::new();
            wrapped.insert("raw".to_string(), other);
            wrapped
        }
    }
}
