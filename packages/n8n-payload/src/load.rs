//! Decoding user-supplied documents.

use serde_json::Value;

use crate::error::{PayloadError, Result};
use crate::normalize::JsonObject;

/// Parse uploaded bytes as JSON. Invalid UTF-8 is replaced, not rejected.
pub fn load_json_bytes(bytes: &[u8]) -> Result<Value> {
    load_json_str(&String::from_utf8_lossy(bytes))
}

/// Parse pasted text as JSON. Blank input is [`PayloadError::Empty`].
pub fn load_json_str(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Err(PayloadError::Empty);
    }
    Ok(serde_json::from_str(text)?)
}

/// Reject n8n workflow exports, which carry `nodes` and `connections`
/// instead of run output.
pub fn ensure_not_workflow(payload: &JsonObject) -> Result<()> {
    if payload.contains_key("nodes") && payload.contains_key("connections") {
        return Err(PayloadError::WorkflowDefinition);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lossy_decode_still_parses() {
        let mut bytes = br#"{"text": "caf"#.to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(br#""}"#);

        let value = load_json_bytes(&bytes).unwrap();
        assert_eq!(value["text"], "caf\u{fffd}");
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = load_json_str("{not json").unwrap_err();
        assert!(matches!(err, PayloadError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON:"));
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(matches!(load_json_str("  \n"), Err(PayloadError::Empty)));
        assert!(matches!(load_json_bytes(b""), Err(PayloadError::Empty)));
    }

    #[test]
    fn test_arrays_and_objects_load() {
        assert_eq!(load_json_str(r#"[{"json": {}}]"#).unwrap(), json!([{"json": {}}]));
    }

    #[test]
    fn test_workflow_definition_is_rejected() {
        let workflow = json!({"name": "A4", "nodes": [], "connections": {}});
        let err = ensure_not_workflow(workflow.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, PayloadError::WorkflowDefinition));

        let output = json!({"nodes": ["only nodes"], "output": []});
        assert!(ensure_not_workflow(output.as_object().unwrap()).is_ok());
    }
}
