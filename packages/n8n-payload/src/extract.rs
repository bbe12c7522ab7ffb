//! Candidate-path field extraction.
//!
//! Each field has a fixed, ordered list of places it might live. The first
//! candidate that holds a usable value wins, even if a later one would also
//! match.

use serde_json::Value;
use tracing::debug;

use crate::fallback::fallback_text;
use crate::normalize::JsonObject;
use crate::path::{deep_get_field, Step, Step::Index, Step::Key};
use crate::types::InsightReport;

const METADATA_CANDIDATES: &[&[Step<'static>]] =
    &[&[Key("metadata")], &[Key("json"), Key("metadata")]];

const PROMPT_CANDIDATES: &[&[Step<'static>]] =
    &[&[Key("prompt")], &[Key("json"), Key("prompt")]];

/// Places report text is commonly found, in priority order.
///
/// Covers plain n8n fields, OpenAI chat/completions responses and
/// `data`-wrapped webhook replies.
pub const REPORT_TEXT_CANDIDATES: &[&[Step<'static>]] = &[
    &[Key("text")],
    &[Key("content")],
    &[Key("response")],
    &[Key("result")],
    &[Key("message"), Key("content")],
    &[Key("choices"), Index(0), Key("message"), Key("content")],
    &[Key("choices"), Index(0), Key("text")],
    &[Key("data"), Key("text")],
    &[Key("data"), Key("content")],
    &[Key("data"), Key("output")],
];

/// First candidate path holding a non-empty (after trim) string.
pub fn text_field(obj: &JsonObject, candidates: &[&[Step<'_>]]) -> Option<String> {
    candidates.iter().find_map(|path| {
        deep_get_field(obj, path)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// First candidate path holding an object.
pub fn object_field(obj: &JsonObject, candidates: &[&[Step<'_>]]) -> Option<JsonObject> {
    candidates
        .iter()
        .find_map(|path| deep_get_field(obj, path).and_then(Value::as_object))
        .cloned()
}

/// Run metadata: `metadata`, then `json.metadata`. Empty when neither is an object.
pub fn extract_metadata(obj: &JsonObject) -> JsonObject {
    object_field(obj, METADATA_CANDIDATES).unwrap_or_default()
}

/// Prompt the workflow was run with: `prompt`, then `json.prompt`.
pub fn extract_prompt(obj: &JsonObject) -> String {
    text_field(obj, PROMPT_CANDIDATES).unwrap_or_default()
}

/// Joined `output_text` parts from a Responses-API style `output` array.
///
/// Shape: `{"output": [{"content": [{"type": "output_text", "text": "..."}]}]}`
fn output_text_parts(obj: &JsonObject) -> Option<String> {
    let messages = obj.get("output")?.as_array()?;

    let texts: Vec<&str> = messages
        .iter()
        .filter_map(|msg| msg.get("content")?.as_array())
        .flatten()
        .filter(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
        .filter_map(|part| part.get("text")?.as_str())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect();

    if texts.is_empty() {
        None
    } else {
        Some(texts.join("\n\n"))
    }
}

/// Report text from the working object.
///
/// Tries the `output_text` parts first, then [`REPORT_TEXT_CANDIDATES`], then
/// the longest-string heuristic. Empty when nothing fits.
pub fn extract_text(obj: &JsonObject) -> String {
    if let Some(text) = output_text_parts(obj) {
        debug!(chars = text.chars().count(), "report text from output parts");
        return text;
    }

    if let Some(text) = text_field(obj, REPORT_TEXT_CANDIDATES) {
        debug!(chars = text.chars().count(), "report text from candidate path");
        return text;
    }

    match fallback_text(obj) {
        Some(text) => {
            debug!(chars = text.chars().count(), "report text from longest-string fallback");
            text
        }
        None => String::new(),
    }
}

fn top_level_text(obj: &JsonObject, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

fn insight_lines(obj: &JsonObject) -> Vec<String> {
    let Some(entries) = obj.get("top_insights").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Null => None,
            Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            other => Some(other.to_string()),
        })
        .collect()
}

/// Fields the live webhook workflow returns.
///
/// `report_text` wins when set; otherwise report text falls back to
/// [`extract_text`].
pub fn extract_insight_report(obj: &JsonObject) -> InsightReport {
    let report_text = match top_level_text(obj, "report_text") {
        text if !text.is_empty() => text,
        _ => extract_text(obj),
    };

    InsightReport {
        tool_name: top_level_text(obj, "tool_name"),
        one_liner: top_level_text(obj, "one_liner"),
        report_text,
        top_insights: insight_lines(obj),
        metadata: extract_metadata(obj),
        items: obj
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_output_parts_are_joined() {
        let payload = obj(json!({
            "output": [
                {"content": [{"type": "output_text", "text": "a"}]},
                {"content": [{"type": "output_text", "text": "b"}]}
            ]
        }));

        assert_eq!(extract_text(&payload), "a\n\nb");
    }

    #[test]
    fn test_output_parts_skip_other_types_and_blank_text() {
        let payload = obj(json!({
            "output": [
                {"type": "reasoning", "summary": []},
                {"content": [
                    {"type": "refusal", "text": "no"},
                    {"type": "output_text", "text": "   "},
                    {"type": "output_text", "text": "  kept  "},
                    {"type": "output_text", "text": 5}
                ]},
                "stray"
            ]
        }));

        assert_eq!(extract_text(&payload), "kept");
    }

    #[test]
    fn test_output_parts_beat_candidate_paths() {
        let payload = obj(json!({
            "text": "plain",
            "output": [{"content": [{"type": "output_text", "text": "parts"}]}]
        }));

        assert_eq!(extract_text(&payload), "parts");
    }

    #[test]
    fn test_empty_output_falls_through() {
        let payload = obj(json!({"output": [], "response": "from response"}));
        assert_eq!(extract_text(&payload), "from response");
    }

    #[test]
    fn test_chat_completion_shape() {
        let payload = obj(json!({"choices": [{"message": {"content": "hello"}}]}));
        assert_eq!(extract_text(&payload), "hello");
    }

    #[test]
    fn test_candidate_order_is_fixed() {
        let payload = obj(json!({
            "data": {"text": "later"},
            "result": "earlier"
        }));

        assert_eq!(extract_text(&payload), "earlier");
    }

    #[test]
    fn test_blank_candidate_is_skipped() {
        let payload = obj(json!({"text": "  ", "content": 3, "message": {"content": " msg "}}));
        assert_eq!(extract_text(&payload), "msg");
    }

    #[test]
    fn test_fallback_applies_last() {
        let report = "r".repeat(300);
        let payload = obj(json!({"summary": "s".repeat(250), "body": report.clone()}));

        assert_eq!(extract_text(&payload), report);
    }

    #[test]
    fn test_nothing_found_is_empty() {
        let payload = obj(json!({"status": "ok", "count": 3}));
        assert_eq!(extract_text(&payload), "");
    }

    #[test]
    fn test_metadata_prefers_top_level() {
        let payload = obj(json!({
            "metadata": {"rows": 10},
            "json": {"metadata": {"rows": 99}}
        }));

        assert_eq!(extract_metadata(&payload), obj(json!({"rows": 10})));
    }

    #[test]
    fn test_metadata_nested_and_missing() {
        let nested = obj(json!({"metadata": "flat", "json": {"metadata": {"k": "v"}}}));
        assert_eq!(extract_metadata(&nested), obj(json!({"k": "v"})));

        let missing = obj(json!({"metadata": [1, 2]}));
        assert!(extract_metadata(&missing).is_empty());
    }

    #[test]
    fn test_prompt_is_trimmed_with_nested_fallback() {
        assert_eq!(extract_prompt(&obj(json!({"prompt": "  ask  "}))), "ask");
        assert_eq!(
            extract_prompt(&obj(json!({"prompt": "", "json": {"prompt": "inner"}}))),
            "inner"
        );
        assert_eq!(extract_prompt(&obj(json!({"prompt": 12}))), "");
    }

    #[test]
    fn test_field_helpers_respect_priority() {
        let payload = obj(json!({"a": {"b": " second "}, "c": "first", "d": {"k": 1}}));

        assert_eq!(
            text_field(&payload, &[&[Key("missing")], &[Key("c")], &[Key("a"), Key("b")]]),
            Some("first".to_string())
        );
        assert_eq!(
            object_field(&payload, &[&[Key("c")], &[Key("d")], &[Key("a")]]),
            Some(obj(json!({"k": 1})))
        );
        assert_eq!(object_field(&payload, &[&[Key("c")]]), None);
    }

    #[test]
    fn test_insight_report_reads_live_fields() {
        let payload = obj(json!({
            "tool_name": " Madison Insight ",
            "one_liner": "Signals in one place",
            "report_text": "## Report",
            "top_insights": ["  first ", "", null, 42, "second"],
            "metadata": {"sources": 4},
            "items": [{"title": "a"}, "b"]
        }));

        let report = extract_insight_report(&payload);

        assert_eq!(report.tool_name, "Madison Insight");
        assert_eq!(report.one_liner, "Signals in one place");
        assert_eq!(report.report_text, "## Report");
        assert_eq!(report.top_insights, vec!["first", "42", "second"]);
        assert_eq!(report.metadata, obj(json!({"sources": 4})));
        assert_eq!(report.items, vec![json!({"title": "a"}), json!("b")]);
    }

    #[test]
    fn test_insight_report_falls_back_to_extracted_text() {
        let payload = obj(json!({
            "report_text": "   ",
            "choices": [{"text": "completion"}]
        }));

        let report = extract_insight_report(&payload);

        assert_eq!(report.report_text, "completion");
        assert_eq!(report.tool_name, "");
        assert!(report.top_insights.is_empty());
        assert!(report.items.is_empty());
        assert!(report.metadata.is_empty());
    }
}
