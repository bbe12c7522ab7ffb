//! Extraction results handed to renderers.
//!
//! Every field is always present. Missing data shows up as an empty string,
//! object or list, never as `None`.

use serde::Serialize;
use serde_json::Value;

use crate::extract::{extract_insight_report, extract_metadata, extract_prompt, extract_text};
use crate::normalize::JsonObject;

/// Prompt previews are cut at this many characters.
pub const PROMPT_PREVIEW_CHARS: usize = 2500;

/// Fields pulled from an uploaded workflow output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub metadata: JsonObject,
    pub prompt: String,
    pub report_text: String,
}

impl ExtractionResult {
    /// Extract every field from a normalized payload.
    pub fn from_payload(payload: &JsonObject) -> Self {
        Self {
            metadata: extract_metadata(payload),
            prompt: extract_prompt(payload),
            report_text: extract_text(payload),
        }
    }

    /// Prompt cut to [`PROMPT_PREVIEW_CHARS`], with a `...` line when shortened.
    pub fn prompt_preview(&self) -> String {
        match self.prompt.char_indices().nth(PROMPT_PREVIEW_CHARS) {
            Some((cut, _)) => format!("{}\n...\n", &self.prompt[..cut]),
            None => self.prompt.clone(),
        }
    }

    /// Numeric metadata entries, for charting.
    pub fn numeric_metadata(&self) -> Vec<(String, f64)> {
        numeric_entries(&self.metadata)
    }
}

/// Fields returned by the live insight workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub tool_name: String,
    pub one_liner: String,
    pub report_text: String,
    pub top_insights: Vec<String>,
    pub metadata: JsonObject,
    pub items: Vec<Value>,
}

impl InsightReport {
    /// Maximum insight bullets shown.
    pub const MAX_INSIGHTS: usize = 10;

    /// Maximum supporting items shown.
    pub const MAX_ITEMS: usize = 25;

    /// Extract every field from a normalized webhook response.
    pub fn from_payload(payload: &JsonObject) -> Self {
        extract_insight_report(payload)
    }

    pub fn visible_insights(&self) -> &[String] {
        &self.top_insights[..self.top_insights.len().min(Self::MAX_INSIGHTS)]
    }

    pub fn visible_items(&self) -> &[Value] {
        &self.items[..self.items.len().min(Self::MAX_ITEMS)]
    }

    pub fn numeric_metadata(&self) -> Vec<(String, f64)> {
        numeric_entries(&self.metadata)
    }
}

/// Entries whose value is a JSON number. Booleans are not numbers here.
fn numeric_entries(metadata: &JsonObject) -> Vec<(String, f64)> {
    metadata
        .iter()
        .filter_map(|(key, value)| value.as_f64().map(|n| (key.clone(), n)))
        .collect()
}
