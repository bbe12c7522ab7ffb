//! One user-triggered run, from input to extracted fields.
//!
//! Shared by the HTTP routes and the CLI. Nothing here outlives the call.

use n8n_payload::{
    ensure_not_workflow, load_json_bytes, load_json_str, normalize, ExtractionResult,
    InsightReport, JsonObject, PayloadError,
};
use tracing::info;
use webhook_client::WebhookClient;

use crate::common::RunError;

/// Result of a live webhook run.
#[derive(Debug, Clone)]
pub struct LiveRun {
    pub report: InsightReport,
    /// Normalized response, for the debug view
    pub payload: JsonObject,
}

/// Result of inspecting an uploaded or pasted document.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub result: ExtractionResult,
    pub payload: JsonObject,
}

/// Where an inspected document came from.
#[derive(Debug, Clone, Copy)]
pub enum Document<'a> {
    Upload(&'a [u8]),
    Pasted(&'a str),
}

/// Call the webhook and extract the live report fields.
pub async fn run_live(client: &WebhookClient, brand: &str, goal: &str) -> Result<LiveRun, RunError> {
    let payload = client.invoke(brand, goal).await?;
    let report = InsightReport::from_payload(&payload);

    info!(
        report_chars = report.report_text.chars().count(),
        insights = report.top_insights.len(),
        items = report.items.len(),
        "Live run complete"
    );

    Ok(LiveRun { report, payload })
}

/// Parse, normalize and extract an uploaded workflow output.
pub fn inspect(document: Document<'_>) -> Result<Inspection, RunError> {
    let raw = match document {
        Document::Upload(bytes) => load_json_bytes(bytes)?,
        Document::Pasted(text) => load_json_str(text)?,
    };

    let payload = normalize(&raw);
    ensure_not_workflow(&payload)?;

    let result = ExtractionResult::from_payload(&payload);
    info!(
        keys = payload.len(),
        has_prompt = !result.prompt.is_empty(),
        has_report = !result.report_text.is_empty(),
        "Inspected workflow output"
    );

    Ok(Inspection { result, payload })
}

/// True when the error only means nothing was supplied.
pub fn is_missing_document(err: &RunError) -> bool {
    matches!(err, RunError::Payload(PayloadError::Empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_uploaded_envelope() {
        let bytes = br#"[{"json": {"prompt": "Find trends", "metadata": {"rows": 2}, "text": "Report"}}]"#;
        let inspection = inspect(Document::Upload(bytes)).unwrap();

        assert_eq!(inspection.result.prompt, "Find trends");
        assert_eq!(inspection.result.report_text, "Report");
        assert_eq!(inspection.result.metadata["rows"], 2);
    }

    #[test]
    fn test_inspect_rejects_workflow_export() {
        let err = inspect(Document::Pasted(r#"{"nodes": [], "connections": {}}"#)).unwrap_err();
        assert!(matches!(err, RunError::Payload(PayloadError::WorkflowDefinition)));
    }

    #[test]
    fn test_blank_paste_is_missing_document() {
        let err = inspect(Document::Pasted("   ")).unwrap_err();
        assert!(is_missing_document(&err));
    }

    #[test]
    fn test_invalid_json_is_not_missing_document() {
        let err = inspect(Document::Pasted("{")).unwrap_err();
        assert!(!is_missing_document(&err));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
