use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    response::Html,
};

use crate::runs::{inspect, is_missing_document, Document};
use crate::views::{error_notice, extraction_output, inspect_form, notice, page, NoticeKind};

const HEADING: &str = "Formatted view of an exported n8n workflow output";

const NEED_INPUT: &str =
    "Upload your workflow output JSON file OR paste the JSON to view formatted insights.";

/// Fields of the upload form. An uploaded file wins over pasted text.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<Vec<u8>>,
    pasted: String,
    debug: bool,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, MultipartError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was chosen
                if !bytes.is_empty() {
                    form.file = Some(bytes.to_vec());
                }
            }
            Some("pasted") => form.pasted = field.text().await?,
            Some("debug") => form.debug = true,
            _ => {}
        }
    }

    Ok(form)
}

fn inspect_page(pasted: &str, debug: bool, output: &str) -> String {
    let body = format!("<h2>Inputs</h2>{}{}", inspect_form(pasted, debug), output);
    page(HEADING, &body)
}

/// Upload form
pub async fn inspect_form_handler() -> Html<String> {
    Html(inspect_page("", false, &notice(NoticeKind::Info, NEED_INPUT)))
}

/// Render an uploaded or pasted workflow output
pub async fn inspect_handler(multipart: Multipart) -> (StatusCode, Html<String>) {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read upload");
            let message = format!("Could not read the upload: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Html(inspect_page("", false, &notice(NoticeKind::Error, &message))),
            );
        }
    };

    let document = match form.file.as_deref() {
        Some(bytes) => Document::Upload(bytes),
        None => Document::Pasted(&form.pasted),
    };

    match inspect(document) {
        Ok(inspection) => {
            let debug_payload = form.debug.then_some(&inspection.payload);
            let output = format!(
                "{}{}",
                extraction_output(&inspection.result, debug_payload),
                notice(
                    NoticeKind::Success,
                    "Your workflow output is now readable without opening n8n."
                )
            );
            (StatusCode::OK, Html(inspect_page(&form.pasted, form.debug, &output)))
        }
        Err(e) if is_missing_document(&e) => (
            StatusCode::OK,
            Html(inspect_page(&form.pasted, form.debug, &notice(NoticeKind::Info, NEED_INPUT))),
        ),
        Err(e) => {
            tracing::info!(error = %e, "Rejected uploaded document");
            (
                e.status(),
                Html(inspect_page(&form.pasted, form.debug, &error_notice(&e))),
            )
        }
    }
}
