//! Typed errors for payload loading.
//!
//! Extraction itself never fails; only turning user input into JSON can.

use thiserror::Error;

/// Errors raised while loading a document supplied by the user.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Upload or pasted text is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Nothing was supplied
    #[error("no JSON document was supplied")]
    Empty,

    /// The document is an n8n workflow export (nodes + connections), not run output
    #[error(
        "this is an n8n workflow definition (nodes + connections), not workflow output; \
         upload the JSON your final node wrote instead"
    )]
    WorkflowDefinition,
}

/// Result type alias for payload loading.
pub type Result<T> = std::result::Result<T, PayloadError>;
