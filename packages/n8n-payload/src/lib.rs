//! Best-effort reading of n8n workflow output.
//!
//! n8n hands back whatever the last node produced: a bare object, a list of
//! `{"json": {...}}` items, an OpenAI-style response, or something else
//! entirely. This crate reduces any of those shapes to a single working
//! object and pulls a few human-readable fields out of it.
//!
//! Nothing in here validates a schema. Every lookup degrades to an empty
//! value instead of failing, so callers can always render *something*.
//!
//! # Usage
//!
//! ```rust,ignore
//! use n8n_payload::{load_json_bytes, normalize, ExtractionResult};
//!
//! let raw = load_json_bytes(&bytes)?;
//! let payload = normalize(&raw);
//! let result = ExtractionResult::from_payload(&payload);
//!
//! if result.report_text.is_empty() {
//!     println!("no report found");
//! }
//! ```
//!
//! # Modules
//!
//! - [`path`] - Non-panicking traversal of untyped JSON
//! - [`normalize`] - Reduce a raw document to one working object
//! - [`extract`] - Candidate-path field extraction
//! - [`fallback`] - Longest-string heuristic for report text
//! - [`types`] - Extraction results handed to renderers
//! - [`load`] - Decoding uploaded bytes and rejecting workflow definitions

pub mod error;
pub mod extract;
pub mod fallback;
pub mod load;
pub mod normalize;
pub mod path;
pub mod types;

pub use error::{PayloadError, Result};
pub use extract::{
    extract_insight_report, extract_metadata, extract_prompt, extract_text, object_field, text_field,
    REPORT_TEXT_CANDIDATES,
};
pub use fallback::{fallback_text, FALLBACK_MIN_CHARS};
pub use load::{ensure_not_workflow, load_json_bytes, load_json_str};
pub use normalize::{normalize, normalize_response, JsonObject};
pub use path::{deep_get, deep_get_field, Step};
pub use types::{ExtractionResult, InsightReport, PROMPT_PREVIEW_CHARS};
