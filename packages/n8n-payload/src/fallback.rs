//! Last-resort guess at the report text.
//!
//! When no known shape matches, the longest long top-level string is usually
//! the model output. It is a guess: a payload that also carries a long prompt
//! can make this pick the prompt instead.

use serde_json::Value;

use crate::normalize::JsonObject;

/// Minimum trimmed length (in characters) a string must exceed to qualify.
pub const FALLBACK_MIN_CHARS: usize = 200;

/// Longest trimmed top-level string longer than [`FALLBACK_MIN_CHARS`].
///
/// Ties keep the first string seen.
pub fn fallback_text(obj: &JsonObject) -> Option<String> {
    obj.values()
        .filter_map(Value::as_str)
        .map(str::trim)
        .map(|s| (s.chars().count(), s))
        .filter(|(len, _)| *len > FALLBACK_MIN_CHARS)
        .fold(None, |best: Option<(usize, &str)>, candidate| match best {
            Some(current) if candidate.0 <= current.0 => Some(current),
            _ => Some(candidate),
        })
        .map(|(_, s)| s.to_string())
}
