//! Path traversal over untyped JSON.
//!
//! A path is a slice of [`Step`]s. Walking stops with `None` the moment a key
//! is missing, an index is out of bounds, or the step does not fit the value
//! it is applied to (a key on an array, an index on an object, anything on a
//! scalar).

use serde_json::{Map, Value};

/// One step of a candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Object field access
    Key(&'a str),
    /// Array element access
    Index(usize),
}

impl<'a> From<&'a str> for Step<'a> {
    fn from(key: &'a str) -> Self {
        Step::Key(key)
    }
}

impl From<usize> for Step<'_> {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

/// Follow `path` from `value`, returning the value it lands on.
pub fn deep_get<'v>(value: &'v Value, path: &[Step<'_>]) -> Option<&'v Value> {
    path.iter().try_fold(value, |current, step| match (step, current) {
        (Step::Key(key), Value::Object(map)) => map.get(*key),
        (Step::Index(index), Value::Array(items)) => items.get(*index),
        _ => None,
    })
}

/// Like [`deep_get`], rooted at an object without wrapping it in a [`Value`].
///
/// The first step must be a key. An empty path returns `None`.
pub fn deep_get_field<'v>(root: &'v Map<String, Value>, path: &[Step<'_>]) -> Option<&'v Value> {
    match path.split_first()? {
        (Step::Key(key), rest) => deep_get(root.get(*key)?, rest),
        (Step::Index(_), _) => None,
    }
}
