//! The nested document and the parser seam that produces it.
//!
//! Responsibilities:
//! - Define `DocumentParser`, the boundary to the structured-document parser.
//! - Provide `YamlParser`, the default `serde_yaml` implementation.
//! - Resolve dotted paths against a parsed document.
//! - Render scalar nodes to the text written into the environment.
//!
//! Does NOT handle:
//! - Reading files (see the loader).
//! - Flattening (see `flatten.rs`).

use serde_yaml::{Mapping, Value};

use crate::constants::{FALSE_TEXT, PATH_SEPARATOR, TRUE_TEXT};

/// Parses raw source text into a nested document.
///
/// Returning a non-mapping value is allowed here; the loader rejects it.
pub trait DocumentParser: Send + Sync {
    fn parse(&self, source: &str) -> Result<Value, String>;
}

/// YAML parser backed by `serde_yaml`.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlParser;

impl DocumentParser for YamlParser {
    fn parse(&self, source: &str) -> Result<Value, String> {
        serde_yaml::from_str(source).map_err(|e| e.to_string())
    }
}

/// Strip YAML tags, returning the tagged node's inner value.
pub(crate) fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

/// Render a mapping key as text. Scalar keys (integers, booleans) are
/// rendered the same way scalar values are.
pub(crate) fn key_text(key: &Value) -> String {
    scalar_text(key).unwrap_or_else(|| json_text(key))
}

/// Text form of a scalar node, or `None` for sequences and mappings.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match untag(value) {
        Value::Null => Some(String::new()),
        Value::Bool(true) => Some(TRUE_TEXT.to_string()),
        Value::Bool(false) => Some(FALSE_TEXT.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Compact JSON encoding of any node.
pub(crate) fn json_text(value: &Value) -> String {
    // serde_yaml values always serialize to JSON except for non-string map
    // keys, which serde_json rejects; fall back to stringifying the keys.
    serde_json::to_string(value).unwrap_or_else(|_| {
        serde_json::to_string(&to_json(value)).unwrap_or_default()
    })
}

fn to_json(value: &Value) -> serde_json::Value {
    match untag(value) {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::to_value(n).unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Sequence(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Mapping(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (key_text(k), to_json(v)))
                .collect(),
        ),
        Value::Tagged(_) => serde_json::Value::Null,
    }
}

/// Look up `path` in a document.
///
/// The whole path is tried as a single top-level key first, so keys that
/// contain literal dots still resolve. Otherwise the path is split on `.`
/// and walked segment by segment.
pub fn lookup<'a>(document: &'a Mapping, path: &str) -> Option<&'a Value> {
    if let Some(value) = get_key(document, path) {
        return Some(value);
    }

    let mut segments = path.split(PATH_SEPARATOR);
    let first = segments.next()?;
    let mut current = get_key(document, first)?;
    for segment in segments {
        match untag(current) {
            Value::Mapping(map) => current = get_key(map, segment)?,
            _ => return None,
        }
    }
    Some(current)
}

/// Find `key` in a mapping, matching non-string keys by their text form.
fn get_key<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| !k.is_string() && key_text(k) == key)
            .map(|(_, v)| v)
    })
}
