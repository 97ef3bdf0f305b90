//! Flattening of nested documents into environment variable pairs.
//!
//! Responsibilities:
//! - Join nested mapping keys into a single name (`PARENT_CHILD`).
//! - Encode lists (and list-like mappings) as compact JSON strings.
//! - Render scalars as text.
//! - Reject documents where two nested branches produce the same name.
//!
//! Does NOT handle:
//! - Writing variables anywhere (see the loader and `store`).
//! - Value sanitation such as trimming (applied when variables are written).
//!
//! Invariants:
//! - Flattening is pure: the same document and options always produce the
//!   same output, in document order.
//! - Output names are never empty unless the document itself has an empty key.
//! - Duplicate detection does not depend on the loader's mutability.

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use crate::constants::{EMPTY_LIST_ENCODING, KEY_SEPARATOR};
use crate::document::{json_text, key_text, scalar_text, untag};
use crate::loader::YamlenvError;

/// Flat `name -> value` pairs, in document order.
pub type FlatVars = IndexMap<String, String>;

/// Converts a nested document into flat environment variable pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flattener {
    upper_case: bool,
}

impl Flattener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper-case every combined key.
    pub fn with_upper_case(mut self, upper_case: bool) -> Self {
        self.upper_case = upper_case;
        self
    }

    /// Flatten `document` into name/value pairs.
    ///
    /// # Errors
    ///
    /// Returns `YamlenvError::DuplicateKey` when a nested branch produces a
    /// name that is already present, e.g. `A_B: {C: 1}` next to `A: {B_C: 2}`.
    /// A scalar whose name repeats an earlier one replaces it instead.
    pub fn flatten(&self, document: &Mapping) -> Result<FlatVars, YamlenvError> {
        self.flatten_level(document, None)
    }

    fn flatten_level(
        &self,
        map: &Mapping,
        parent: Option<&str>,
    ) -> Result<FlatVars, YamlenvError> {
        let mut output = FlatVars::with_capacity(map.len());

        for (key, value) in map {
            let combined = self.combined_key(&key_text(key), parent);

            match untag(value) {
                Value::Mapping(nested) if is_associative(nested) => {
                    let flattened = self.flatten_level(nested, Some(&combined))?;
                    if flattened.keys().any(|name| output.contains_key(name)) {
                        return Err(YamlenvError::DuplicateKey(combined));
                    }
                    output.extend(flattened);
                }
                node => {
                    output.insert(combined, encode_leaf(node));
                }
            }
        }

        Ok(output)
    }

    fn combined_key(&self, key: &str, parent: Option<&str>) -> String {
        let combined = match parent {
            Some(parent) if !parent.is_empty() => format!("{parent}{KEY_SEPARATOR}{key}"),
            _ => key.to_string(),
        };
        if self.upper_case {
            combined.to_ascii_uppercase()
        } else {
            combined
        }
    }
}

/// A mapping is associative unless it is empty or its keys are exactly the
/// integers `0..n` in order, which makes it indistinguishable from a list.
fn is_associative(map: &Mapping) -> bool {
    !map.is_empty() && !is_list_like(map)
}

fn is_list_like(map: &Mapping) -> bool {
    map.keys().enumerate().all(|(index, key)| {
        matches!(untag(key), Value::Number(n) if n.as_u64() == Some(index as u64))
    })
}

fn encode_leaf(node: &Value) -> String {
    match node {
        Value::Sequence(items) if items.is_empty() => EMPTY_LIST_ENCODING.to_string(),
        Value::Sequence(_) => json_text(node),
        Value::Mapping(map) if map.is_empty() => EMPTY_LIST_ENCODING.to_string(),
        Value::Mapping(map) => {
            let items: Vec<Value> = map.values().cloned().collect();
            json_text(&Value::Sequence(items))
        }
        scalar => scalar_text(scalar).unwrap_or_default(),
    }
}
