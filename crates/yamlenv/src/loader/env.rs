//! Reading and writing variables under the overwrite policy.

use serde_yaml::Value;

use super::builder::Loader;
use super::error::YamlenvError;
use crate::document::{json_text, scalar_text};

impl Loader {
    /// Look up `name` in the environment store.
    pub fn get_environment_variable(&self, name: &str) -> Option<String> {
        self.store.get(name)
    }

    /// Set an environment variable.
    ///
    /// The value is sanitized first: booleans become `"true"`/`"false"`,
    /// strings are trimmed, and structured values are JSON-encoded.
    ///
    /// # Errors
    ///
    /// Returns `YamlenvError::ImmutableOverwrite` if the loader is immutable
    /// and `name` is already set, `YamlenvError::InvalidName` if the name
    /// cannot be stored, and `YamlenvError::InvalidValue` if the value
    /// contains NUL.
    pub fn set_environment_variable(
        &self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), YamlenvError> {
        self.write_variable(name, &value.into(), false).map(|_| ())
    }

    /// Write one variable, returning whether it was written.
    ///
    /// During the initial load an immutable loader keeps pre-existing values
    /// (set by the host before we ran) and skips the write instead of failing.
    pub(super) fn write_variable(
        &self,
        name: &str,
        value: &Value,
        initial_load: bool,
    ) -> Result<bool, YamlenvError> {
        let value = sanitize_value(value);

        if self.immutable && self.store.contains(name) {
            if initial_load {
                tracing::debug!(name, "Keeping existing environment variable");
                return Ok(false);
            }
            return Err(YamlenvError::ImmutableOverwrite(name.to_string()));
        }

        self.store.set(name, &value)?;
        tracing::trace!(name, "Set environment variable");
        Ok(true)
    }

    /// Remove `name` from the environment.
    ///
    /// Does nothing while the loader is immutable.
    pub fn clear_environment_variable(&self, name: &str) {
        if self.immutable {
            return;
        }
        self.store.clear(name);
    }
}

/// Normalize a value to the text stored in the environment.
pub(crate) fn sanitize_value(value: &Value) -> String {
    match scalar_text(value) {
        Some(text) => text.trim().to_string(),
        None => json_text(value),
    }
}
