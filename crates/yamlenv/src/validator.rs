//! Required-variable checks with aggregated failures.
//!
//! Responsibilities:
//! - Fail construction when any required name is missing.
//! - Provide chainable assertions (`not_empty`, `allowed_values`,
//!   `is_integer`) over the full list of names.
//!
//! Does NOT handle:
//! - Loading or writing variables; the validator only reads through a loader.
//!
//! Invariants:
//! - Every check re-reads the environment; no failure state is remembered
//!   between calls.
//! - All failing names of one call are reported together, in the order the
//!   names were given.

use crate::loader::{Loader, YamlenvError};

/// Checks a fixed list of environment variable names.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    names: Vec<String>,
    loader: &'a Loader,
}

impl<'a> Validator<'a> {
    /// Require every name in `names` to be set.
    ///
    /// # Errors
    ///
    /// Returns `YamlenvError::Validation` listing `"<name> is missing"` for
    /// each name that is not set.
    pub fn new<I, S>(names: I, loader: &'a Loader) -> Result<Self, YamlenvError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let validator = Self {
            names: names.into_iter().map(Into::into).collect(),
            loader,
        };
        validator.assert(|value| value.is_some(), "is missing")?;
        Ok(validator)
    }

    /// Every variable must be non-empty after trimming whitespace.
    pub fn not_empty(self) -> Result<Self, YamlenvError> {
        self.assert(
            |value| value.is_some_and(|v| !v.trim().is_empty()),
            "is empty",
        )?;
        Ok(self)
    }

    /// Every variable must be one of `choices`.
    pub fn allowed_values<S: AsRef<str>>(self, choices: &[S]) -> Result<Self, YamlenvError> {
        self.assert(
            |value| value.is_some_and(|v| choices.iter().any(|c| c.as_ref() == v)),
            "is not an allowed value",
        )?;
        Ok(self)
    }

    /// Every variable must be a base-10 integer.
    pub fn is_integer(self) -> Result<Self, YamlenvError> {
        self.assert(|value| value.is_some_and(is_integer_text), "is not an integer")?;
        Ok(self)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn assert<F>(&self, check: F, message: &str) -> Result<(), YamlenvError>
    where
        F: Fn(Option<&str>) -> bool,
    {
        let failures: Vec<String> = self
            .names
            .iter()
            .filter(|name| {
                let value = self.loader.get_environment_variable(name);
                !check(value.as_deref())
            })
            .map(|name| format!("{name} {message}"))
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = failures.len(), "Environment assertions failed");
            Err(YamlenvError::Validation { failures })
        }
    }
}

/// Optional sign followed by one or more ASCII digits.
fn is_integer_text(value: &str) -> bool {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
