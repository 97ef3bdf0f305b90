//! Reading, parsing and applying the source document.

use std::fs;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use super::builder::Loader;
use super::error::YamlenvError;
use crate::document::{self, untag};
use crate::flatten::Flattener;
use crate::store::check_storable;

impl Loader {
    /// Load the source file into the environment.
    ///
    /// Returns every variable visible in the store afterwards, including
    /// ones that were set before the load.
    ///
    /// # Errors
    ///
    /// - `InvalidPath` if the file is missing, unreadable, or not a file.
    /// - `InvalidDocument` if the file does not parse to a mapping.
    /// - `DuplicateKey` if two branches flatten to the same name.
    /// - `InvalidName` / `InvalidValue` if a flattened pair cannot be stored.
    ///
    /// On any error nothing is written and the previously loaded document
    /// stays in place.
    pub fn load(&mut self) -> Result<IndexMap<String, String>, YamlenvError> {
        tracing::debug!(path = %self.file_path.display(), immutable = self.immutable, "Loading environment file");

        self.ensure_readable()?;
        let document = self.read_document()?;

        let vars = Flattener::new()
            .with_upper_case(self.upper_case)
            .flatten(&document)?;
        for (name, value) in &vars {
            check_storable(name, value)?;
        }
        self.document = document;

        let mut written = 0usize;
        for (name, value) in &vars {
            if self.write_variable(name, &Value::String(value.clone()), true)? {
                written += 1;
            }
        }

        tracing::debug!(
            path = %self.file_path.display(),
            total = vars.len(),
            written,
            "Loaded environment file"
        );

        Ok(self.store.snapshot())
    }

    /// Look up a value in the parsed document by dotted path.
    ///
    /// `"NESTED"` returns the whole `NESTED` mapping; `"MULTI.LEVEL.NESTED"`
    /// walks down three levels. A top-level key containing literal dots is
    /// matched before the path is split. Returns `None` before `load()`.
    pub fn get_yaml_value(&self, path: &str) -> Option<&Value> {
        document::lookup(&self.document, path)
    }

    /// Like `get_yaml_value`, deserialized into `T`.
    ///
    /// Returns `None` when the path is missing or the value does not have
    /// the shape `T` expects.
    pub fn get_yaml_value_as<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let value = self.get_yaml_value(path)?;
        serde_yaml::from_value(value.clone()).ok()
    }

    /// The parsed document (empty before `load()`).
    pub fn document(&self) -> &Mapping {
        &self.document
    }

    fn ensure_readable(&self) -> Result<(), YamlenvError> {
        let is_file = fs::metadata(&self.file_path)
            .map(|meta| meta.is_file())
            .unwrap_or(false);

        if !is_file || fs::File::open(&self.file_path).is_err() {
            return Err(YamlenvError::InvalidPath {
                path: self.file_path.clone(),
            });
        }
        Ok(())
    }

    fn read_document(&self) -> Result<Mapping, YamlenvError> {
        let bytes = fs::read(&self.file_path)?;
        let invalid = |reason: String| YamlenvError::InvalidDocument {
            path: self.file_path.clone(),
            reason,
        };

        let source = String::from_utf8(bytes).map_err(|e| invalid(e.to_string()))?;
        let parsed = self.parser.parse(&source).map_err(invalid)?;

        match untag(&parsed) {
            Value::Mapping(map) => Ok(map.clone()),
            _ => Err(invalid("document is not a mapping".to_string())),
        }
    }
}
