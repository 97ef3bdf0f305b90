//! Loader construction and option toggles.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_yaml::Mapping;

use crate::document::{DocumentParser, YamlParser};
use crate::store::EnvironmentStore;

/// Loads one environment document and applies it to an `EnvironmentStore`.
pub struct Loader {
    pub(super) file_path: PathBuf,
    pub(super) immutable: bool,
    pub(super) upper_case: bool,
    pub(super) store: EnvironmentStore,
    pub(super) parser: Arc<dyn DocumentParser>,
    /// The parsed document; empty until `load()` succeeds in parsing.
    pub(super) document: Mapping,
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("file_path", &self.file_path)
            .field("immutable", &self.immutable)
            .field("upper_case", &self.upper_case)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl Loader {
    /// Create a mutable loader for `file_path` over the process environment.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            immutable: false,
            upper_case: false,
            store: EnvironmentStore::new(),
            parser: Arc::new(YamlParser),
            document: Mapping::new(),
        }
    }

    /// Set whether existing variables are protected from overwrites.
    pub fn with_immutable(mut self, immutable: bool) -> Self {
        self.immutable = immutable;
        self
    }

    /// Set whether flattened names are upper-cased.
    pub fn with_upper_case(mut self, upper_case: bool) -> Self {
        self.upper_case = upper_case;
        self
    }

    /// Use `store` instead of the bare process environment.
    pub fn with_store(mut self, store: EnvironmentStore) -> Self {
        self.store = store;
        self
    }

    /// Use a different document parser.
    pub fn with_parser(mut self, parser: impl DocumentParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Once set, an environment variable can no longer be overwritten.
    pub fn make_immutable(&mut self) {
        self.immutable = true;
    }

    /// Allow environment variables to be overwritten.
    pub fn make_mutable(&mut self) {
        self.immutable = false;
    }

    /// Upper-case flattened names on subsequent loads.
    pub fn force_upper_case(&mut self) {
        self.upper_case = true;
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    pub fn is_upper_case(&self) -> bool {
        self.upper_case
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn store(&self) -> &EnvironmentStore {
        &self.store
    }
}
