//! Entry point tying file resolution, loading and validation together.
//!
//! Responsibilities:
//! - Resolve a directory and optional file name into the document path.
//! - Build a fresh `Loader` per `load` (immutable) or `overload` (mutable).
//! - Expose `required`, environment and raw-document lookups.
//!
//! Does NOT handle:
//! - Any of the loading or validation rules themselves.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::constants::DEFAULT_FILE_NAME;
use crate::loader::{Loader, YamlenvError};
use crate::store::EnvironmentStore;
use crate::validator::Validator;

/// Loads `env.yaml` (or another file) from a directory into the environment.
///
/// ```no_run
/// use yamlenv::Yamlenv;
///
/// let mut env = Yamlenv::new("config");
/// env.load()?;
/// env.required(["DATABASE_URL", "PORT"])?
///     .not_empty()?
///     .is_integer()?;
/// # Ok::<(), yamlenv::YamlenvError>(())
/// ```
#[derive(Debug)]
pub struct Yamlenv {
    file_path: PathBuf,
    upper_case: bool,
    store: EnvironmentStore,
    loader: Option<Loader>,
}

impl Yamlenv {
    /// Use `env.yaml` inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_file(dir, None)
    }

    /// Use `file` inside `dir`, or `env.yaml` when `file` is `None`.
    pub fn with_file(dir: impl AsRef<Path>, file: Option<&str>) -> Self {
        Self {
            file_path: resolve_file_path(dir.as_ref(), file),
            upper_case: false,
            store: EnvironmentStore::new(),
            loader: None,
        }
    }

    /// Upper-case flattened names.
    pub fn with_upper_case(mut self, upper_case: bool) -> Self {
        self.upper_case = upper_case;
        self
    }

    /// Use `store` instead of the bare process environment.
    pub fn with_store(mut self, store: EnvironmentStore) -> Self {
        self.store = store;
        self
    }

    /// Load the file, keeping any variables that are already set.
    pub fn load(&mut self) -> Result<IndexMap<String, String>, YamlenvError> {
        self.initialize(false).load()
    }

    /// Load the file, overwriting variables that are already set.
    pub fn overload(&mut self) -> Result<IndexMap<String, String>, YamlenvError> {
        self.initialize(true).load()
    }

    /// Require `names` to be set and return a validator for further checks.
    ///
    /// Reuses the loader from the last `load` or `overload`, so the raw
    /// document stays available and the loader keeps that call's mutability
    /// (mutable after `overload`). Works without a prior `load`; an
    /// immutable, unloaded loader is created and the names are checked
    /// against the environment as it stands.
    pub fn required<I, S>(&mut self, names: I) -> Result<Validator<'_>, YamlenvError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.loader.is_none() {
            self.initialize(false);
        }
        Validator::new(names, self.loader()?)
    }

    /// The environment value of `name`, or `default` when unset.
    pub fn get_env(&self, name: &str, default: &str) -> Result<String, YamlenvError> {
        Ok(self
            .loader()?
            .get_environment_variable(name)
            .unwrap_or_else(|| default.to_string()))
    }

    /// The raw document value at dotted `path`, or `default` when absent.
    pub fn get_raw_env(&self, path: &str, default: Value) -> Result<Value, YamlenvError> {
        Ok(self
            .loader()?
            .get_yaml_value(path)
            .cloned()
            .unwrap_or(default))
    }

    /// The loader built by the last `load`, `overload` or `required`.
    pub fn loader(&self) -> Result<&Loader, YamlenvError> {
        self.loader.as_ref().ok_or(YamlenvError::LoaderNotInitialized)
    }

    pub fn loader_mut(&mut self) -> Result<&mut Loader, YamlenvError> {
        self.loader.as_mut().ok_or(YamlenvError::LoaderNotInitialized)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn initialize(&mut self, overload: bool) -> &mut Loader {
        let loader = Loader::new(self.file_path.clone())
            .with_immutable(!overload)
            .with_upper_case(self.upper_case)
            .with_store(self.store.clone());
        self.loader.insert(loader)
    }
}

/// `dir` joined with `file` (default `env.yaml`). Trailing separators on
/// `dir` are ignored.
fn resolve_file_path(dir: &Path, file: Option<&str>) -> PathBuf {
    dir.join(file.unwrap_or(DEFAULT_FILE_NAME))
}
