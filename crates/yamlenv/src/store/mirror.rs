//! In-memory mirrors of the environment.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use super::EnvSource;

/// An in-memory view of the environment, such as a request-scoped or
/// server-context table kept by a hosting runtime.
///
/// Clones share the same table, so the host can keep one handle while the
/// store writes through another.
#[derive(Debug, Default, Clone)]
pub struct MapMirror {
    vars: Arc<RwLock<IndexMap<String, String>>>,
}

impl MapMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mirror pre-populated with `vars`.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, String>> {
        self.vars.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, String>> {
        self.vars
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EnvSource for MapMirror {
    fn get(&self, name: &str) -> Option<String> {
        self.read().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.write().insert(name.to_string(), value.to_string());
    }

    fn remove(&self, name: &str) {
        self.write().shift_remove(name);
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
