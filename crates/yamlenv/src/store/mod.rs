//! The environment store: one logical variable table behind several mirrors.
//!
//! Responsibilities:
//! - Read a variable from the most request-scoped mirror that has it, falling
//!   back to the process environment.
//! - Write and clear variables through every mirror at once.
//! - Overwrite a host-level variable only when the host already defines it.
//!
//! Does NOT handle:
//! - Overwrite policy (immutable vs mutable); see the loader.
//! - Value sanitation; values arrive here as final strings.
//!
//! Invariants:
//! - After a successful `set`, every mirror and the process environment
//!   report the same value for the name.
//! - After `clear`, no mirror and not the process environment report the name.
//! - Names are validated before any mirror is touched, so a rejected write
//!   leaves every mirror unchanged.

mod mirror;
mod process;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::loader::YamlenvError;

pub use mirror::MapMirror;
pub use process::ProcessEnv;

/// One view of "the environment".
///
/// Implementations use interior mutability; the store decides when to call
/// them and keeps them consistent.
pub trait EnvSource: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;

    fn set(&self, name: &str, value: &str);

    fn remove(&self, name: &str);

    /// All variables visible through this source.
    fn vars(&self) -> Vec<(String, String)>;
}

/// Write-through store over the process environment and any extra mirrors.
#[derive(Clone)]
pub struct EnvironmentStore {
    /// Extra mirrors, most request-scoped first.
    mirrors: Vec<Arc<dyn EnvSource>>,
    /// Host-level environment (e.g. set by a parent server process).
    host: Option<Arc<dyn EnvSource>>,
    process: ProcessEnv,
}

impl Default for EnvironmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvironmentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentStore")
            .field("mirrors", &self.mirrors.len())
            .field("host", &self.host.is_some())
            .finish()
    }
}

impl EnvironmentStore {
    /// A store backed only by the process environment.
    pub fn new() -> Self {
        Self {
            mirrors: Vec::new(),
            host: None,
            process: ProcessEnv,
        }
    }

    /// Add a mirror. Mirrors added earlier take priority on reads.
    pub fn with_mirror(mut self, mirror: impl EnvSource + 'static) -> Self {
        self.mirrors.push(Arc::new(mirror));
        self
    }

    /// Attach the host-level environment.
    pub fn with_host(mut self, host: impl EnvSource + 'static) -> Self {
        self.host = Some(Arc::new(host));
        self
    }

    /// Look up `name`, preferring mirrors in priority order and falling back
    /// to the process environment.
    pub fn get(&self, name: &str) -> Option<String> {
        self.mirrors
            .iter()
            .find_map(|mirror| mirror.get(name))
            .or_else(|| self.process.get(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Write `value` to every mirror and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `YamlenvError::InvalidName` if the name is empty or contains
    /// `=` or NUL, and `YamlenvError::InvalidValue` if the value contains
    /// NUL. Nothing is written then.
    pub fn set(&self, name: &str, value: &str) -> Result<(), YamlenvError> {
        check_storable(name, value)?;

        if let Some(host) = self.host.as_ref().filter(|host| host.get(name).is_some()) {
            host.set(name, value);
        }

        self.process.set(name, value);
        for mirror in &self.mirrors {
            mirror.set(name, value);
        }
        Ok(())
    }

    /// Remove `name` from every mirror and the process environment.
    ///
    /// The host-level environment is left alone; the host owns it.
    pub fn clear(&self, name: &str) {
        if !is_valid_name(name) {
            return;
        }
        self.process.remove(name);
        for mirror in &self.mirrors {
            mirror.remove(name);
        }
    }

    /// Every visible variable. Mirrors shadow the process environment, and
    /// higher-priority mirrors shadow lower ones.
    pub fn snapshot(&self) -> IndexMap<String, String> {
        let mut vars: IndexMap<String, String> = self.process.vars().into_iter().collect();
        for mirror in self.mirrors.iter().rev() {
            vars.extend(mirror.vars());
        }
        vars
    }
}

/// Whether `name = value` can be written to the process environment.
pub(crate) fn check_storable(name: &str, value: &str) -> Result<(), YamlenvError> {
    if !is_valid_name(name) {
        return Err(YamlenvError::InvalidName(name.to_string()));
    }
    if value.contains('\0') {
        return Err(YamlenvError::InvalidValue(name.to_string()));
    }
    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0'])
}
