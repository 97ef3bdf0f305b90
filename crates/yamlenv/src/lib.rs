//! Load nested YAML configuration into the process environment.
//!
//! This crate flattens a structured document into `NAME=value` pairs and
//! writes them to the process environment (and any extra mirrors the host
//! exposes), with immutable/mutable overwrite policies and a chainable
//! validator for required variables.

pub mod constants;
pub mod document;
mod facade;
pub mod flatten;
mod loader;
pub mod store;
mod validator;

pub use document::{DocumentParser, YamlParser};
pub use facade::Yamlenv;
pub use flatten::{FlatVars, Flattener};
pub use loader::{Loader, YamlenvError};
pub use store::{EnvSource, EnvironmentStore, MapMirror, ProcessEnv};
pub use validator::Validator;

/// Result alias used throughout the crate.
pub type Result<T, E = YamlenvError> = std::result::Result<T, E>;

/// Re-exported so callers can inspect raw document values without adding
/// `serde_yaml` themselves.
pub use serde_yaml::Value;
