//! Scenario tests for the loader.
//!
//! Responsibilities:
//! - Test the load pipeline against fixture documents.
//! - Test the immutable/mutable overwrite policy.
//! - Test raw document lookups after a load.
//!
//! Invariants:
//! - Tests use `serial_test` and the crate-wide lock because they mutate the
//!   process environment.
//! - Every test clears the variables it touches through the store, never by
//!   relying on a fresh process.
//! - Fixture files live in `tempfile` directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::MutexGuard;

use crate::store::EnvironmentStore;


/// Acquire the global environment lock.
pub fn env_lock() -> MutexGuard<'static, ()> {
    crate::test_util::env_guard()
}

/// Write a fixture document into `dir` and return its path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Remove `names` from the process environment.
pub fn clear_vars(names: &[&str]) {
    let store = EnvironmentStore::new();
    for name in names {
        store.clear(name);
    }
}

pub const VALID_ENV: &str = "\
FOO: bar
BAR: baz
SPACED: with spaces
EMPTY: null
NESTED:
  ARRAY_ONE: 1
  ARRAY_TWO: 2
MULTI:
  LEVEL:
    NESTED:
      ARRAY_ONE: 1
      ARRAY_TWO: 2
LIST: [1, 2]
";

pub const VALID_ENV_NAMES: &[&str] = &[
    "FOO",
    "BAR",
    "SPACED",
    "EMPTY",
    "NESTED_ARRAY_ONE",
    "NESTED_ARRAY_TWO",
    "MULTI_LEVEL_NESTED_ARRAY_ONE",
    "MULTI_LEVEL_NESTED_ARRAY_TWO",
    "LIST",
];
