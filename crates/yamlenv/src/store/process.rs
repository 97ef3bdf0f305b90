//! The real process environment.

use super::EnvSource;

/// `EnvSource` backed by `std::env`.
///
/// Every loader in a process shares this table. Writers are expected to run
/// one at a time (typically once, at process start); callers embedding the
/// loader in a multi-threaded host must serialize mutations themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&self, name: &str, value: &str) {
        // SAFETY: the store validates `name` and `value` before calling, and
        // mutation of the process environment is single-writer by contract.
        unsafe {
            std::env::set_var(name, value);
        }
    }

    fn remove(&self, name: &str) {
        // SAFETY: see `set`.
        unsafe {
            std::env::remove_var(name);
        }
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}
