//! Loading a YAML document into the environment.
//!
//! Responsibilities:
//! - Check the source file, parse it, flatten it, and write every pair to the
//!   environment store.
//! - Enforce the immutable/mutable overwrite policy.
//! - Keep the parsed document for dotted-path raw lookups.
//!
//! Does NOT handle:
//! - Resolving a directory and file name into a path (see `facade.rs`).
//! - Checking required variables (see `validator.rs`).
//!
//! Invariants / Assumptions:
//! - An immutable initial load never replaces a variable that was already set.
//! - An explicit write to an already-set variable while immutable is an error.
//! - Clearing while immutable is a silent no-op.
//! - Toggling mutability only affects later writes.

mod builder;
mod env;
mod error;
mod source;

pub use builder::Loader;
pub use error::YamlenvError;

#[cfg(test)]
mod tests;
