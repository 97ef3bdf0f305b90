//! Error types for loading and validating environment documents.
//!
//! Responsibilities:
//! - Define one variant per failure the loader, validator and facade raise.
//! - Render messages that name the offending path or variable.
//!
//! Does NOT handle:
//! - Recovery. Every error is returned to the caller that triggered it; the
//!   only silent cases (initial-load skip, clear while immutable) never
//!   produce an error at all.
//!
//! Invariants:
//! - Messages never include variable values, only names and paths.
//! - `Validation` keeps each failure string so callers need not parse the
//!   rendered message.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating the environment.
#[derive(Error, Debug)]
pub enum YamlenvError {
    /// The source file is missing, unreadable, or not a regular file.
    #[error("Unable to read the environment file at {}.", .path.display())]
    InvalidPath { path: PathBuf },

    /// The parser failed, or produced something other than a mapping.
    #[error("Input file does not contain valid YAML at {}: {reason}", .path.display())]
    InvalidDocument { path: PathBuf, reason: String },

    /// Two branches of the document flatten to the same variable name.
    #[error(
        "Duplicate environment variable \"{0}\" produced while flattening the document"
    )]
    DuplicateKey(String),

    /// The variable name cannot be stored in the environment: empty, or
    /// containing `=` or NUL.
    #[error("Invalid environment variable name \"{0}\"")]
    InvalidName(String),

    /// The value for the named variable contains NUL.
    #[error("Invalid value for environment variable \"{0}\": values cannot contain NUL")]
    InvalidValue(String),

    /// An explicit write targeted a variable that is already set while the
    /// loader is immutable.
    #[error(
        "Environment variables cannot be overwritten in an immutable environment. Tried overwriting \"{0}\""
    )]
    ImmutableOverwrite(String),

    /// One or more required variables failed a check.
    #[error(
        "One or more environment variables failed assertions: {}.",
        .failures.join(", ")
    )]
    Validation { failures: Vec<String> },

    /// A facade lookup was attempted before `load`, `overload` or `required`.
    #[error("Loader has not been initialized yet.")]
    LoaderNotInitialized,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl YamlenvError {
    /// The individual failure strings of a `Validation` error.
    pub fn failures(&self) -> &[String] {
        match self {
            YamlenvError::Validation { failures } => failures,
            _ => &[],
        }
    }
}
