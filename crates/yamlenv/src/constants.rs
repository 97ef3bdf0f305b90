//! Centralized constants for yamlenv.
//!
//! Defaults shared by the loader, the flattener and the facade live here to
//! avoid scattering literal strings across modules.

// =============================================================================
// File Resolution
// =============================================================================

/// File name used by the facade when none is supplied.
pub const DEFAULT_FILE_NAME: &str = "env.yaml";

// =============================================================================
// Flattening
// =============================================================================

/// Separator placed between a parent key and a child key when flattening.
pub const KEY_SEPARATOR: &str = "_";

/// Separator for dotted-path lookups into the raw document.
pub const PATH_SEPARATOR: char = '.';

/// Encoding used for list values and empty collections.
pub const EMPTY_LIST_ENCODING: &str = "[]";

// =============================================================================
// Value Sanitation
// =============================================================================

/// Text written for a boolean `true` value.
pub const TRUE_TEXT: &str = "true";

/// Text written for a boolean `false` value.
pub const FALSE_TEXT: &str = "false";
