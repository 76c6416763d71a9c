//! Centralized constants for configuration path resolution.
//!
//! Every literal that shapes a candidate path lives here so the search order
//! documented in the crate root can be audited in one place.

// =============================================================================
// Environment
// =============================================================================

/// Environment variable naming the XDG base directory for user configuration.
///
/// Unset and empty are treated the same: not configured.
pub const XDG_CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";

/// Environment variable naming the user's home directory on Unix.
///
/// Unset or empty means the home lookup failed.
pub const HOME_ENV: &str = "HOME";

// =============================================================================
// Home-relative path segments
// =============================================================================

/// Conventional XDG fallback directory under the home directory.
pub const DOT_CONFIG_DIR: &str = ".config";

/// Plan9-style per-user library directory under the home directory.
pub const PLAN9_LIB_DIR: &str = "lib";

/// Prefix for dot-directories and dot-files (`.myapp`, `.myapp.yaml`).
pub const DOT_PREFIX: &str = ".";

// =============================================================================
// File name sentinels
// =============================================================================

/// Base names that mean "use the application name as the file name".
pub const APP_NAME_SENTINELS: &[&str] = &[".", "/"];

/// Upper bound on the number of candidates any search yields.
pub const MAX_CANDIDATES: usize = 4;
