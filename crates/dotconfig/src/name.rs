//! File name normalization for file lookups.
//!
//! Responsibilities:
//! - Reduce a caller-supplied file name to its final path component.
//! - Substitute the application name for the sentinel names `.` and `/`.
//! - Derive the extension used by the `.{app}{ext}` candidates.
//!
//! Does NOT handle:
//! - Validating that names are filesystem-safe (caller's responsibility).
//! - Any filesystem access.
//!
//! Invariants:
//! - The extension is always taken from the normalized name, never from the
//!   raw input, so `.` and `/` yield the extension of the application name.

use std::path::is_separator;

use crate::constants::APP_NAME_SENTINELS;

/// Returns the last element of `path`.
///
/// Trailing separators are removed first. An empty input yields `.` and an
/// input made only of separators yields `/`.
pub fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }

    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return "/";
    }

    match trimmed.rfind(is_separator) {
        Some(idx) => {
            // Separators are ASCII, so idx + 1 is a char boundary.
            &trimmed[idx + 1..]
        }
        None => trimmed,
    }
}

/// Returns the extension of `path`: the suffix from the final `.` of its
/// last element, dot included, or an empty string when there is none.
///
/// `config.yaml` gives `.yaml`; `archive.tar.gz` gives `.gz`; `.env` gives
/// `.env`; `myapp` gives the empty string.
pub fn extension(path: &str) -> &str {
    for (idx, ch) in path.char_indices().rev() {
        if is_separator(ch) {
            break;
        }
        if ch == '.' {
            return &path[idx..];
        }
    }
    ""
}

/// A file name after normalization, ready to be appended to candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName {
    name: String,
    ext: String,
}

impl FileName {
    /// Normalizes `name` for a lookup on behalf of `app`.
    pub fn normalize(app: &str, name: &str) -> Self {
        let base = base_name(name);
        let name = if APP_NAME_SENTINELS.contains(&base) {
            app
        } else {
            base
        };

        Self {
            ext: extension(name).to_string(),
            name: name.to_string(),
        }
    }

    /// The effective file name.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The extension of the effective file name, including the leading dot.
    pub fn ext(&self) -> &str {
        &self.ext
    }
}
