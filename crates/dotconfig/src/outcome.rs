//! Resolution outcomes.
//!
//! Responsibilities:
//! - Carry the chosen path and what was found there.
//! - Offer opt-in helpers that create the missing directory for a result.
//!
//! Does NOT handle:
//! - Writing configuration content.
//!
//! Invariants:
//! - Outcomes are plain values; nothing here caches or re-resolves.

use std::path::{Path, PathBuf};

use crate::error::DotconfigError;
use crate::probe::{FileStatus, parent_dir};

/// Result of a directory lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    /// The chosen directory.
    pub path: PathBuf,
    /// Whether it existed as a directory when probed.
    pub exists: bool,
}

impl ConfigDir {
    /// The chosen directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Splits into `(path, exists)`.
    pub fn into_parts(self) -> (PathBuf, bool) {
        (self.path, self.exists)
    }

    /// Creates the directory (and any parents) if it did not exist.
    ///
    /// # Errors
    /// Returns [`DotconfigError::CreateDir`] if the directory cannot be created.
    pub fn create_if_missing(&self) -> Result<&Path, DotconfigError> {
        if !self.exists {
            create_dir_all(&self.path)?;
        }
        Ok(&self.path)
    }
}

/// Result of a file lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// The chosen file path.
    pub path: PathBuf,
    /// What was on disk when probed.
    pub status: FileStatus,
}

impl ConfigFile {
    /// The chosen file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Splits into `(path, status)`.
    pub fn into_parts(self) -> (PathBuf, FileStatus) {
        (self.path, self.status)
    }

    /// Creates the file's containing directory if neither it nor the file existed.
    ///
    /// The file itself is left for the caller to write.
    ///
    /// # Errors
    /// Returns [`DotconfigError::CreateDir`] if the directory cannot be created.
    pub fn create_parent_if_missing(&self) -> Result<&Path, DotconfigError> {
        if self.status == FileStatus::NotExists {
            create_dir_all(parent_dir(&self.path))?;
        }
        Ok(&self.path)
    }
}

fn create_dir_all(path: &Path) -> Result<(), DotconfigError> {
    std::fs::create_dir_all(path).map_err(|source| DotconfigError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Created config directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_into_parts() {
        let dir = ConfigDir {
            path: PathBuf::from("/x/app"),
            exists: true,
        };
        assert_eq!(dir.into_parts(), (PathBuf::from("/x/app"), true));

        let file = ConfigFile {
            path: PathBuf::from("/x/app/c.toml"),
            status: FileStatus::BaseExists,
        };
        assert_eq!(
            file.into_parts(),
            (PathBuf::from("/x/app/c.toml"), FileStatus::BaseExists)
        );
    }

    #[test]
    fn test_create_if_missing_creates_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("a").join("b");
        let dir = ConfigDir {
            path: target.clone(),
            exists: false,
        };

        assert_eq!(dir.create_if_missing().unwrap(), target.as_path());
        assert!(target.is_dir());
    }

    #[test]
    fn test_create_if_missing_skips_existing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("never");
        let dir = ConfigDir {
            path: missing.clone(),
            exists: true,
        };

        dir.create_if_missing().unwrap();
        assert!(!missing.exists());
    }

    #[test]
    fn test_create_if_missing_reports_path_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let dir = ConfigDir {
            path: blocker.join("sub"),
            exists: false,
        };

        let err = dir.create_if_missing().unwrap_err();
        assert!(matches!(err, DotconfigError::CreateDir { .. }));
        assert_eq!(err.path(), blocker.join("sub").as_path());
    }

    #[test]
    fn test_create_parent_if_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app").join("config.yaml");
        let file = ConfigFile {
            path: path.clone(),
            status: FileStatus::NotExists,
        };

        file.create_parent_if_missing().unwrap();
        assert!(temp_dir.path().join("app").is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn test_create_parent_if_missing_noop_when_base_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ghost").join("config.yaml");
        let file = ConfigFile {
            path,
            status: FileStatus::BaseExists,
        };

        file.create_parent_if_missing().unwrap();
        assert!(!temp_dir.path().join("ghost").exists());
    }
}
