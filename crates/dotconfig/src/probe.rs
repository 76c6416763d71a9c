//! Existence checks applied to candidate paths.
//!
//! Responsibilities:
//! - Define the tri-state [`FileStatus`] reported for file candidates.
//! - Define the [`Probe`] seam and its filesystem-backed implementation.
//!
//! Does NOT handle:
//! - Deciding which candidate wins (see `resolver.rs`).
//!
//! Invariants:
//! - Exactly one [`FileStatus`] holds for any path.
//! - Checks follow symlinks; a dangling link does not exist.

use std::fmt;
use std::path::Path;

/// What is on disk at a file candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileStatus {
    /// Neither the file nor its containing directory exists.
    NotExists,
    /// The containing directory exists but the file does not.
    BaseExists,
    /// The file exists.
    FileExists,
}

impl FileStatus {
    /// Returns the string label for this status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FileStatus::NotExists => "not-exists",
            FileStatus::BaseExists => "base-exists",
            FileStatus::FileExists => "file-exists",
        }
    }

    /// True when the file itself exists.
    pub const fn exists(&self) -> bool {
        matches!(self, FileStatus::FileExists)
    }

    /// True when at least the containing directory exists.
    pub const fn base_exists(&self) -> bool {
        !matches!(self, FileStatus::NotExists)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Existence checks used while resolving.
///
/// Injected into a [`Resolver`](crate::Resolver) so tests can describe a
/// filesystem without creating one.
pub trait Probe {
    /// True iff `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Reports whether `path` exists, or failing that its parent directory.
    fn file_status(&self, path: &Path) -> FileStatus;
}

impl<P: Probe + ?Sized> Probe for &P {
    fn dir_exists(&self, path: &Path) -> bool {
        (**self).dir_exists(path)
    }

    fn file_status(&self, path: &Path) -> FileStatus {
        (**self).file_status(path)
    }
}

/// Probe backed by `std::fs::metadata`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl Probe for FsProbe {
    fn dir_exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok_and(|meta| meta.is_dir())
    }

    fn file_status(&self, path: &Path) -> FileStatus {
        if std::fs::metadata(path).is_ok() {
            return FileStatus::FileExists;
        }
        if std::fs::metadata(parent_dir(path)).is_ok() {
            return FileStatus::BaseExists;
        }
        FileStatus::NotExists
    }
}

/// The directory containing `path`.
///
/// A bare relative name lives in the current directory, so its parent is `.`.
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_status_labels() {
        assert_eq!(FileStatus::NotExists.to_string(), "not-exists");
        assert_eq!(FileStatus::BaseExists.to_string(), "base-exists");
        assert_eq!(FileStatus::FileExists.to_string(), "file-exists");
    }

    #[test]
    fn test_file_status_predicates() {
        assert!(!FileStatus::NotExists.exists());
        assert!(!FileStatus::NotExists.base_exists());
        assert!(!FileStatus::BaseExists.exists());
        assert!(FileStatus::BaseExists.base_exists());
        assert!(FileStatus::FileExists.exists());
        assert!(FileStatus::FileExists.base_exists());
    }

    #[test]
    fn test_parent_dir_of_bare_name_is_current_dir() {
        assert_eq!(parent_dir(Path::new(".myapp.yaml")), Path::new("."));
        assert_eq!(parent_dir(Path::new(".myapp/config")), Path::new(".myapp"));
        assert_eq!(parent_dir(Path::new("/")), Path::new("/"));
    }

    #[test]
    fn test_fs_probe_dir_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("plain");
        std::fs::write(&file_path, "").unwrap();

        assert!(FsProbe.dir_exists(temp_dir.path()));
        assert!(!FsProbe.dir_exists(&file_path));
        assert!(!FsProbe.dir_exists(&temp_dir.path().join("missing")));
    }

    #[test]
    fn test_fs_probe_file_status() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yaml");
        std::fs::write(&file_path, "key: value").unwrap();

        assert_eq!(FsProbe.file_status(&file_path), FileStatus::FileExists);
        assert_eq!(
            FsProbe.file_status(&temp_dir.path().join("other.yaml")),
            FileStatus::BaseExists
        );
        assert_eq!(
            FsProbe.file_status(&temp_dir.path().join("missing").join("other.yaml")),
            FileStatus::NotExists
        );
    }

    #[test]
    fn test_fs_probe_directory_counts_as_file() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(FsProbe.file_status(temp_dir.path()), FileStatus::FileExists);
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_probe_follows_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real");
        std::fs::create_dir(&target).unwrap();
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        let dangling = temp_dir.path().join("dangling");
        std::os::unix::fs::symlink(temp_dir.path().join("gone"), &dangling).unwrap();

        assert!(FsProbe.dir_exists(&link));
        assert!(!FsProbe.dir_exists(&dangling));
        assert_eq!(FsProbe.file_status(&dangling), FileStatus::BaseExists);
    }
}
