//! In-memory probes for tests.
//!
//! Lets callers describe a filesystem as a set of paths and observe which
//! candidates were probed, without creating anything on disk.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::probe::{FileStatus, Probe, parent_dir};

/// A filesystem made of listed directories and files.
///
/// Adding a path also adds its ancestors as directories. The current
/// directory `.` always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeFs {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
}

impl Default for FakeFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeFs {
    /// A filesystem containing only the current directory.
    pub fn new() -> Self {
        let mut dirs = BTreeSet::new();
        dirs.insert(PathBuf::from("."));
        Self {
            dirs,
            files: BTreeSet::new(),
        }
    }

    /// Adds a directory and its ancestors.
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.dirs.insert(path);
        self
    }

    /// Adds a regular file and its ancestor directories.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.files.insert(path);
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
    }
}

impl Probe for FakeFs {
    fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn file_status(&self, path: &Path) -> FileStatus {
        if self.files.contains(path) || self.dirs.contains(path) {
            FileStatus::FileExists
        } else if self.dirs.contains(parent_dir(path)) {
            FileStatus::BaseExists
        } else {
            FileStatus::NotExists
        }
    }
}

/// Wraps a probe and records every path it is asked about.
#[derive(Debug, Default)]
pub struct CountingProbe<P> {
    inner: P,
    probed: RefCell<Vec<PathBuf>>,
}

impl<P: Probe> CountingProbe<P> {
    /// Wraps `inner`.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            probed: RefCell::new(Vec::new()),
        }
    }

    /// Number of probe calls so far.
    pub fn calls(&self) -> usize {
        self.probed.borrow().len()
    }

    /// Paths probed so far, in call order.
    pub fn probed(&self) -> Vec<PathBuf> {
        self.probed.borrow().clone()
    }

    fn record(&self, path: &Path) {
        self.probed.borrow_mut().push(path.to_path_buf());
    }
}

impl<P: Probe> Probe for CountingProbe<P> {
    fn dir_exists(&self, path: &Path) -> bool {
        self.record(path);
        self.inner.dir_exists(path)
    }

    fn file_status(&self, path: &Path) -> FileStatus {
        self.record(path);
        self.inner.file_status(path)
    }
}
