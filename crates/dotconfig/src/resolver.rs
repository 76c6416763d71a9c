//! Resolution policy over the candidate sequence.
//!
//! Responsibilities:
//! - Probe candidates in order and stop at the first one that exists.
//! - Fall back to the first candidate when none exists.
//! - Fall back to a current-directory location when the sequence is empty.
//!
//! Does NOT handle:
//! - Generating candidates (see `candidates.rs`).
//! - Creating anything on disk (see `outcome.rs`).
//!
//! Invariants:
//! - Resolution never fails; missing home or XDG only prunes candidates.
//! - A later candidate never wins over an earlier existing one.
//! - No candidate after the winning one is generated or probed.
//! - Every call builds its own state; a `Resolver` holds only its lookups.

use std::path::PathBuf;

use crate::candidates::{Candidates, clean};
use crate::constants::DOT_PREFIX;
use crate::env::{Environment, SystemEnvironment};
use crate::name::FileName;
use crate::outcome::{ConfigDir, ConfigFile};
use crate::probe::{FileStatus, FsProbe, Probe};

/// Finds configuration locations using an injected environment and probe.
///
/// # Example
///
/// ```rust
/// use dotconfig::{FileStatus, FixedEnvironment, Resolver, testing::FakeFs};
///
/// let env = FixedEnvironment::empty().with_home_dir("/home/me");
/// let fs = FakeFs::new().with_file("/home/me/lib/myapp/config.yaml");
/// let resolver = Resolver::new(env, fs);
///
/// let found = resolver.file("myapp", "config.yaml");
/// assert_eq!(found.path.to_str(), Some("/home/me/lib/myapp/config.yaml"));
/// assert_eq!(found.status, FileStatus::FileExists);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver<E = SystemEnvironment, P = FsProbe> {
    env: E,
    probe: P,
}

impl Resolver {
    /// A resolver over the process environment and the real filesystem.
    pub fn system() -> Self {
        Self::default()
    }
}

impl<E: Environment, P: Probe> Resolver<E, P> {
    /// Creates a resolver from its two lookups.
    pub fn new(env: E, probe: P) -> Self {
        Self { env, probe }
    }

    /// The environment lookup in use.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// The existence probe in use.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// The directory search order for `app`, most preferred first.
    pub fn dir_candidates(&self, app: &str) -> Candidates<'_, E> {
        Candidates::dir(&self.env, app)
    }

    /// The file search order for `name` on behalf of `app`, most preferred first.
    ///
    /// `name` is reduced to its last component; `.` and `/` stand for `app`.
    pub fn file_candidates(&self, app: &str, name: &str) -> Candidates<'_, E> {
        Candidates::file(&self.env, app, FileName::normalize(app, name))
    }

    /// Finds the configuration directory for `app`.
    ///
    /// Returns the first existing candidate with `exists = true`. Otherwise
    /// returns the first candidate with `exists = false`. When there are no
    /// candidates at all, `.{app}` in the current directory is probed and
    /// returned with its actual state.
    pub fn dir(&self, app: &str) -> ConfigDir {
        let mut fallback: Option<PathBuf> = None;

        for candidate in self.dir_candidates(app) {
            let exists = self.probe.dir_exists(&candidate);
            tracing::trace!(candidate = %candidate.display(), exists, "Probed config dir candidate");
            if exists {
                tracing::debug!(app, path = %candidate.display(), "Found config directory");
                return ConfigDir {
                    path: candidate,
                    exists: true,
                };
            }
            if fallback.is_none() {
                fallback = Some(candidate);
            }
        }

        if let Some(path) = fallback {
            tracing::debug!(
                app,
                path = %path.display(),
                "No config directory found; using first candidate"
            );
            return ConfigDir {
                path,
                exists: false,
            };
        }

        let path = PathBuf::from(format!("{DOT_PREFIX}{app}"));
        let exists = self.probe.dir_exists(&path);
        tracing::debug!(
            app,
            path = %path.display(),
            exists,
            "No home or XDG directory available; using current directory"
        );
        ConfigDir { path, exists }
    }

    /// Finds the configuration file `name` for `app`.
    ///
    /// Returns the first candidate whose status is [`FileStatus::FileExists`].
    /// Otherwise returns the first candidate with the status it was probed
    /// with. When there are no candidates at all, `.{app}/{name}` is tried in
    /// the current directory and, failing that, `.{app}{ext}` is returned
    /// with its actual status.
    pub fn file(&self, app: &str, name: &str) -> ConfigFile {
        let name = FileName::normalize(app, name);
        let mut fallback: Option<ConfigFile> = None;

        for candidate in Candidates::file(&self.env, app, name.clone()) {
            let status = self.probe.file_status(&candidate);
            tracing::trace!(
                candidate = %candidate.display(),
                %status,
                "Probed config file candidate"
            );
            if status == FileStatus::FileExists {
                tracing::debug!(app, path = %candidate.display(), "Found config file");
                return ConfigFile {
                    path: candidate,
                    status,
                };
            }
            if fallback.is_none() {
                fallback = Some(ConfigFile {
                    path: candidate,
                    status,
                });
            }
        }

        if let Some(first) = fallback {
            tracing::debug!(
                app,
                path = %first.path.display(),
                status = %first.status,
                "No config file found; using first candidate"
            );
            return first;
        }

        let local_dir = PathBuf::from(format!("{DOT_PREFIX}{app}"));
        let path = clean(&local_dir.join(name.as_str()));
        let status = self.probe.file_status(&path);
        if status == FileStatus::FileExists {
            tracing::debug!(app, path = %path.display(), "Found config file in current directory");
            return ConfigFile { path, status };
        }

        let path = PathBuf::from(format!("{DOT_PREFIX}{app}{}", name.ext()));
        let status = self.probe.file_status(&path);
        tracing::debug!(
            app,
            path = %path.display(),
            %status,
            "No home or XDG directory available; using current directory"
        );
        ConfigFile { path, status }
    }
}
