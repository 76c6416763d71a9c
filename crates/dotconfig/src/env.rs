//! Environment lookups feeding a search.
//!
//! Responsibilities:
//! - Read the XDG configuration base (`XDG_CONFIG_HOME`).
//! - Determine the user's home directory.
//!
//! Does NOT handle:
//! - Building candidate paths (see `candidates.rs`).
//! - Filesystem existence checks (see `probe.rs`).
//!
//! Invariants:
//! - An unset or empty `XDG_CONFIG_HOME` is reported as `None`.
//! - The value is not trimmed: a whitespace-only value is a real directory name.
//! - Home lookup failure is reported as `None`, never as an error.
//! - On Unix an unset or empty `HOME` is a lookup failure.

use std::path::PathBuf;

use crate::constants::{HOME_ENV, XDG_CONFIG_HOME_ENV};

/// Source of the two environment inputs a search depends on.
///
/// Implementations are injected into a [`Resolver`](crate::Resolver), so
/// tests can pin the environment without mutating process state.
pub trait Environment {
    /// The configured XDG base directory, or `None` when not configured.
    fn xdg_config_home(&self) -> Option<PathBuf>;

    /// The user's home directory, or `None` when it cannot be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn xdg_config_home(&self) -> Option<PathBuf> {
        (**self).xdg_config_home()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn xdg_config_home(&self) -> Option<PathBuf> {
        std::env::var_os(XDG_CONFIG_HOME_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        // Unset or empty HOME means no home directory, even if the user
        // database has an entry.
        let home_unset =
            cfg!(unix) && std::env::var_os(HOME_ENV).is_none_or(|value| value.is_empty());
        let home = if home_unset {
            None
        } else {
            directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
        };
        if home.is_none() {
            tracing::debug!("Could not determine home directory; skipping home candidates");
        }
        home
    }
}

/// An environment with fixed values.
///
/// Useful for tests and for embedders that already know where home is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedEnvironment {
    /// Value reported for the XDG base directory. An empty path counts as unset.
    pub xdg_config_home: Option<PathBuf>,
    /// Value reported for the home directory.
    pub home_dir: Option<PathBuf>,
}

impl FixedEnvironment {
    /// An environment with neither an XDG base nor a home directory.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the XDG base directory.
    pub fn with_xdg_config_home(mut self, path: impl Into<PathBuf>) -> Self {
        self.xdg_config_home = Some(path.into());
        self
    }

    /// Sets the home directory.
    pub fn with_home_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(path.into());
        self
    }
}

impl Environment for FixedEnvironment {
    fn xdg_config_home(&self) -> Option<PathBuf> {
        self.xdg_config_home
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }
}
