//! Ordered candidate paths for a lookup.
//!
//! Responsibilities:
//! - Produce the search order for a directory or file lookup, most preferred first.
//! - Defer every environment lookup until the candidate that needs it is requested.
//!
//! Does NOT handle:
//! - Existence checks or choosing a winner (see `resolver.rs`).
//! - The current-directory fallback used when nothing is yielded (see `resolver.rs`).
//!
//! Invariants:
//! - For fixed environment answers the sequence is identical on every call.
//! - Dropping the iterator after any item performs no further lookups.
//! - The home directory is looked up at most once per sequence.
//! - Duplicates are not removed.
//!
//! Directory order with `XDG_CONFIG_HOME` set:
//! `{xdg}/{app}`, `{home}/lib/{app}`, `{home}/.{app}`.
//! Without it: `{home}/.config/{app}`, `{home}/lib/{app}`, `{home}/.{app}`.
//! File order appends `/{name}` to each of those and ends with `{home}/.{app}{ext}`.
//! Home-relative entries are omitted when the home directory is unknown.
//! Every yielded path is lexically cleaned (see [`clean`]).

use std::iter::FusedIterator;
use std::path::{Component, Path, PathBuf};

use crate::constants::{DOT_CONFIG_DIR, DOT_PREFIX, MAX_CANDIDATES, PLAN9_LIB_DIR};
use crate::env::Environment;
use crate::name::FileName;

#[derive(Debug, Clone)]
enum Target {
    Dir,
    File(FileName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    First,
    Plan9Lib,
    DotDir,
    DotFile,
    Done,
}

/// Lazy iterator over the candidate paths of one lookup.
///
/// Created by [`Resolver::dir_candidates`](crate::Resolver::dir_candidates)
/// and [`Resolver::file_candidates`](crate::Resolver::file_candidates).
#[derive(Debug)]
pub struct Candidates<'a, E: ?Sized> {
    env: &'a E,
    app: String,
    target: Target,
    stage: Stage,
    home: Option<Option<PathBuf>>,
}

impl<'a, E: Environment + ?Sized> Candidates<'a, E> {
    pub(crate) fn dir(env: &'a E, app: &str) -> Self {
        Self::with_target(env, app, Target::Dir)
    }

    pub(crate) fn file(env: &'a E, app: &str, name: FileName) -> Self {
        Self::with_target(env, app, Target::File(name))
    }

    fn with_target(env: &'a E, app: &str, target: Target) -> Self {
        Self {
            env,
            app: app.to_string(),
            target,
            stage: Stage::First,
            home: None,
        }
    }

    /// Home directory, looked up on first use.
    fn home(&mut self) -> Option<PathBuf> {
        if self.home.is_none() {
            self.home = Some(self.env.home_dir());
        }
        self.home.clone().flatten()
    }

    /// Appends the file name in file mode; directories pass through.
    fn in_dir(&self, dir: PathBuf) -> PathBuf {
        match &self.target {
            Target::Dir => dir,
            Target::File(name) => dir.join(name.as_str()),
        }
    }

    fn dot_app(&self, home: &Path) -> PathBuf {
        home.join(format!("{DOT_PREFIX}{}", self.app))
    }

    fn finish(&mut self) -> Option<PathBuf> {
        self.stage = Stage::Done;
        None
    }

    fn advance(&mut self) -> Option<PathBuf> {
        match self.stage {
            Stage::First => {
                let base = match self.env.xdg_config_home() {
                    Some(xdg) => xdg,
                    None => match self.home() {
                        Some(home) => home.join(DOT_CONFIG_DIR),
                        None => return self.finish(),
                    },
                };
                self.stage = Stage::Plan9Lib;
                Some(self.in_dir(base.join(&self.app)))
            }
            Stage::Plan9Lib => {
                let Some(home) = self.home() else {
                    return self.finish();
                };
                self.stage = Stage::DotDir;
                Some(self.in_dir(home.join(PLAN9_LIB_DIR).join(&self.app)))
            }
            Stage::DotDir => {
                let Some(home) = self.home() else {
                    return self.finish();
                };
                self.stage = match self.target {
                    Target::Dir => Stage::Done,
                    Target::File(_) => Stage::DotFile,
                };
                Some(self.in_dir(self.dot_app(&home)))
            }
            Stage::DotFile => {
                self.stage = Stage::Done;
                let home = self.home()?;
                let Target::File(name) = &self.target else {
                    return None;
                };
                Some(home.join(format!("{DOT_PREFIX}{}{}", self.app, name.ext())))
            }
            Stage::Done => None,
        }
    }
}

impl<E: Environment + ?Sized> Iterator for Candidates<'_, E> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        self.advance().map(|path| clean(&path))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.stage {
            Stage::Done => (0, Some(0)),
            _ => (0, Some(MAX_CANDIDATES)),
        }
    }
}

impl<E: Environment + ?Sized> FusedIterator for Candidates<'_, E> {}

/// Lexically simplifies a joined path without touching the filesystem.
///
/// Drops `.` segments, removes a `..` together with the name before it and
/// drops `..` directly under the root. A leading `..` in a relative path is
/// kept, and an empty result becomes `.`. Symlinks are not resolved.
pub(crate) fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.into_iter().collect()
}
