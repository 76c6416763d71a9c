//! Error types for the creation helpers.
//!
//! Resolution itself never fails; only the opt-in helpers that create
//! directories on disk return these errors.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while preparing a resolved location on disk.
#[derive(Error, Debug)]
pub enum DotconfigError {
    #[error("Failed to create config directory at {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DotconfigError {
    /// The path the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            DotconfigError::CreateDir { path, .. } => path,
        }
    }
}
