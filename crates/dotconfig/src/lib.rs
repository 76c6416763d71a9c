//! Locate an application's configuration directory or file.
//!
//! This crate answers "where does (or should) my config live" by searching
//! a fixed list of conventional locations and returning the first one that
//! exists, or a sensible place to create one when none does.
//!
//! Directories are searched in this order:
//!
//! 1. `$XDG_CONFIG_HOME/<app>` (if `XDG_CONFIG_HOME` is set)
//! 2. `$HOME/.config/<app>` (if `XDG_CONFIG_HOME` is not set)
//! 3. `$HOME/lib/<app>` (Plan9 style)
//! 4. `$HOME/.<app>`
//! 5. `.<app>` in the current directory, only when nothing above applies
//!
//! Files use the same directories with the file name appended, plus
//! `$HOME/.<app><ext>` after `$HOME/.<app>/<name>`. The current-directory
//! fallback for files is `.<app>/<name>`, then `.<app><ext>`.
//!
//! ```rust,no_run
//! let dir = dotconfig::dir("myapp");
//! dir.create_if_missing()?;
//!
//! let file = dotconfig::file("myapp", "config.yaml");
//! file.create_parent_if_missing()?;
//! println!("{} ({})", file.path.display(), file.status);
//! # Ok::<(), dotconfig::DotconfigError>(())
//! ```

mod candidates;
pub mod constants;
mod env;
mod error;
pub mod name;
mod outcome;
mod probe;
mod resolver;
pub mod testing;

pub use candidates::Candidates;
pub use env::{Environment, FixedEnvironment, SystemEnvironment};
pub use error::DotconfigError;
pub use outcome::{ConfigDir, ConfigFile};
pub use probe::{FileStatus, FsProbe, Probe};
pub use resolver::Resolver;

/// Finds the configuration directory for `app` using the process
/// environment and the real filesystem.
pub fn dir(app: &str) -> ConfigDir {
    Resolver::system().dir(app)
}

/// Finds the configuration file `name` for `app` using the process
/// environment and the real filesystem.
///
/// `name` is reduced to its last path component. Passing `.` or `/` looks
/// for a file named after `app` itself.
pub fn file(app: &str, name: &str) -> ConfigFile {
    Resolver::system().file(app, name)
}
