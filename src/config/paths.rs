//! Home-directory shorthand expansion for configuration paths.

use std::{
    env,
    path::{Path, PathBuf},
};

/// Explicit home-directory value used to expand the `~/` shorthand.
///
/// The environment is read once at construction rather than at every call,
/// so tests can inject a fixed directory.
#[derive(Debug, Clone)]
pub struct HomeDir {
    home: Option<PathBuf>,
}

impl HomeDir {
    /// Build from an explicit optional home directory.
    pub fn new(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    /// Build from the `HOME` environment variable.
    pub fn from_env() -> Self {
        Self::new(env::var_os("HOME").map(PathBuf::from))
    }

    /// Expand a leading `~/` to the home directory, leaving the remainder of
    /// the path untouched. Any other input passes through unchanged,
    /// including inputs shorter than the two-byte prefix.
    ///
    /// Never fails: an unset home simply yields a relative path that the
    /// caller's file read will reject.
    pub fn expand(&self, path: &str) -> PathBuf {
        match path.strip_prefix("~/") {
            Some(rest) => self.home.as_deref().unwrap_or(Path::new("")).join(rest),
            None => PathBuf::from(path),
        }
    }
}
