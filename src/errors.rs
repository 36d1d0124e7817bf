use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while loading the layered YAML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the root file or one of its includes.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The concatenated document (or the root preamble) is not valid YAML.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// Helper to wrap an I/O failure for a given file.
    pub fn from_read_error(path: PathBuf, source: io::Error) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap a `serde_yaml` failure for a given file.
    pub fn from_parse_error(path: PathBuf, source: serde_yaml::Error) -> Self {
        Self::Parse { path, source }
    }
}

/// Errors that can occur while resolving a profile out of a loaded document.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Requested or selected profile name is absent from the merged document.
    #[error("Profile `{name}` not found")]
    NotFound { name: String },
    /// A required field is absent or not a string on an otherwise-found profile.
    #[error("Profile `{name}` is missing required field `{field}`")]
    MissingField { name: String, field: &'static str },
    /// Interactive menu selection is outside the listed range.
    #[error("Invalid profile selection {index}: only {count} profiles available")]
    InvalidSelection { index: usize, count: usize },
}

/// Errors reported by the external login action.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The action ran and reported failure; the message is passed through unchanged.
    #[error("Login failed: {message}")]
    Failed { message: String },
}
