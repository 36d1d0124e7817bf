//! Load and merge the layered YAML configuration.
//!
//! The root document may carry an `include` key listing further files. Merge
//! is deliberately textual: each include's raw bytes are appended to the root
//! bytes (newline-separated, in listed order) and the combined buffer is
//! re-parsed as one document. Colliding profile names across files are left
//! to the YAML parser's own duplicate-key behavior rather than deep-merged.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_yaml::Mapping;
use tracing::error;

use crate::errors::ConfigError;

pub mod paths;
pub mod profile;
pub mod telemetry;

pub use paths::HomeDir;
pub use profile::{read_selection, select_name, Profile};

/// Default configuration path, home-expanded at load time.
pub const DEFAULT_CONFIG_PATH: &str = "~/.cflogin.yml";

/// Key reserved for the include list; never a profile.
pub const INCLUDE_KEY: &str = "include";

/// Immutable merged view of the root file and all of its includes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    mapping: Mapping,
}

/// Preliminary view of the root file, read only for the include list.
#[derive(Debug, Default, Deserialize)]
struct RawIncludeSection {
    #[serde(default)]
    include: Vec<String>,
}

impl ConfigDocument {
    /// Load the root file at `path`, merge its includes and parse the result.
    ///
    /// Either a fully merged document is returned or the first failure;
    /// a missing or unreadable include aborts the whole load.
    pub fn load(path: &Path, home: &HomeDir) -> Result<Self, ConfigError> {
        telemetry::log_load_started(path);

        let mut merged = read_file(path)?;
        let preamble: RawIncludeSection = serde_yaml::from_slice(&merged).map_err(|err| {
            let error = ConfigError::from_parse_error(path.to_path_buf(), err);
            error!(
                target: "cflogin::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse root configuration file"
            );
            error
        })?;

        for include in &preamble.include {
            let include_path = home.expand(include);
            let bytes = read_file(&include_path)?;
            telemetry::log_include_merged(&include_path, bytes.len());
            merged.push(b'\n');
            merged.extend_from_slice(&bytes);
        }

        let mapping: Mapping = serde_yaml::from_slice(&merged).map_err(|err| {
            let error = ConfigError::from_parse_error(path.to_path_buf(), err);
            error!(
                target: "cflogin::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse merged configuration"
            );
            error
        })?;

        let document = Self { mapping };
        telemetry::log_loaded(path, document.profile_names().len());
        Ok(document)
    }

    /// Parse a document from already-merged bytes. Test seam; no include
    /// resolution happens here.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_yaml::Error> {
        Ok(Self {
            mapping: serde_yaml::from_slice(bytes)?,
        })
    }

    pub(crate) fn mapping(&self) -> &Mapping {
        &self.mapping
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|err| {
        let error = ConfigError::from_read_error(path.to_path_buf(), err);
        error!(
            target: "cflogin::config",
            path = %path.display(),
            reason = %error,
            "Failed to read configuration file"
        );
        error
    })
}
