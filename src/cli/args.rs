//! CLI argument definitions.

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;

/// Command-line arguments.
///
/// `--version` is handled by clap and prints the crate version before any
/// configuration or login work happens.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Log in to a Cloud Foundry deployment using a named profile",
    long_about = None
)]
pub struct LoginArgs {
    /// Profile name to log in with (ignored when --list is given).
    pub profile: Option<String>,
    /// YAML config file path; a leading `~/` expands to the home directory.
    #[arg(long, short = 'f', default_value = DEFAULT_CONFIG_PATH)]
    pub filename: String,
    /// List available profiles and pick one interactively.
    #[arg(long, short = 'l', default_value_t = false)]
    pub list: bool,
}
