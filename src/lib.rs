//! Library crate root re-exporting the CLI, config and login modules.

pub mod cli;
pub mod config;
pub mod errors;
pub mod login;
pub mod telemetry;
