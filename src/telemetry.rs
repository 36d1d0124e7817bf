//! Tracing initialization for the CLI.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` with a stderr writer.
///
/// Diagnostics default to `warn` so the interactive menu on stdout stays
/// clean; raise verbosity with `RUST_LOG=cflogin=debug`.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
