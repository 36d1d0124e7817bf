use std::path::Path;

use tracing::{debug, info};

pub fn log_load_started(path: &Path) {
    debug!(
        target: "cflogin::config",
        path = %path.display(),
        "Starting configuration load"
    );
}

pub fn log_include_merged(path: &Path, bytes: usize) {
    debug!(
        target: "cflogin::config",
        path = %path.display(),
        bytes = bytes,
        "Merged include file"
    );
}

pub fn log_loaded(path: &Path, profiles: usize) {
    info!(
        target: "cflogin::config",
        path = %path.display(),
        profiles = profiles,
        "Configuration loaded"
    );
}
