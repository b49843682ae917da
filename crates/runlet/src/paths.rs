//! Path resolution for Runlet.
//!
//! Everything lives under the config directory: the launch configuration
//! the operator writes, and the log files we leave behind.

use std::path::PathBuf;

/// Resolve the Runlet config directory.
///
/// Priority:
/// 1) RUNLET_CONFIG_DIR
/// 2) /config (the volume mounted into the container)
pub fn config_dir() -> PathBuf {
    if let Ok(override_path) = std::env::var("RUNLET_CONFIG_DIR") {
        return PathBuf::from(override_path);
    }
    PathBuf::from("/config")
}

/// Launch configuration path: `<config_dir>/config.json`
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Logs directory: `<config_dir>/logs`
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Ensure the logs directory exists.
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
