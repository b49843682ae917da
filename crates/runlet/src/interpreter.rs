//! System Python discovery.

use std::path::PathBuf;

use crate::error::LaunchError;

/// Interpreter names probed on PATH, in order.
const PATH_CANDIDATES: &[&str] = &["python3", "python"];

/// Locations probed when PATH turns up nothing.
const FIXED_CANDIDATES: &[&str] = &["/usr/local/bin/python3", "/usr/bin/python3"];

/// Find the system Python.
pub fn find_python() -> Result<PathBuf, LaunchError> {
    for name in PATH_CANDIDATES {
        if let Ok(path) = which::which(name) {
            return Ok(path);
        }
    }

    for candidate in FIXED_CANDIDATES {
        let path = PathBuf::from(candidate);
        if path.exists() {
            return Ok(path);
        }
    }

    Err(LaunchError::InterpreterNotFound)
}
