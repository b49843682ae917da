//! Launch configuration.
//!
//! A single JSON record names the script to run. The operator (or the
//! orchestrating platform) writes it before launch; Runlet reads it exactly
//! once per invocation and never writes it back.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LaunchError;

/// The launch configuration record.
///
/// Unknown fields are ignored: the file belongs to the wider deployment,
/// and Runlet only claims `script_name`.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchConfig {
    /// Path of the script to execute.
    pub script_name: String,

    /// Interpreter override. Defaults to the first python3/python found.
    #[serde(default)]
    pub interpreter: Option<PathBuf>,
}

impl LaunchConfig {
    /// Read and parse the record at `path`.
    pub fn load(path: &Path) -> Result<Self, LaunchError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LaunchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: LaunchConfig =
            serde_json::from_str(&raw).map_err(|source| LaunchError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        if config.script_name.trim().is_empty() {
            return Err(LaunchError::EmptyScriptName {
                path: path.to_path_buf(),
            });
        }

        Ok(config)
    }
}
