//! Error taxonomy for the launcher.
//!
//! Nothing is recovered locally. Every failure terminates the process with
//! a non-zero exit code; a failed child is re-raised with its exact code.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file {path} has an empty script_name")]
    EmptyScriptName { path: PathBuf },

    #[error("no python interpreter found on PATH or in the usual locations")]
    InterpreterNotFound,

    #[error("failed to spawn {script} with {interpreter}")]
    Spawn {
        script: String,
        interpreter: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed while waiting for {script}")]
    Wait {
        script: String,
        #[source]
        source: io::Error,
    },

    #[error("script {script} exited with code {code}")]
    ScriptFailed { script: String, code: i32 },
}

impl LaunchError {
    /// Exit code the launcher itself terminates with.
    ///
    /// A failed child propagates its own code; every launcher-side failure
    /// is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::ScriptFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
