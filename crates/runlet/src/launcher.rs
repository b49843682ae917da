//! Script launcher: read the config, spawn the script, propagate its
//! outcome.
//!
//! Execution is deliberately synchronous. The launcher supervises exactly
//! one child to completion, so the blocking wait is the whole job. The
//! child inherits stdin/stdout/stderr; its output interleaves with the two
//! status lines we print.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info};

use crate::config::LaunchConfig;
use crate::error::LaunchError;
use crate::interpreter;

/// Terminal states of a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed { code: i32 },
}

impl Outcome {
    /// Classify a child exit status.
    ///
    /// A signal-terminated child maps to `128 + signal` (shell convention);
    /// a status with neither code nor signal degrades to 1.
    pub fn from_status(status: ExitStatus) -> Outcome {
        if status.success() {
            return Outcome::Succeeded;
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Outcome::Failed { code: 128 + signal };
            }
        }

        Outcome::Failed {
            code: status.code().unwrap_or(1),
        }
    }
}

/// Reads the configuration record, starts the target script, and waits for
/// it to finish.
pub struct Launcher {
    config_path: PathBuf,
}

impl Launcher {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Run the configured script to completion.
    ///
    /// Prints the start line before the spawn and the completion line only
    /// after a zero exit. Any failure in between surfaces as a typed error
    /// for the caller to turn into the process exit code.
    pub fn run(&self) -> Result<(), LaunchError> {
        let config = LaunchConfig::load(&self.config_path)?;

        let interpreter = match &config.interpreter {
            Some(path) => path.clone(),
            None => interpreter::find_python()?,
        };
        debug!("Interpreter: {}", interpreter.display());

        println!("Starting script: {}", config.script_name);

        let status = spawn_and_wait(&interpreter, &config.script_name)?;

        match Outcome::from_status(status) {
            Outcome::Succeeded => {
                info!("Script {} exited cleanly", config.script_name);
                println!("Script finished.");
                Ok(())
            }
            Outcome::Failed { code } => Err(LaunchError::ScriptFailed {
                script: config.script_name.clone(),
                code,
            }),
        }
    }
}

/// Spawn `<interpreter> <script>` with inherited stdio and block until it
/// exits.
fn spawn_and_wait(interpreter: &Path, script: &str) -> Result<ExitStatus, LaunchError> {
    let mut child = Command::new(interpreter)
        .arg(script)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            script: script.to_string(),
            interpreter: interpreter.to_path_buf(),
            source,
        })?;

    info!(
        "Spawned {} (pid={}) with {}",
        script,
        child.id(),
        interpreter.display()
    );

    child.wait().map_err(|source| LaunchError::Wait {
        script: script.to_string(),
        source,
    })
}
