//! Runlet: a minimal launcher for operator-configured Python scripts.
//!
//! Reads `config.json` from the config directory, starts the named script
//! under the system Python with inherited standard streams, and exits with
//! the script's own status.

pub mod config;
pub mod error;
pub mod interpreter;
pub mod launcher;
pub mod paths;

pub use config::LaunchConfig;
pub use error::LaunchError;
pub use launcher::{Launcher, Outcome};
