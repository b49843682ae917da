//! Runlet binary: run the configured script and propagate its exit status.
//!
//! Usage:
//!     runlet                 # read /config/config.json and run the script
//!     runlet config          # show resolved paths

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use runlet::launcher::Launcher;
use runlet::paths;

#[derive(Parser, Debug)]
#[command(name = "runlet", about = "Launches the script named by config.json")]
struct Cli {
    /// Enable verbose logging (info/debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Config file (default: /config/config.json, or $RUNLET_CONFIG_DIR/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the configured script (the default when no command is given)
    Run,

    /// Show current configuration and paths
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = match paths::ensure_logs_dir() {
        Ok(dir) => Some(dir),
        Err(err) => {
            eprintln!("Warning: failed to create logs directory: {}", err);
            None
        }
    };

    let _log_guard = match runlet_logging::init_logging(runlet_logging::LogConfig {
        app_name: "runlet",
        verbose: cli.verbose,
        log_dir,
    }) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: failed to initialize logging: {}", err);
            None
        }
    };

    let config_path = cli.config.unwrap_or_else(paths::config_path);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => match Launcher::new(config_path).run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                let code = err.exit_code();
                eprintln!("{:?}", anyhow::Error::from(err));
                exit_code_from(code)
            }
        },
        Commands::Config { json } => match show_config(&config_path, json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{:?}", err);
                ExitCode::from(1)
            }
        },
    }
}

/// Map a child's exit code onto our own.
///
/// `ExitCode` is a u8; Unix wait statuses already fit, anything else
/// degrades to 1.
fn exit_code_from(code: i32) -> ExitCode {
    ExitCode::from(sanitize_exit_code(code))
}

fn sanitize_exit_code(code: i32) -> u8 {
    match u8::try_from(code) {
        Ok(code) if code != 0 => code,
        _ => 1,
    }
}

/// Print resolved paths, for the operator debugging a mount.
fn show_config(config_path: &Path, json: bool) -> Result<()> {
    let config_dir = paths::config_dir();
    let logs = paths::logs_dir();

    if json {
        let value = serde_json::json!({
            "config_dir": config_dir.to_string_lossy(),
            "config_file": {
                "path": config_path.to_string_lossy(),
                "exists": config_path.exists(),
            },
            "logs": {
                "path": logs.to_string_lossy(),
                "exists": logs.exists(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("RUNLET CONFIGURATION");
        println!("====================");
        println!();
        println!("Config dir: {}", config_dir.display());
        println!(
            "Config:     {} ({})",
            config_path.display(),
            if config_path.exists() { "exists" } else { "not found" }
        );
        println!(
            "Logs:       {} ({})",
            logs.display(),
            if logs.exists() { "exists" } else { "not found" }
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_codes_map_onto_exit_codes() {
        assert_eq!(sanitize_exit_code(3), 3);
        assert_eq!(sanitize_exit_code(137), 137);
        // Out-of-range and zero degrade to the generic failure code.
        assert_eq!(sanitize_exit_code(0), 1);
        assert_eq!(sanitize_exit_code(300), 1);
        assert_eq!(sanitize_exit_code(-1), 1);
    }
}
