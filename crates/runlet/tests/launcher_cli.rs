//! End-to-end tests for the runlet binary.
//!
//! Each test gets its own config directory (via RUNLET_CONFIG_DIR) holding
//! a config.json and, usually, a small shell script standing in for the
//! operator's Python script. The `interpreter` override points at /bin/sh
//! so the tests do not depend on a Python installation.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create sandbox"),
        }
    }

    fn write_config(&self, contents: &str) {
        fs::write(self.dir.path().join("config.json"), contents).expect("failed to write config");
    }

    /// Drop a shell script into the sandbox and return its absolute path.
    fn write_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, body).expect("failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod script");
        path
    }

    fn run(&self) -> Output {
        Command::new(env!("CARGO_BIN_EXE_runlet"))
            .env("RUNLET_CONFIG_DIR", self.dir.path())
            .output()
            .expect("failed to run runlet")
    }
}

fn script_config(script: &Path) -> String {
    format!(
        r#"{{"script_name": "{}", "interpreter": "/bin/sh"}}"#,
        script.display()
    )
}

#[test]
fn successful_script_prints_both_status_lines_and_exits_zero() {
    let sandbox = Sandbox::new();
    let script = sandbox.write_script("ok.sh", "echo hello from the script\nexit 0\n");
    sandbox.write_config(&script_config(&script));

    let output = sandbox.run();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains(&format!("Starting script: {}", script.display())));
    assert!(stdout.contains("hello from the script"));
    assert!(stdout.contains("Script finished."));

    // Start line precedes the completion line.
    let start = stdout.find("Starting script:").unwrap();
    let finished = stdout.find("Script finished.").unwrap();
    assert!(start < finished);
}

#[test]
fn failing_script_propagates_its_exit_code() {
    let sandbox = Sandbox::new();
    let script = sandbox.write_script("fails.sh", "exit 3\n");
    sandbox.write_config(&script_config(&script));

    let output = sandbox.run();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout.contains("Starting script:"));
    assert!(!stdout.contains("Script finished."));
}

#[test]
fn missing_script_name_fails_without_spawning() {
    let sandbox = Sandbox::new();
    sandbox.write_config(r#"{"some_other_field": true}"#);

    let output = sandbox.run();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(!stdout.contains("Starting script:"));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("config"),
        "stderr should point at the config file"
    );
}

#[test]
fn corrupt_config_fails_before_any_spawn() {
    let sandbox = Sandbox::new();
    sandbox.write_config(r#"{"script_name": "job"#);

    let output = sandbox.run();

    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Starting script:"));
}

#[test]
fn absent_config_file_fails_nonzero() {
    let sandbox = Sandbox::new();

    let output = sandbox.run();

    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Starting script:"));
}

#[test]
fn nonexistent_script_exits_nonzero_without_completion_line() {
    let sandbox = Sandbox::new();
    let missing = sandbox.dir.path().join("no_such_script.sh");
    sandbox.write_config(&script_config(&missing));

    let output = sandbox.run();
    let stdout = String::from_utf8_lossy(&output.stdout);

    // /bin/sh reports a missing script with 127.
    assert_eq!(output.status.code(), Some(127));
    assert!(!stdout.contains("Script finished."));
}

#[test]
fn nonexistent_interpreter_is_a_spawn_error() {
    let sandbox = Sandbox::new();
    let script = sandbox.write_script("ok.sh", "exit 0\n");
    sandbox.write_config(&format!(
        r#"{{"script_name": "{}", "interpreter": "/nonexistent/python3"}}"#,
        script.display()
    ));

    let output = sandbox.run();

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Script finished."));
}

#[test]
fn identical_runs_are_identical() {
    let sandbox = Sandbox::new();
    let script = sandbox.write_script("ok.sh", "echo once\nexit 0\n");
    sandbox.write_config(&script_config(&script));

    let first = sandbox.run();
    let second = sandbox.run();

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn config_subcommand_reports_paths_as_json() {
    let sandbox = Sandbox::new();
    sandbox.write_config(r#"{"script_name": "job.py"}"#);

    let output = Command::new(env!("CARGO_BIN_EXE_runlet"))
        .env("RUNLET_CONFIG_DIR", sandbox.dir.path())
        .args(["config", "--json"])
        .output()
        .expect("failed to run runlet config");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("config output should be JSON");
    assert_eq!(value["config_file"]["exists"], true);
}
