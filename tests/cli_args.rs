//! Tests for CLI argument parsing against the built binary.

use std::io::Write;
use std::process::Command;

fn pokewalk_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pokewalk"));
    cmd.env_remove("POKEWALK_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let output = pokewalk_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("fetch"));
    assert!(stdout.contains("walk"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_walk_help_shows_track_options() {
    let output = pokewalk_cmd()
        .args(["walk", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--track"));
    assert!(stdout.contains("--deny-location"));
    assert!(stdout.contains("--step-meters"));
}

#[test]
fn test_missing_subcommand_fails() {
    let output = pokewalk_cmd().output().expect("Failed to execute command");
    assert!(!output.status.success());
}

#[test]
fn test_invalid_config_exits_with_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[api]\ncatalog_size = 0\n").unwrap();

    let output = pokewalk_cmd()
        .arg("--config")
        .arg(file.path())
        .args(["fetch", "--id", "1"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_invalid_base_url_override_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let output = pokewalk_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--base-url", "not-a-url", "fetch"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("base_url"));
}

#[test]
fn test_zero_walk_interval_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let output = pokewalk_cmd()
        .arg("--config")
        .arg(&path)
        .args(["walk", "--interval-ms", "0", "--steps", "1"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be non-zero"));
}
