// Contract test for `proj list`, `--version` and configuration handling

use std::fs;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

fn proj(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("proj").unwrap();
    cmd.current_dir(dir.path())
        .env("PROJ_CONFIG", dir.path().join("no-config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_proj_version() {
    let temp_dir = TempDir::new().unwrap();

    proj(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("proj version {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_proj_list() {
    let temp_dir = TempDir::new().unwrap();

    proj(&temp_dir)
        .args(["list", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go"))
        .stdout(predicate::str::contains("vite-elm"));
}

#[test]
fn test_proj_list_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = proj(&temp_dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let commands: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["command"].as_str().unwrap())
        .collect();
    assert_eq!(commands, vec!["go", "vite-elm"]);
}

#[test]
fn test_invalid_config_fails_with_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[logging]\nlevel = \"chatty\"\n").unwrap();

    let mut cmd = Command::cargo_bin("proj").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("PROJ_CONFIG", &config_path)
        .args(["start", "go", "never-created"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!temp_dir.path().join("never-created").exists());
}

#[test]
fn test_valid_config_is_applied() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[logging]\nlevel = \"error\"\n\n[output]\ncolor = false\n").unwrap();

    let mut cmd = Command::cargo_bin("proj").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("PROJ_CONFIG", &config_path)
        .env_remove("RUST_LOG")
        .args(["start", "go", "configured"])
        .assert()
        .success()
        // info-level generation log is filtered out at "error"
        .stderr(predicate::str::contains("Creating Go project").not())
        // color disabled: no ANSI escapes in stdout
        .stdout(predicate::str::contains("\u{1b}[").not());
}
