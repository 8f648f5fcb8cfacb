// Contract test for `proj start go` command

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
fn test_proj_start_go_basic_success() {
    let temp_dir = TempDir::new().unwrap();

    proj(&temp_dir)
        .args(["start", "go", "myapp", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Go project created successfully!"))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("go mod tidy && go run cmd/myapp/main.go"));

    let root = temp_dir.path().join("myapp");
    assert!(root.join("cmd").join("myapp").join("main.go").is_file());
    assert!(root.join("internal").is_dir());

    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module myapp\n"));
}

#[test]
fn test_proj_start_go_with_module_path() {
    let temp_dir = TempDir::new().unwrap();

    proj(&temp_dir)
        .args(["start", "go", "github.com/user/myapp"])
        .assert()
        .success();

    let root = temp_dir.path().join("myapp");
    assert!(root.join("cmd").join("myapp").join("main_test.go").is_file());
    assert!(!temp_dir.path().join("github.com").exists());

    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module github.com/user/myapp\n"));
}

#[test]
fn test_proj_start_go_directory_already_exists() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("existing")).unwrap();

    proj(&temp_dir)
        .args(["start", "go", "existing"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_dir(temp_dir.path().join("existing")).unwrap().count(), 0);
}

#[test]
fn test_proj_start_go_trailing_separator_rejected() {
    let temp_dir = TempDir::new().unwrap();

    proj(&temp_dir)
        .args(["start", "go", "github.com/user/"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_proj_start_go_requires_name() {
    let temp_dir = TempDir::new().unwrap();

    proj(&temp_dir)
        .args(["start", "go"])
        .assert()
        .failure();
}

#[test]
fn test_proj_start_go_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = proj(&temp_dir)
        .args(["start", "go", "github.com/user/jsonapp", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["kind"], "go");
    assert_eq!(json["module_path"], "github.com/user/jsonapp");
    assert!(json["project_dir"].as_str().unwrap().ends_with("jsonapp"));
    assert_eq!(json["files"].as_array().unwrap().len(), 6);
}
