use proj::{GoGenerator, Generator, ProjError, ProjectKind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// End-to-end scenarios for the Go generator, driven through the library API

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

#[test]
fn test_go_project_short_name() {
    let temp_dir = TempDir::new().unwrap();
    let project = GoGenerator::in_dir(temp_dir.path()).generate("myapp").unwrap();

    assert_eq!(project.kind, ProjectKind::Go);
    let root = temp_dir.path().join("myapp");
    assert!(root.is_dir());

    let main_go = read(&root, "cmd/myapp/main.go");
    assert!(main_go.contains("func main()"));
    assert!(main_go.contains("myapp"));
    assert!(read(&root, "go.mod").lines().any(|l| l == "module myapp"));
}

#[test]
fn test_go_project_full_module_path() {
    let temp_dir = TempDir::new().unwrap();
    GoGenerator::in_dir(temp_dir.path())
        .generate("github.com/user/myapp")
        .unwrap();

    let root = temp_dir.path().join("myapp");
    assert!(root.join("cmd").join("myapp").join("main.go").is_file());
    assert!(!temp_dir.path().join("github.com").exists());
    assert!(read(&root, "go.mod").lines().any(|l| l == "module github.com/user/myapp"));
}

#[test]
fn test_go_project_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("existing");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("keep.txt"), "keep").unwrap();

    let err = GoGenerator::in_dir(temp_dir.path()).generate("existing").unwrap_err();

    assert!(matches!(err, ProjError::AlreadyExists { .. }));
    assert!(err.to_string().contains("already exists"));
    let entries: Vec<_> = fs::read_dir(&existing).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(existing.join("keep.txt")).unwrap(), "keep");
}

#[test]
fn test_go_project_all_directories_and_files() {
    let temp_dir = TempDir::new().unwrap();
    GoGenerator::in_dir(temp_dir.path()).generate("test-files").unwrap();
    let root = temp_dir.path().join("test-files");

    for dir in ["cmd/test-files", "internal"] {
        assert!(root.join(dir).is_dir(), "missing directory {}", dir);
    }
    assert_eq!(fs::read_dir(root.join("internal")).unwrap().count(), 0);

    for file in [
        "cmd/test-files/main.go",
        "cmd/test-files/main_test.go",
        "go.mod",
        "README.md",
        "LICENSE",
        ".gitignore",
    ] {
        let content = read(&root, file);
        assert!(!content.is_empty(), "{} is empty", file);
    }

    assert!(read(&root, "cmd/test-files/main_test.go").contains("func TestMain(t *testing.T)"));
    assert!(read(&root, "LICENSE").contains("MIT License"));
}

#[test]
fn test_go_project_generation_is_repeatable() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    GoGenerator::in_dir(first.path()).generate("same").unwrap();
    GoGenerator::in_dir(second.path()).generate("same").unwrap();

    for file in ["cmd/same/main.go", "go.mod", "README.md", ".gitignore"] {
        assert_eq!(
            read(&first.path().join("same"), file),
            read(&second.path().join("same"), file)
        );
    }
}
