use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::models::project_kind::ProjectKind;

/// One file to write: path relative to the project root plus its full content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub relative_path: PathBuf,
    pub content: String,
}

impl FileSpec {
    pub fn new<P: Into<PathBuf>>(relative_path: P, content: String) -> Self {
        Self {
            relative_path: relative_path.into(),
            content,
        }
    }
}

/// Rendered plan for a whole project, relative to its root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Subdirectories to create below the root (the root itself is implicit)
    pub directories: Vec<PathBuf>,
    /// Files to write, each fully rendered
    pub files: Vec<FileSpec>,
}

impl ProjectLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subdirectory
    pub fn dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.directories.push(path.into());
        self
    }

    /// Add a rendered file
    pub fn file<P: Into<PathBuf>>(mut self, path: P, content: String) -> Self {
        self.files.push(FileSpec::new(path, content));
        self
    }

    /// Look up a file by its relative path
    pub fn get(&self, relative_path: impl AsRef<Path>) -> Option<&FileSpec> {
        let relative_path = relative_path.as_ref();
        self.files.iter().find(|f| f.relative_path == relative_path)
    }
}

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedProject {
    pub kind: ProjectKind,
    /// Project root on disk
    pub root: PathBuf,
    pub module_path: String,
    pub directory_name: String,
    /// Every file written, in write order
    pub files: Vec<PathBuf>,
}
