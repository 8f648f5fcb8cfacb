// Go project generator

use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::layout::{GeneratedProject, ProjectLayout};
use crate::models::project_kind::ProjectKind;
use crate::models::project_name::ParsedName;
use crate::services::generator::Generator;
use crate::services::structure_builder::StructureBuilder;
use crate::templates::go;
use crate::utils::error::Result;

/// Generates Go projects:
///
/// ```text
/// <dir>/
///   cmd/<short>/main.go
///   cmd/<short>/main_test.go
///   internal/
///   go.mod
///   README.md
///   LICENSE
///   .gitignore
/// ```
///
/// The name may be a bare name (`myapp`) or a module path
/// (`github.com/user/myapp`); only the final segment becomes the directory.
#[derive(Debug, Clone)]
pub struct GoGenerator {
    base_dir: PathBuf,
}

impl GoGenerator {
    /// Generator rooted at `base_dir`
    pub fn in_dir<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Render every file for `name` without touching the filesystem
    pub fn layout(name: &ParsedName) -> ProjectLayout {
        let short_name = name.directory_name.as_str();
        let cmd_dir = Path::new("cmd").join(short_name);

        ProjectLayout::new()
            .dir(&cmd_dir)
            .dir("internal")
            .file(cmd_dir.join("main.go"), go::main_go(short_name))
            .file(cmd_dir.join("main_test.go"), go::main_test_go(short_name))
            .file("go.mod", go::go_mod(&name.module_path))
            .file("README.md", go::readme(short_name, &name.module_path))
            .file("LICENSE", go::license_current_year())
            .file(".gitignore", go::gitignore())
    }
}

impl Generator for GoGenerator {
    fn kind(&self) -> ProjectKind {
        ProjectKind::Go
    }

    fn generate(&self, raw_name: &str) -> Result<GeneratedProject> {
        let name = ParsedName::parse(raw_name)?;
        let root = self.base_dir.join(&name.directory_name);

        info!(
            module = %name.module_path,
            dir = %root.display(),
            "Creating Go project"
        );

        let files = StructureBuilder::build(&root, &Self::layout(&name))?;

        Ok(GeneratedProject {
            kind: self.kind(),
            root,
            module_path: name.module_path,
            directory_name: name.directory_name,
            files,
        })
    }
}
