// Vite + Elm + Tailwind project generator

use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::layout::{GeneratedProject, ProjectLayout};
use crate::models::project_kind::ProjectKind;
use crate::models::project_name::ParsedName;
use crate::services::generator::Generator;
use crate::services::structure_builder::StructureBuilder;
use crate::templates::vite_elm;
use crate::utils::error::Result;

/// Generates Vite + Elm + Tailwind CSS projects with a counter example.
/// The raw name is both the root directory and the package/page title.
#[derive(Debug, Clone)]
pub struct ViteElmGenerator {
    base_dir: PathBuf,
}

impl ViteElmGenerator {
    pub fn in_dir<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn layout(project_name: &str) -> ProjectLayout {
        let src = Path::new("src");

        ProjectLayout::new()
            .dir(src)
            .dir("public")
            .file("package.json", vite_elm::package_json(project_name))
            .file("vite.config.js", vite_elm::vite_config_js())
            .file("index.html", vite_elm::index_html(project_name))
            .file(src.join("main.js"), vite_elm::main_js())
            .file(src.join("style.css"), vite_elm::style_css())
            .file(src.join("Main.elm"), vite_elm::main_elm())
            .file("elm.json", vite_elm::elm_json())
            .file("elm-tooling.json", vite_elm::elm_tooling_json())
            .file(".gitignore", vite_elm::gitignore())
            .file("README.md", vite_elm::readme(project_name))
    }
}

impl Generator for ViteElmGenerator {
    fn kind(&self) -> ProjectKind {
        ProjectKind::ViteElm
    }

    fn generate(&self, raw_name: &str) -> Result<GeneratedProject> {
        let name = ParsedName::bare(raw_name)?;
        let root = self.base_dir.join(&name.directory_name);

        info!(
            name = %name.directory_name,
            dir = %root.display(),
            "Creating Vite + Elm + Tailwind project"
        );

        let files = StructureBuilder::build(&root, &Self::layout(&name.directory_name))?;

        Ok(GeneratedProject {
            kind: self.kind(),
            root,
            module_path: name.module_path,
            directory_name: name.directory_name,
            files,
        })
    }
}
