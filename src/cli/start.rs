use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::models::layout::GeneratedProject;
use crate::models::project_kind::ProjectKind;
use crate::services::generator::GeneratorRegistry;
use crate::utils::error::{ProjError, Result};

/// Create a new project of `kind` named `name`
#[derive(Debug, Clone)]
pub struct StartCommand {
    pub kind: ProjectKind,
    pub name: String,
    pub json: bool,
}

/// JSON response format for start commands
#[derive(Debug, Serialize, Deserialize)]
pub struct StartResponse {
    pub status: String,
    pub kind: ProjectKind,
    pub project_dir: String,
    pub module_path: String,
    pub files: Vec<String>,
}

impl StartResponse {
    pub fn from_project(project: &GeneratedProject) -> Self {
        Self {
            status: "success".to_string(),
            kind: project.kind,
            project_dir: project.root.display().to_string(),
            module_path: project.module_path.clone(),
            files: project.files.iter().map(|f| f.display().to_string()).collect(),
        }
    }
}

impl StartCommand {
    /// Execute the start command
    pub fn run(&self, registry: &GeneratorRegistry) -> Result<()> {
        let generator = registry
            .get(self.kind)
            .ok_or_else(|| ProjError::UnknownProjectType(self.kind.to_string()))?;

        let project = generator.generate(&self.name)?;

        if self.json {
            let json_output = serde_json::to_string_pretty(&StartResponse::from_project(&project))
                .map_err(|e| {
                    ProjError::Serialization(format!("Failed to serialize JSON response: {}", e))
                })?;
            println!("{}", json_output);
        } else {
            print_success(&project);
        }

        Ok(())
    }
}

/// Commands to run after generation, in order
pub fn next_steps(project: &GeneratedProject) -> Vec<String> {
    let cd = format!("cd {}", project.root.display());
    let run = match project.kind {
        ProjectKind::Go => format!(
            "go mod tidy && go run cmd/{}/main.go",
            project.directory_name
        ),
        ProjectKind::ViteElm => "npm install && npm run dev".to_string(),
    };
    vec![cd, run]
}

fn print_success(project: &GeneratedProject) {
    println!();
    println!(
        "{}",
        format!("{} project created successfully!", project.kind.display_name()).green()
    );
    println!();
    println!("{}", "Next steps:".cyan());
    for step in next_steps(project) {
        println!("{}", format!("   {}", step).yellow());
    }
    println!();
}
