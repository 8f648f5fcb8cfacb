use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::models::project_kind::ProjectKind;
use crate::services::generator::GeneratorRegistry;
use crate::utils::error::{ProjError, Result};

/// Print the project types the registry can generate
#[derive(Debug, Clone)]
pub struct ListCommand {
    pub json: bool,
}

/// One entry of `proj list --json`
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectTypeInfo {
    pub command: String,
    pub name: String,
    pub description: String,
}

impl From<ProjectKind> for ProjectTypeInfo {
    fn from(kind: ProjectKind) -> Self {
        Self {
            command: kind.command_name().to_string(),
            name: kind.display_name().to_string(),
            description: kind.description().to_string(),
        }
    }
}

impl ListCommand {
    pub fn run(&self, registry: &GeneratorRegistry) -> Result<()> {
        let types: Vec<ProjectTypeInfo> =
            registry.kinds().into_iter().map(ProjectTypeInfo::from).collect();

        if self.json {
            let json_output = serde_json::to_string_pretty(&types).map_err(|e| {
                ProjError::Serialization(format!("Failed to serialize JSON response: {}", e))
            })?;
            println!("{}", json_output);
            return Ok(());
        }

        println!("Available project types:");
        for info in &types {
            println!("{}", format_row(info));
        }
        println!();
        println!("Usage: proj start <type> <project-name>");

        Ok(())
    }
}

/// Pad the command column before styling it; escape codes would count toward the width.
fn format_row(info: &ProjectTypeInfo) -> String {
    format!("  {} {}", format!("{:<10}", info.command).bold(), info.description)
}
