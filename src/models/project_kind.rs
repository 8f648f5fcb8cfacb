use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of supported project types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    /// Go service skeleton (`cmd/`, `internal/`, `go.mod`)
    Go,
    /// Vite + Elm + Tailwind CSS front-end skeleton
    ViteElm,
}

impl ProjectKind {
    /// Subcommand name under `proj start`
    pub fn command_name(&self) -> &'static str {
        match self {
            ProjectKind::Go => "go",
            ProjectKind::ViteElm => "vite-elm",
        }
    }

    /// Human-readable label used in log and console output
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectKind::Go => "Go",
            ProjectKind::ViteElm => "Vite + Elm + Tailwind",
        }
    }

    /// One-line description shown by `proj list`
    pub fn description(&self) -> &'static str {
        match self {
            ProjectKind::Go => "Go project with cmd/, internal/, go.mod and a passing test",
            ProjectKind::ViteElm => {
                "Vite + Elm + Tailwind CSS project with a working counter example"
            }
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_name())
    }
}
