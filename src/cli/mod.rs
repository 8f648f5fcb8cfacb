// CLI module for command-line interface

pub mod list;
pub mod start;

use clap::{Parser, Subcommand};
use crate::models::project_kind::ProjectKind;
use crate::services::generator::GeneratorRegistry;
use crate::utils::error::Result;

use self::list::ListCommand;
use self::start::StartCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "proj")]
#[command(about = "Project scaffolding tool")]
#[command(long_about = r#"proj helps you quickly create new projects with proper structure
and boilerplate code.

Examples:
  proj start go myapp                      Go project in ./myapp
  proj start go github.com/user/myapp      Go project with a full module path
  proj start vite-elm my-elm-app           Vite + Elm + Tailwind project
  proj list                                Show supported project types

Configuration is read from $PROJ_CONFIG or ~/.config/proj/config.toml."#)]
#[command(version = concat!("version ", env!("CARGO_PKG_VERSION")))]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start a new project
    #[command(long_about = "Create a new project with proper structure and boilerplate code.")]
    Start {
        #[command(subcommand)]
        command: StartCommands,
    },

    /// List supported project types
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Project types accepted by `proj start`
#[derive(Subcommand)]
pub enum StartCommands {
    /// Create a new Go project
    #[command(long_about = r#"Create a new Go project with:
  - cmd/projectname/main.go (working code)
  - internal/ (ready for packages)
  - README.md
  - LICENSE (MIT)
  - go.mod
  - .gitignore
  - Basic passing test

Examples:
  # Create project with short name
  proj start go myapp

  # Create project with full module path
  proj start go github.com/user/myapp"#)]
    Go {
        /// Project name or full module path
        #[arg(value_name = "PROJECT_NAME")]
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new Vite + Elm + Tailwind project
    #[command(long_about = r#"Create a new Vite + Elm + Tailwind CSS project with:
  - Vite build setup
  - Elm with hot reload (vite-plugin-elm-watch)
  - Tailwind CSS with @tailwindcss/vite plugin
  - elm-tooling for tool management
  - Working counter example
  - package.json with dev, build, test scripts

Examples:
  # Create new Vite + Elm project
  proj start vite-elm myapp"#)]
    ViteElm {
        /// Project name
        #[arg(value_name = "PROJECT_NAME")]
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command against the generators in `registry`
    pub fn execute(command: Commands, registry: &GeneratorRegistry) -> Result<()> {
        match command {
            Commands::Start { command } => {
                let cmd = match command {
                    StartCommands::Go { name, json } => StartCommand {
                        kind: ProjectKind::Go,
                        name,
                        json,
                    },
                    StartCommands::ViteElm { name, json } => StartCommand {
                        kind: ProjectKind::ViteElm,
                        name,
                        json,
                    },
                };
                cmd.run(registry)
            }

            Commands::List { json } => {
                let cmd = ListCommand { json };
                cmd.run(registry)
            }
        }
    }
}
