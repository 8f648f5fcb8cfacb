// Common error types for proj

use std::path::PathBuf;

/// Errors raised while scaffolding a project
#[derive(Debug, thiserror::Error)]
pub enum ProjError {
    /// Target path is already taken (file, directory or symlink)
    #[error("directory '{}' already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    /// Project name cannot be turned into a directory name
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Directory creation failed
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File write failed
    #[error("failed to create file {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No generator is registered for the requested project type
    #[error("Unknown project type '{0}'")]
    UnknownProjectType(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Machine-readable output could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProjError {
    /// Build an `InvalidName` error
    pub fn invalid_name(name: &str, reason: &str) -> Self {
        ProjError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjError>;

/// Exit code for mistakes the user can fix by changing the invocation
pub const EXIT_USER_ERROR: i32 = 1;
/// Exit code for filesystem and environment failures
pub const EXIT_SYSTEM_ERROR: i32 = 2;

/// Terminal-facing rendering of a `ProjError`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    /// Map an error to its message, hint and exit code
    pub fn from_proj_error(err: &ProjError) -> Self {
        let (hint, exit_code) = match err {
            ProjError::AlreadyExists { .. } => (
                Some("Choose a different project name or remove the existing path.".to_string()),
                EXIT_USER_ERROR,
            ),
            ProjError::InvalidName { .. } => (
                Some(
                    "Use a name like 'myapp' or a module path like 'github.com/user/myapp'."
                        .to_string(),
                ),
                EXIT_USER_ERROR,
            ),
            ProjError::UnknownProjectType(_) => (
                Some("Run 'proj list' to see the supported project types.".to_string()),
                EXIT_USER_ERROR,
            ),
            ProjError::CreateDirectory { .. } | ProjError::WriteFile { .. } => (
                Some("Files written before the failure were left in place.".to_string()),
                EXIT_SYSTEM_ERROR,
            ),
            ProjError::Config(_) => (
                Some(
                    "Check the file named by PROJ_CONFIG or ~/.config/proj/config.toml."
                        .to_string(),
                ),
                EXIT_SYSTEM_ERROR,
            ),
            ProjError::Serialization(_) => (None, EXIT_SYSTEM_ERROR),
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code,
        }
    }

    /// Print the error (and hint, if any) to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!();
            eprintln!("{}", hint);
        }
    }
}
