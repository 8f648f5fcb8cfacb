// proj - project scaffolding tool
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod templates;
pub mod utils;

// Re-export commonly used types
pub use models::layout::{FileSpec, GeneratedProject, ProjectLayout};
pub use models::project_kind::ProjectKind;
pub use models::project_name::ParsedName;
pub use services::generator::{Generator, GeneratorRegistry};
pub use services::go_generator::GoGenerator;
pub use services::vite_elm_generator::ViteElmGenerator;
pub use utils::error::{ProjError, Result};
