// Models module for request-scoped data structures
pub mod layout;
pub mod project_kind;
pub mod project_name;
