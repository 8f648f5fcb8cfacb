use std::collections::BTreeMap;

use crate::models::layout::GeneratedProject;
use crate::models::project_kind::ProjectKind;
use crate::utils::error::Result;

/// Contract shared by every project generator
pub trait Generator {
    /// Project type this generator produces
    fn kind(&self) -> ProjectKind;

    /// Create the project named `raw_name`.
    ///
    /// Returns `Ok` only once every directory and file exists. On error,
    /// anything written before the failure is left on disk.
    fn generate(&self, raw_name: &str) -> Result<GeneratedProject>;
}

/// Routing table from project type to generator, built once at startup
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<ProjectKind, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under its own kind, replacing any previous one
    pub fn register(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.kind(), generator);
    }

    /// Builder-style `register`
    pub fn with(mut self, generator: Box<dyn Generator>) -> Self {
        self.register(generator);
        self
    }

    pub fn get(&self, kind: ProjectKind) -> Option<&dyn Generator> {
        self.generators.get(&kind).map(|g| g.as_ref())
    }

    /// Registered kinds in stable order
    pub fn kinds(&self) -> Vec<ProjectKind> {
        self.generators.keys().copied().collect()
    }
}
