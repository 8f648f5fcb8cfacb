// Services module for generation logic
pub mod generator;
pub mod go_generator;
pub mod structure_builder;
pub mod vite_elm_generator;

use self::generator::GeneratorRegistry;
use self::go_generator::GoGenerator;
use self::vite_elm_generator::ViteElmGenerator;
use std::path::PathBuf;

/// Registry with every built-in generator rooted at `base_dir`
pub fn default_registry<P: Into<PathBuf>>(base_dir: P) -> GeneratorRegistry {
    let base_dir = base_dir.into();
    GeneratorRegistry::new()
        .with(Box::new(GoGenerator::in_dir(base_dir.clone())))
        .with(Box::new(ViteElmGenerator::in_dir(base_dir)))
}
