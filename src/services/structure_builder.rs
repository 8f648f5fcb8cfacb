// Materializes a rendered ProjectLayout on disk

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::layout::ProjectLayout;
use crate::utils::error::{ProjError, Result};

/// Creates project directories and files
///
/// The existence check and the creation that follows are not atomic: two
/// invocations racing on the same root can both pass the check. `proj` is a
/// single-operator tool, so this is accepted rather than locked around.
///
/// Nothing is rolled back on failure. Directories and files written before
/// the failing step stay on disk.
pub struct StructureBuilder;

impl StructureBuilder {
    /// Fail with `AlreadyExists` if anything (file, directory, symlink) is at `root`
    pub fn ensure_absent(root: &Path) -> Result<()> {
        // symlink_metadata so a dangling symlink still counts as taken
        match fs::symlink_metadata(root) {
            Ok(_) => Err(ProjError::AlreadyExists {
                path: root.to_path_buf(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ProjError::CreateDirectory {
                path: root.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Check `root` is free, then create every directory and file of `layout` under it.
    /// Returns the written file paths in write order.
    pub fn build(root: &Path, layout: &ProjectLayout) -> Result<Vec<PathBuf>> {
        Self::ensure_absent(root)?;

        Self::create_directory(root)?;
        for dir in &layout.directories {
            Self::create_directory(&root.join(dir))?;
        }

        let mut written = Vec::with_capacity(layout.files.len());
        for file in &layout.files {
            let path = root.join(&file.relative_path);
            Self::write_new_file(&path, &file.content)?;
            written.push(path);
        }

        Ok(written)
    }

    fn create_directory(path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| ProjError::CreateDirectory {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "created directory");
        Ok(())
    }

    fn write_new_file(path: &Path, content: &str) -> Result<()> {
        let to_error = |e| ProjError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        };

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(to_error)?;
        file.write_all(content.as_bytes()).map_err(to_error)?;

        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}
