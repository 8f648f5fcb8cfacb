use serde::{Deserialize, Serialize};
use crate::utils::error::{ProjError, Result};

/// Separator between segments of a module path
pub const MODULE_PATH_SEPARATOR: char = '/';

/// A project name split into the module identity and the local directory name
///
/// `"myapp"` parses to `("myapp", "myapp")`;
/// `"github.com/user/myapp"` parses to `("github.com/user/myapp", "myapp")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    /// Fully qualified module path embedded in the manifest
    pub module_path: String,
    /// Final segment of the module path, used as the project root folder
    pub directory_name: String,
}

impl ParsedName {
    /// Parse a bare name or slash-delimited module path
    pub fn parse(raw: &str) -> Result<Self> {
        ensure_not_blank(raw)?;

        if raw.ends_with(MODULE_PATH_SEPARATOR) {
            return Err(ProjError::invalid_name(raw, "name ends with '/'"));
        }

        if raw.split(MODULE_PATH_SEPARATOR).any(str::is_empty) {
            return Err(ProjError::invalid_name(raw, "name contains an empty path segment"));
        }

        let directory_name = raw
            .rsplit(MODULE_PATH_SEPARATOR)
            .next()
            .unwrap_or(raw)
            .to_string();
        ensure_local_directory(raw, &directory_name)?;

        Ok(Self {
            module_path: raw.to_string(),
            directory_name,
        })
    }

    /// Use `raw` verbatim as both identity and directory name (no module paths)
    pub fn bare(raw: &str) -> Result<Self> {
        ensure_not_blank(raw)?;

        if raw.contains(MODULE_PATH_SEPARATOR) {
            return Err(ProjError::invalid_name(raw, "name must not contain '/'"));
        }
        ensure_local_directory(raw, raw)?;

        Ok(Self {
            module_path: raw.to_string(),
            directory_name: raw.to_string(),
        })
    }
}

fn ensure_not_blank(raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(ProjError::invalid_name(raw, "name cannot be empty"));
    }
    Ok(())
}

fn ensure_local_directory(raw: &str, directory_name: &str) -> Result<()> {
    if directory_name == "." || directory_name == ".." {
        return Err(ProjError::invalid_name(
            raw,
            "'.' and '..' cannot be used as a directory name",
        ));
    }
    Ok(())
}
