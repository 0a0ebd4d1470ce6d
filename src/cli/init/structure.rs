//! Project directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Standard project directory structure.
const PROJECT_DIRS: &[&str] = &["frontend"];

/// Create project directory structure at the given root.
///
/// Creates all standard directories. The root directory
/// is created if it doesn't exist.
pub fn create_structure(root: &Path) -> Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}
