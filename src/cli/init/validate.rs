//! Target-directory checks run before any files are written.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// How the scaffolding target was chosen.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `shipkit init` - scaffold into the current directory
    CurrentDir,
    /// `shipkit init <name>` - scaffold into a new subdirectory
    NewDir,
}

/// Refuse to scaffold over existing content.
///
/// The current directory may be used only while empty (or missing); a
/// named target must not exist at all.
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir if has_entries(root)? => bail!(
            "Current directory is not empty.\n\
             Pass a project name to scaffold into a fresh subdirectory."
        ),
        InitMode::NewDir if root.exists() => bail!(
            "'{}' already exists; pick another name or remove it first.",
            root.display()
        ),
        _ => Ok(()),
    }
}

fn has_entries(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?;
    Ok(entries.next().is_some())
}
