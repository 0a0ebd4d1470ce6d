//! Configuration file generation.
//!
//! Creates shipkit.toml and ignore files for new projects.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "shipkit.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate shipkit.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r##"# Shipkit configuration file (v{})

[project]
name = "creator-analytics"                              # remote repository name
description = "Creator Analytics SaaS - Track. Analyze. Grow."

[publish]
provider = "github"       # only `github` is supported
visibility = "public"     # public | private
remote = "origin"         # remote name configured by `repo create`
force = false             # publish with uncommitted changes
# repo = "other-name"     # override the repository name
# token_path = "~/.config/shipkit/token"  # file exported as GH_TOKEN

[deploy]
provider = "vercel"       # only `vercel` is supported
dir = "frontend"          # directory to deploy (relative to project root)
prod = true               # production deployment (false = preview)
interactive = true        # run the deploy under a PTY

[page]
title = "Creator Analytics"
tagline = "Track. Analyze. Grow."
platforms = ["YouTube", "TikTok", "Instagram"]
filename = "index.html"   # written under deploy.dir
"##,
        env!("CARGO_PKG_VERSION")
    )
}

/// Write default shipkit.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Frontend build artifacts (`node_modules/`, `.vercel/`)
/// - Local secrets (`.env`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["node_modules/", ".vercel/", ".env", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
