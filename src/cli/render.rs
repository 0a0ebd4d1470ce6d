//! `render` command: write the placeholder landing page.
//!
//! Renders the embedded template with the `[page]` values and writes it
//! into the frontend directory, creating the directory if needed. The
//! output is fully static; rendering twice produces the same bytes.

use crate::config::ProjectConfig;
use crate::embed::{LANDING_HTML, LandingVars};
use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Render the landing page into `deploy.dir`.
pub fn render_page(config: &ProjectConfig) -> Result<PathBuf> {
    let html = LANDING_HTML.render(&LandingVars::from_config(&config.page));

    let out_path = config.deploy.dir.join(&config.page.filename);
    let parent = out_path
        .parent()
        .context("page filename has no parent directory")?;
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    fs::write(&out_path, html)
        .with_context(|| format!("Failed to write page: {}", out_path.display()))?;

    log!("render"; "wrote {}", config.root_relative(&out_path).display());
    Ok(out_path)
}
