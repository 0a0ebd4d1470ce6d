//! Project initialization module.
//!
//! Creates a new project skeleton with default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration file generation

mod config;
mod structure;
mod validate;

use crate::{cli::render, config::ProjectConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new project with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure (frontend/)
/// 3. Write shipkit.toml and ignore files
/// 4. Render the placeholder landing page
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_project(project_config: &ProjectConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = project_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate::validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    structure::create_structure(root)?;

    config::write_config(root)?;
    config::write_ignore_files(root)?;

    render::render_page(project_config)?;

    log!("init"; "Project initialized successfully");
    log!("init"; "next: `git init && git add -A && git commit`, then `shipkit publish`");
    Ok(())
}
