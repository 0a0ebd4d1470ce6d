//! `deploy` command: trigger a deployment of the frontend directory.
//!
//! Sequential, fail-fast: `whoami` → `deploy [--prod]`. The hosting CLI
//! handles the build and upload itself; we only orchestrate.

use crate::config::ProjectConfig;
use crate::log;
use crate::tools::HostingPlatform;
use anyhow::{Result, bail};

/// Deploy the frontend directory through the hosting-platform CLI.
pub fn deploy_frontend(config: &ProjectConfig) -> Result<()> {
    if !config.deploy.dir.is_dir() {
        bail!(
            "frontend directory not found: {}\n  create it or run `shipkit init`",
            config.root_relative(&config.deploy.dir).display()
        );
    }

    let platform = HostingPlatform::from_config(config);
    platform.ensure_available()?;
    platform.ensure_authenticated()?;
    platform.deploy(config.deploy.prod)?;

    let kind = if config.deploy.prod {
        "production"
    } else {
        "preview"
    };
    log!("deploy"; "{kind} deployment triggered");
    log!("deploy"; "next: set the frontend API URL in the hosting dashboard");
    log!("deploy"; "next: deploy the backend separately");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
