//! `[deploy]` section configuration.
//!
//! Settings for the frontend deployer. Only Vercel is supported as the
//! hosting platform.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! provider = "vercel"   # hosting platform
//! dir = "frontend"      # directory to deploy
//! prod = true           # production deployment (false = preview)
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Frontend deployer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Hosting platform: only "vercel".
    pub provider: String,

    /// Frontend directory to deploy (relative to project root).
    pub dir: PathBuf,

    /// Deploy to production; when false the CLI creates a preview.
    pub prod: bool,

    /// Run the deploy under a PTY for interactive CLI output.
    pub interactive: bool,

    /// Binary invoked for the hosting-platform operations.
    pub bin: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            provider: "vercel".to_string(),
            dir: PathBuf::from("frontend"),
            prod: true,
            interactive: true,
            bin: "vercel".to_string(),
        }
    }
}

impl DeployConfig {
    /// Validate deploy configuration.
    ///
    /// # Checks
    /// - `provider` must be "vercel" (the only supported platform).
    /// - `dir` must exist (paths are normalized to absolute before this runs).
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if self.provider != "vercel" {
            diag.error_with_hint(
                "deploy.provider",
                format!("unsupported provider `{}`", self.provider),
                "only `vercel` is supported",
            );
        }

        if !self.dir.is_dir() {
            let display = self
                .dir
                .strip_prefix(root)
                .unwrap_or(&self.dir)
                .display()
                .to_string();
            diag.error_with_hint(
                "deploy.dir",
                format!("directory not found: {display}"),
                "create it or run `shipkit init`",
            );
        }
    }
}
