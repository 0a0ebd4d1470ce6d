//! Hosting-platform CLI wrapper (`vercel`).
//!
//! Triggers a build-and-deploy of the frontend directory. The deployment
//! URL the CLI prints on success is passed through, not parsed.

use crate::config::ProjectConfig;
use crate::log;
use crate::tools::ToolError;
use crate::utils::exec::{Cmd, FilterRule};
use anyhow::Result;
use std::path::PathBuf;

/// Install hint shown when `vercel` is missing.
const VERCEL_INSTALL_HINT: &str = "npm install -g vercel";

/// Skip the CLI's version banner when relaying output.
static VERCEL_FILTER: FilterRule = FilterRule::new(&["Vercel CLI"]);

/// Wrapper around the hosting-platform CLI session.
pub struct HostingPlatform {
    bin: String,
    dir: PathBuf,
    /// Run the deploy under a PTY so the CLI shows its interactive output.
    interactive: bool,
}

impl HostingPlatform {
    /// Build the wrapper from config.
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            bin: config.deploy.bin.clone(),
            dir: config.deploy.dir.clone(),
            interactive: config.deploy.interactive,
        }
    }

    /// Check that the binary is installed.
    pub fn ensure_available(&self) -> Result<()> {
        if which::which(&self.bin).is_err() {
            return Err(ToolError::MissingBinary {
                tool: self.bin.clone(),
                hint: VERCEL_INSTALL_HINT.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Probe the authenticated session via `vercel whoami`.
    ///
    /// A nonzero exit means not logged in; the returned error carries the
    /// remediation instructions and the caller halts without retrying.
    pub fn ensure_authenticated(&self) -> Result<()> {
        let output = Cmd::new(&self.bin).arg("whoami").cwd(&self.dir).output()?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ToolError::NotAuthenticated {
                tool: self.bin.clone(),
                remedy: format!("{} login", self.bin),
            }
            .into())
        }
    }

    /// Trigger one deployment of the frontend directory.
    ///
    /// With `prod` the deployment goes straight to production; otherwise
    /// the CLI creates a preview deployment.
    pub fn deploy(&self, prod: bool) -> Result<()> {
        log!("deploy"; "deploying `{}`", self.dir.display());

        let mut cmd = Cmd::new(&self.bin).arg("deploy");
        if prod {
            cmd = cmd.arg("--prod");
        }

        let output = cmd
            .cwd(&self.dir)
            .pty(self.interactive)
            .filter(&VERCEL_FILTER)
            .run()?;

        // Pass the CLI's output (including the deployment URL) through
        if let Some(stdout) = self.passthrough(&output.stdout) {
            println!("{stdout}");
        }

        Ok(())
    }

    /// Captured output to relay to the operator.
    ///
    /// Under a PTY the exec layer has already relayed every line through
    /// the output filter; relaying again here would print the deployment
    /// URL twice. Only the plain-pipe path needs an explicit pass-through.
    fn passthrough(&self, stdout: &[u8]) -> Option<String> {
        if self.interactive {
            return None;
        }
        let stdout = String::from_utf8_lossy(stdout);
        let stdout = stdout.trim();
        (!stdout.is_empty()).then(|| stdout.to_string())
    }
}
