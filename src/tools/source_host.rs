//! Source-hosting CLI wrapper (`gh` + `git`).
//!
//! Creates the remote repository and pushes the local commit history.
//! Operations run in a fixed order: `auth status` → `repo create` → `push`.
//! There is no idempotence guarantee: re-running after the remote already
//! exists fails with the CLI's own error.

use crate::config::{ProjectConfig, Visibility};
use crate::log;
use crate::tools::ToolError;
use crate::utils::exec::Cmd;
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// Install hint shown when `gh` is missing.
const GH_INSTALL_HINT: &str = "https://cli.github.com";

/// Install hint shown when `git` is missing.
const GIT_INSTALL_HINT: &str = "https://git-scm.com";

/// Wrapper around the source-hosting CLI session.
pub struct SourceHost {
    gh_bin: String,
    git_bin: String,
    root: PathBuf,
    /// Extra environment for `gh` subprocesses (`GH_TOKEN` when a token
    /// file is configured).
    envs: Vec<(String, String)>,
}

impl SourceHost {
    /// Build the wrapper from config, reading the optional token file.
    pub fn from_config(config: &ProjectConfig) -> Result<Self> {
        let mut envs = Vec::new();
        if let Some(path) = &config.publish.token_path {
            let token = fs::read_to_string(path)
                .with_context(|| format!("failed to read token file '{}'", path.display()))?;
            envs.push(("GH_TOKEN".to_string(), token.trim().to_string()));
        }

        Ok(Self {
            gh_bin: config.publish.gh_bin.clone(),
            git_bin: config.publish.git_bin.clone(),
            root: config.get_root().to_path_buf(),
            envs,
        })
    }

    /// Check that both binaries are installed.
    pub fn ensure_available(&self) -> Result<()> {
        for (bin, hint) in [
            (&self.gh_bin, GH_INSTALL_HINT),
            (&self.git_bin, GIT_INSTALL_HINT),
        ] {
            if which::which(bin).is_err() {
                return Err(ToolError::MissingBinary {
                    tool: bin.clone(),
                    hint: hint.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Probe the authenticated session via `gh auth status`.
    ///
    /// A nonzero exit means no active session; the returned error carries
    /// the remediation instructions and the caller halts without retrying.
    pub fn ensure_authenticated(&self) -> Result<()> {
        let output = Cmd::new(&self.gh_bin)
            .args(["auth", "status"])
            .cwd(&self.root)
            .envs(self.env_refs())
            .output()?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ToolError::NotAuthenticated {
                tool: self.gh_bin.clone(),
                remedy: format!("{} auth login", self.gh_bin),
            }
            .into())
        }
    }

    /// Create the remote repository and register it as a remote of the
    /// local one. Fails if the remote repository already exists.
    pub fn create_remote(
        &self,
        repo: &str,
        description: &str,
        visibility: Visibility,
        remote: &str,
    ) -> Result<()> {
        log!("publish"; "creating remote repository `{repo}`");

        Cmd::new(&self.gh_bin)
            .args(["repo", "create", repo])
            .arg(visibility.flag())
            .args(["--description", description])
            .args(["--source", ".", "--remote", remote])
            .cwd(&self.root)
            .envs(self.env_refs())
            .run()?;
        Ok(())
    }

    /// Push the current branch to the remote, setting the upstream.
    pub fn push(&self, remote: &str, branch: &str) -> Result<()> {
        log!("publish"; "pushing `{branch}` to `{remote}`");

        Cmd::new(&self.git_bin)
            .args(["push", "-u", remote, branch])
            .cwd(&self.root)
            .run()?;
        Ok(())
    }

    fn env_refs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
