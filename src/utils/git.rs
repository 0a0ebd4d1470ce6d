//! Local repository introspection for the publish workflow.
//!
//! The push itself goes through the git CLI (the remote may require
//! credential helpers only the CLI knows about); gix is used to read
//! local state: repository discovery and the current branch.

use crate::utils::exec::Cmd;
use anyhow::{Context, Result, bail};
use gix::Repository;
use std::path::Path;

/// Open the git repository at the project root.
pub fn open_repo(root: &Path) -> Result<Repository> {
    gix::open(root).with_context(|| {
        format!(
            "no git repository at '{}'; run `git init` and commit first",
            root.display()
        )
    })
}

/// Name of the branch HEAD points to.
///
/// Works for unborn branches (fresh `git init`); fails on detached HEAD.
pub fn current_branch(repo: &Repository) -> Result<String> {
    match repo.head_name()? {
        Some(name) => Ok(name.shorten().to_string()),
        None => bail!("HEAD is detached; check out a branch before publishing"),
    }
}

/// Check for uncommitted changes via `git status --porcelain`.
pub fn has_uncommitted_changes(git_bin: &str, root: &Path) -> Result<bool> {
    let output = Cmd::new(git_bin)
        .args(["status", "--porcelain"])
        .cwd(root)
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(!stdout.trim().is_empty())
}
