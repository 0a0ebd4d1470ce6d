//! `publish` command: create the remote repository and push local history.
//!
//! Strictly sequential, fail-fast: `auth status` → `repo create` → `push`.
//! An unauthenticated session halts before any remote operation; any other
//! failure propagates the external CLI's own exit status and output.

use crate::config::ProjectConfig;
use crate::log;
use crate::tools::SourceHost;
use crate::utils::git;
use anyhow::{Result, bail};

/// Publish the local repository to the source-hosting provider.
pub fn publish_repo(config: &ProjectConfig) -> Result<()> {
    let host = SourceHost::from_config(config)?;
    host.ensure_available()?;
    host.ensure_authenticated()?;

    let repo = git::open_repo(config.get_root())?;
    let branch = git::current_branch(&repo)?;

    if !config.publish.force
        && git::has_uncommitted_changes(&config.publish.git_bin, config.get_root())?
    {
        bail!("uncommitted changes in working tree; commit them or rerun with --force");
    }

    let name = config.repo_name();
    host.create_remote(
        name,
        &config.project.description,
        config.publish.visibility,
        &config.publish.remote,
    )?;
    host.push(&config.publish.remote, &branch)?;

    log!("publish"; "repository `{name}` published");
    log!("publish"; "next: run `shipkit deploy` to deploy the frontend");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::tools::ToolError;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Write a stub executable that records its argv to the spy file.
    ///
    /// `fail_when_first_arg` makes the stub exit 1 when its first argument
    /// matches (used to simulate an unauthenticated session).
    fn write_stub(
        dir: &Path,
        name: &str,
        spy: &Path,
        fail_when_first_arg: Option<&str>,
    ) -> PathBuf {
        let path = dir.join(name);
        let fail = match fail_when_first_arg {
            Some(arg) => format!("if [ \"$1\" = \"{arg}\" ]; then exit 1; fi\n"),
            None => String::new(),
        };
        let script = format!(
            "#!/bin/sh\necho \"{name} $@\" >> {}\n{fail}exit 0\n",
            spy.display()
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Build a config rooted at a fresh git repository, wired to stubs.
    fn stub_config(root: &Path, gh: &Path, git_bin: &Path) -> ProjectConfig {
        let mut config = ProjectConfig::default();
        config.set_root(root);
        config.publish.gh_bin = gh.display().to_string();
        config.publish.git_bin = git_bin.display().to_string();
        config
    }

    fn read_spy(spy: &Path) -> Vec<String> {
        fs::read_to_string(spy)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_unauthenticated_halts_before_create() {
        let repo_dir = TempDir::new().unwrap();
        let bin_dir = TempDir::new().unwrap();
        gix::init(repo_dir.path()).unwrap();

        let spy = bin_dir.path().join("spy.log");
        // gh exits 1 on `auth status`
        let gh = write_stub(bin_dir.path(), "gh", &spy, Some("auth"));
        let git_bin = write_stub(bin_dir.path(), "git", &spy, None);

        let config = stub_config(repo_dir.path(), &gh, &git_bin);
        let err = publish_repo(&config).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ToolError>(),
            Some(ToolError::NotAuthenticated { .. })
        ));

        // Only the auth probe ran: no repo create, no push
        let calls = read_spy(&spy);
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("auth status"));
    }

    #[test]
    fn test_authenticated_invokes_fixed_order() {
        let repo_dir = TempDir::new().unwrap();
        let bin_dir = TempDir::new().unwrap();
        gix::init(repo_dir.path()).unwrap();

        let spy = bin_dir.path().join("spy.log");
        let gh = write_stub(bin_dir.path(), "gh", &spy, None);
        let git_bin = write_stub(bin_dir.path(), "git", &spy, None);

        let config = stub_config(repo_dir.path(), &gh, &git_bin);
        publish_repo(&config).unwrap();

        let calls = read_spy(&spy);
        let auth = calls.iter().position(|c| c.contains("auth status")).unwrap();
        let create = calls.iter().position(|c| c.contains("repo create")).unwrap();
        let push = calls.iter().position(|c| c.contains("push")).unwrap();

        // auth status → repo create → push
        assert!(auth < create);
        assert!(create < push);

        // push invoked exactly once
        assert_eq!(calls.iter().filter(|c| c.contains("push")).count(), 1);
    }

    #[test]
    fn test_create_uses_repo_name_and_visibility() {
        let repo_dir = TempDir::new().unwrap();
        let bin_dir = TempDir::new().unwrap();
        gix::init(repo_dir.path()).unwrap();

        let spy = bin_dir.path().join("spy.log");
        let gh = write_stub(bin_dir.path(), "gh", &spy, None);
        let git_bin = write_stub(bin_dir.path(), "git", &spy, None);

        let config = stub_config(repo_dir.path(), &gh, &git_bin);
        publish_repo(&config).unwrap();

        let calls = read_spy(&spy);
        let create = calls.iter().find(|c| c.contains("repo create")).unwrap();
        assert!(create.contains("repo create creator-analytics"));
        assert!(create.contains("--public"));
        assert!(create.contains("--source ."));
        assert!(create.contains("--remote origin"));
    }

    #[test]
    fn test_missing_repository_is_an_error() {
        let empty_dir = TempDir::new().unwrap();
        let bin_dir = TempDir::new().unwrap();

        let spy = bin_dir.path().join("spy.log");
        let gh = write_stub(bin_dir.path(), "gh", &spy, None);
        let git_bin = write_stub(bin_dir.path(), "git", &spy, None);

        // No git repository at root
        let config = stub_config(empty_dir.path(), &gh, &git_bin);
        let err = publish_repo(&config).unwrap_err();
        assert!(format!("{err:#}").contains("no git repository"));

        // Halted before any remote operation
        let calls = read_spy(&spy);
        assert!(!calls.iter().any(|c| c.contains("repo create")));
    }

    #[test]
    fn test_missing_binary_reported() {
        let repo_dir = TempDir::new().unwrap();
        gix::init(repo_dir.path()).unwrap();

        let mut config = ProjectConfig::default();
        config.set_root(repo_dir.path());
        config.publish.gh_bin = "/nonexistent/gh".to_string();

        let err = publish_repo(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ToolError>(),
            Some(ToolError::MissingBinary { .. })
        ));
    }

    #[test]
    fn test_token_file_exported_to_gh() {
        let repo_dir = TempDir::new().unwrap();
        let bin_dir = TempDir::new().unwrap();
        gix::init(repo_dir.path()).unwrap();

        let spy = bin_dir.path().join("spy.log");
        // Stub records GH_TOKEN alongside argv
        let gh_path = bin_dir.path().join("gh");
        let script = format!(
            "#!/bin/sh\necho \"gh token=$GH_TOKEN $@\" >> {}\nexit 0\n",
            spy.display()
        );
        fs::write(&gh_path, script).unwrap();
        fs::set_permissions(&gh_path, fs::Permissions::from_mode(0o755)).unwrap();
        let git_bin = write_stub(bin_dir.path(), "git", &spy, None);

        let token_file = bin_dir.path().join("token");
        fs::write(&token_file, "ghp_secret\n").unwrap();

        let mut config = stub_config(repo_dir.path(), &gh_path, &git_bin);
        config.publish.token_path = Some(token_file);

        publish_repo(&config).unwrap();

        let calls = read_spy(&spy);
        assert!(calls.iter().any(|c| c.contains("token=ghp_secret")));
    }
}
