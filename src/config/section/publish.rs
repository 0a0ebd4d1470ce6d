//! `[publish]` section configuration.
//!
//! Settings for the repository publisher. Only GitHub is supported as
//! the source-hosting provider.
//!
//! # Example
//!
//! ```toml
//! [publish]
//! provider = "github"         # source-hosting provider
//! visibility = "public"       # public | private
//! remote = "origin"           # remote name registered locally
//! force = false               # publish despite uncommitted changes
//! # repo = "my-repo"          # override: defaults to project.name
//! # token_path = "~/.github-token"  # optional: PAT file path
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Repository publisher configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Source-hosting provider: only "github".
    pub provider: String,

    /// Remote repository name override. Defaults to `project.name`.
    pub repo: Option<String>,

    /// Visibility of the created repository.
    pub visibility: Visibility,

    /// Remote name registered on the local repository.
    pub remote: String,

    /// Publish even when the working tree has uncommitted changes.
    pub force: bool,

    /// Binary invoked for the source-hosting operations.
    pub gh_bin: String,

    /// Binary invoked for the push.
    pub git_bin: String,

    /// Path to file containing a personal access token.
    ///
    /// # Security
    /// - Store outside the repository (e.g., `~/.github-token`)
    /// - Never commit tokens to version control!
    pub token_path: Option<PathBuf>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            provider: "github".to_string(),
            repo: None,
            visibility: Visibility::Public,
            remote: "origin".to_string(),
            force: false,
            gh_bin: "gh".to_string(),
            git_bin: "git".to_string(),
            token_path: None,
        }
    }
}

impl PublishConfig {
    /// Validate publish configuration.
    ///
    /// # Checks
    /// - `provider` must be "github" (the only supported provider).
    /// - If `token_path` is set, it must exist and be a file.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.provider != "github" {
            diag.error_with_hint(
                "publish.provider",
                format!("unsupported provider `{}`", self.provider),
                "only `github` is supported",
            );
        }

        if let Some(path) = &self.token_path {
            if !path.exists() {
                diag.error(
                    "publish.token_path",
                    format!("token file not found: {}", path.display()),
                );
            } else if !path.is_file() {
                diag.error(
                    "publish.token_path",
                    format!("token path is not a file: {}", path.display()),
                );
            }
        }
    }
}

/// Visibility of the created remote repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Flag passed to `repo create`.
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Public => "--public",
            Self::Private => "--private",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_publish_config() {
        let config = test_parse_config(
            r#"[publish]
provider = "github"
repo = "custom-name"
visibility = "private"
remote = "upstream"
force = true
token_path = "~/.github-token""#,
        );

        assert_eq!(config.publish.provider, "github");
        assert_eq!(config.publish.repo.as_deref(), Some("custom-name"));
        assert_eq!(config.publish.visibility, Visibility::Private);
        assert_eq!(config.publish.remote, "upstream");
        assert!(config.publish.force);
        assert_eq!(
            config.publish.token_path,
            Some(PathBuf::from("~/.github-token"))
        );
    }

    #[test]
    fn test_publish_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.publish.provider, "github");
        assert!(config.publish.repo.is_none());
        assert_eq!(config.publish.visibility, Visibility::Public);
        assert_eq!(config.publish.remote, "origin");
        assert!(!config.publish.force);
        assert_eq!(config.publish.gh_bin, "gh");
        assert_eq!(config.publish.git_bin, "git");
        assert!(config.publish.token_path.is_none());
    }

    #[test]
    fn test_visibility_flags() {
        assert_eq!(Visibility::Public.flag(), "--public");
        assert_eq!(Visibility::Private.flag(), "--private");
    }

    #[test]
    fn test_unsupported_provider_rejected() {
        let mut diag = ConfigDiagnostics::new();
        let config = PublishConfig {
            provider: "gitlab".into(),
            ..Default::default()
        };
        config.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_token_path_must_exist() {
        let mut diag = ConfigDiagnostics::new();
        let config = PublishConfig {
            token_path: Some(PathBuf::from("/nonexistent/token")),
            ..Default::default()
        };
        config.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_token_path_must_be_file() {
        let temp = TempDir::new().unwrap();
        let mut diag = ConfigDiagnostics::new();
        let config = PublishConfig {
            token_path: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        config.validate(&mut diag);
        assert!(diag.has_errors());

        let token = temp.path().join("token");
        std::fs::write(&token, "ghp_test").unwrap();
        let mut diag = ConfigDiagnostics::new();
        let config = PublishConfig {
            token_path: Some(token),
            ..Default::default()
        };
        config.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_publish_unknown_field_detected() {
        let content = "[publish]\nunknown = \"field\"";
        let (_, ignored) = crate::config::ProjectConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("unknown")));
    }
}
