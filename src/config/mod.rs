//! Project configuration management for `shipkit.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── project    # [project]
//! │   ├── publish    # [publish]
//! │   ├── deploy     # [deploy]
//! │   └── page       # [page]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError, ConfigDiagnostics
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[project]` | Project identity (repo name, description)        |
//! | `[publish]` | Repository publisher (provider, visibility, ...) |
//! | `[deploy]`  | Frontend deployer (provider, directory, prod)    |
//! | `[page]`    | Placeholder landing page content                 |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{DeployConfig, PageConfig, ProjectSectionConfig, PublishConfig, Visibility};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing shipkit.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Project identity
    #[serde(default)]
    pub project: ProjectSectionConfig,

    /// Repository publisher settings
    #[serde(default)]
    pub publish: PublishConfig,

    /// Frontend deployer settings
    #[serde(default)]
    pub deploy: DeployConfig,

    /// Placeholder page content
    #[serde(default)]
    pub page: PageConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            project: ProjectSectionConfig::default(),
            publish: PublishConfig::default(),
            deploy: DeployConfig::default(),
            page: PageConfig::default(),
        }
    }
}

impl ProjectConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file. The project root is determined by the config file's parent
    /// directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'shipkit init' to create a new project.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Set paths and apply CLI options
        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        // Resolve root path
        let root = match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => std::env::current_dir().unwrap_or_default().join(name),
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.set_root(&root);
        self.normalize_paths(&root);
        self.apply_command_options(cli);
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (shipkit.toml) since it's always at project root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Remote repository name: `publish.repo` override or `project.name`.
    pub fn repo_name(&self) -> &str {
        self.publish.repo.as_deref().unwrap_or(&self.project.name)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Publish { force } => {
                Self::update_option(&mut self.publish.force, force.as_ref());
            }
            Commands::Deploy { prod } => {
                Self::update_option(&mut self.deploy.prod, prod.as_ref());
            }
            Commands::Init { .. } | Commands::Render | Commands::Check { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        // Normalize root to absolute path
        let root = crate::utils::path::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = crate::utils::path::normalize_path(&self.config_path);

        // Frontend directory
        self.deploy.dir = crate::utils::path::normalize_path(&root.join(&self.deploy.dir));

        // Token path with tilde expansion
        if let Some(token_path) = self.publish.token_path.take() {
            self.publish.token_path = Some(Self::normalize_token_path(&token_path, &root));
        }
        // Note: page.filename stays relative; it is joined under deploy.dir
        // at render time.
    }

    /// Normalize token path with tilde expansion.
    fn normalize_token_path(path: &Path, root: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path.to_str().unwrap_or_default()).into_owned();
        let path = PathBuf::from(expanded);
        let full_path = if path.is_relative() {
            root.join(&path)
        } else {
            path
        };
        crate::utils::path::normalize_path(&full_path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the current command.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        // Validate each section
        self.project.validate(&mut diag);
        self.publish.validate(&mut diag);
        self.page.validate(&mut diag);

        // Command-specific validation
        self.validate_command_specific(&mut diag);

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate command-specific requirements.
    fn validate_command_specific(&self, diag: &mut ConfigDiagnostics) {
        if let Commands::Deploy { .. } = &self.get_cli().command {
            self.deploy.validate(self.get_root(), diag);
        }
    }

    /// Get CLI arguments reference
    pub const fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML, panicking on unknown fields (to catch config
/// typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProjectConfig {
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_toml_rejected() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<ProjectConfig, _> = toml::from_str("[project\nname = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_project_config_default() {
        let config = ProjectConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.project.name, "creator-analytics");
        assert_eq!(config.publish.provider, "github");
        assert_eq!(config.deploy.provider, "vercel");
    }

    #[test]
    fn test_repo_name_override() {
        let mut config = ProjectConfig::default();
        assert_eq!(config.repo_name(), "creator-analytics");

        config.publish.repo = Some("other-name".into());
        assert_eq!(config.repo_name(), "other-name");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[project]\nname = \"test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.project.name, "test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[project]\nname = \"test\"";
        let (_, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_root_relative() {
        let mut config = ProjectConfig::default();
        config.set_root(Path::new("/work/project"));

        assert_eq!(
            config.root_relative(Path::new("/work/project/frontend/index.html")),
            PathBuf::from("frontend/index.html")
        );
        assert_eq!(
            config.root_relative(Path::new("/elsewhere/file")),
            PathBuf::from("/elsewhere/file")
        );
    }
}
