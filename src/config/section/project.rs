//! `[project]` section configuration.
//!
//! Project identity: the remote repository name and the description
//! shown on the source-hosting provider.
//!
//! # Example
//!
//! ```toml
//! [project]
//! name = "creator-analytics"
//! description = "Creator Analytics SaaS - Track. Analyze. Grow."
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Project identity configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSectionConfig {
    /// Remote repository name.
    pub name: String,

    /// Repository description.
    pub description: String,
}

impl Default for ProjectSectionConfig {
    fn default() -> Self {
        Self {
            name: "creator-analytics".to_string(),
            description: "Creator Analytics SaaS - Track. Analyze. Grow.".to_string(),
        }
    }
}

impl ProjectSectionConfig {
    /// Validate project configuration.
    ///
    /// # Checks
    /// - `name` must be non-empty and contain no whitespace or slashes
    ///   (it is passed to `repo create` verbatim).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error("project.name", "must not be empty");
        } else if self.name.contains(char::is_whitespace) || self.name.contains('/') {
            diag.error_with_hint(
                "project.name",
                format!("`{}` is not a valid repository name", self.name),
                "use letters, digits, `-`, `_` or `.`",
            );
        }
    }
}
