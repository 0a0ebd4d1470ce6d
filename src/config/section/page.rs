//! `[page]` section configuration.
//!
//! Content of the placeholder landing page. Defaults match the original
//! marketing copy.
//!
//! # Example
//!
//! ```toml
//! [page]
//! title = "Creator Analytics"
//! tagline = "Track. Analyze. Grow."
//! platforms = ["YouTube", "TikTok", "Instagram"]
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page heading.
    pub title: String,

    /// Tagline shown under the heading.
    pub tagline: String,

    /// Platform names listed on the page.
    pub platforms: Vec<String>,

    /// Output filename inside the frontend directory.
    pub filename: PathBuf,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Creator Analytics".to_string(),
            tagline: "Track. Analyze. Grow.".to_string(),
            platforms: vec![
                "YouTube".to_string(),
                "TikTok".to_string(),
                "Instagram".to_string(),
            ],
            filename: PathBuf::from("index.html"),
        }
    }
}

impl PageConfig {
    /// Validate page configuration.
    ///
    /// # Checks
    /// - `filename` must be relative (it is joined under `deploy.dir`).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.filename.is_absolute() {
            diag.error(
                "page.filename",
                "must be relative to the frontend directory",
            );
        }
    }
}
