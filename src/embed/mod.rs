//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `LANDING_HTML` - the placeholder marketing page
//!
//! # Usage
//!
//! ```ignore
//! use embed::{LANDING_HTML, LandingVars};
//!
//! let html = LANDING_HTML.render(&LandingVars::from_config(&config.page));
//! ```

mod template;

pub use template::{Template, TemplateVars};

use crate::config::PageConfig;

/// Variables for the landing page template.
pub struct LandingVars {
    pub title: String,
    pub tagline: String,
    pub platforms: Vec<String>,
}

impl LandingVars {
    /// Build landing page variables from the `[page]` config section.
    pub fn from_config(page: &PageConfig) -> Self {
        Self {
            title: page.title.clone(),
            tagline: page.tagline.clone(),
            platforms: page.platforms.clone(),
        }
    }
}

impl TemplateVars for LandingVars {
    fn apply(&self, content: &str) -> String {
        let items: String = self
            .platforms
            .iter()
            .map(|p| format!("      <li>{p}</li>\n"))
            .collect();

        content
            .replace("__TITLE__", &self.title)
            .replace("__TAGLINE__", &self.tagline)
            .replace("__PLATFORMS__", &items)
    }
}

/// Placeholder marketing page written into the frontend directory.
///
/// Pure static presentation: no inputs, no state, no network calls.
pub const LANDING_HTML: Template<LandingVars> = Template::new(include_str!("landing.html"));

#[cfg(test)]
mod tests {
    use super::*;

    fn default_vars() -> LandingVars {
        LandingVars::from_config(&PageConfig::default())
    }

    #[test]
    fn test_landing_renders_fixed_literals() {
        let html = LANDING_HTML.render(&default_vars());

        assert!(html.contains("<h1>Creator Analytics</h1>"));
        assert!(html.contains("Track. Analyze. Grow."));
        assert!(html.contains("<li>YouTube</li>"));
        assert!(html.contains("<li>TikTok</li>"));
        assert!(html.contains("<li>Instagram</li>"));
    }

    #[test]
    fn test_landing_has_two_inert_buttons() {
        let html = LANDING_HTML.render(&default_vars());

        assert_eq!(html.matches("<button type=\"button\">").count(), 2);
        // No interactivity: no scripts, no handlers, no data fetching
        assert!(!html.contains("<script"));
        assert!(!html.contains("onclick"));
        assert!(!html.contains("fetch("));
    }

    #[test]
    fn test_landing_render_is_deterministic() {
        let first = LANDING_HTML.render(&default_vars());
        let second = LANDING_HTML.render(&default_vars());
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_placeholder_left_behind() {
        let html = LANDING_HTML.render(&default_vars());
        assert!(!html.contains("__TITLE__"));
        assert!(!html.contains("__TAGLINE__"));
        assert!(!html.contains("__PLATFORMS__"));
    }
}
