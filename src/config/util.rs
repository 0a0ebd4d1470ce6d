//! Config loading helpers.

use std::path::{Path, PathBuf};

/// Search upward from the current directory for the config file.
///
/// Returns the first existing `name` found walking from cwd to the
/// filesystem root.
pub fn find_config_file(name: &Path) -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
