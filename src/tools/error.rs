//! Error conditions for the external CLI collaborators.

use thiserror::Error;

/// Failures from the external publish/deploy tools.
///
/// The taxonomy is intentionally small: authentication is the only
/// condition checked up front. Any other failure mode (network errors,
/// remote rejecting the push, quota limits, deployment build failures)
/// surfaces as the external CLI's own exit status and output.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool binary is not installed or not on PATH.
    #[error("`{tool}` not found in PATH\n  install it first: {hint}")]
    MissingBinary { tool: String, hint: String },

    /// The tool reports no active authenticated session.
    #[error("not authenticated with `{tool}`\n  run `{remedy}` and try again")]
    NotAuthenticated { tool: String, remedy: String },
}
