//! `check` command: verify external tooling and authentication.
//!
//! Probes each external binary the workflow depends on and reports
//! install and login status. Read-only: nothing is created or pushed.

use crate::config::ProjectConfig;
use crate::log;
use crate::utils::exec::Cmd;
use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Probe result for one external tool.
#[derive(Debug, Serialize)]
pub struct ToolStatus {
    pub tool: String,
    pub installed: bool,
    /// `None` when the tool has no login concept (git).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticated: Option<bool>,
}

impl ToolStatus {
    fn ok(&self) -> bool {
        self.installed && self.authenticated.unwrap_or(true)
    }
}

/// Run all probes and report the results.
pub fn check_tools(config: &ProjectConfig) -> Result<()> {
    let json = matches!(
        config.get_cli().command,
        crate::cli::Commands::Check { json: true }
    );

    let statuses = probe_all(config);

    if json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
    } else {
        for status in &statuses {
            print_status(status);
        }
    }

    if statuses.iter().all(ToolStatus::ok) {
        if !json {
            log!("check"; "all tools ready");
        }
        Ok(())
    } else {
        bail!("some tools are missing or not authenticated");
    }
}

/// Probe git, the source-host CLI, and the hosting-platform CLI.
fn probe_all(config: &ProjectConfig) -> Vec<ToolStatus> {
    let git = &config.publish.git_bin;
    let gh = &config.publish.gh_bin;
    let vercel = &config.deploy.bin;

    vec![
        ToolStatus {
            tool: git.clone(),
            installed: is_installed(git),
            authenticated: None,
        },
        probe_with_auth(gh, &["auth", "status"]),
        probe_with_auth(vercel, &["whoami"]),
    ]
}

fn is_installed(bin: &str) -> bool {
    which::which(bin).is_ok()
}

/// Probe a binary and, when installed, its login status via `args`.
fn probe_with_auth(bin: &str, args: &[&str]) -> ToolStatus {
    let installed = is_installed(bin);
    let authenticated = if installed {
        Some(
            Cmd::new(bin)
                .args(args)
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false),
        )
    } else {
        None
    };
    ToolStatus {
        tool: bin.to_string(),
        installed,
        authenticated,
    }
}

fn print_status(status: &ToolStatus) {
    let mark = |ok: bool| {
        if ok {
            "✓".bright_green().to_string()
        } else {
            "✗".bright_red().to_string()
        }
    };

    let installed = mark(status.installed);
    let auth = match status.authenticated {
        Some(ok) => format!("  auth {}", mark(ok)),
        None => String::new(),
    };
    println!("  {} {}{}", installed, status.tool.bold(), auth);
}
