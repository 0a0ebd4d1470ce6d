//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Shipkit publish & deploy workflow CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: shipkit.toml)
    #[arg(short = 'C', long, default_value = "shipkit.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new project from template
    #[command(visible_alias = "i")]
    Init {
        /// Project directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template to stdout instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Render the placeholder landing page into the frontend directory
    #[command(visible_alias = "r")]
    Render,

    /// Create the remote repository and push the local commit history
    #[command(visible_alias = "p")]
    Publish {
        /// Publish even if there are uncommitted changes
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        force: Option<bool>,
    },

    /// Trigger a deployment of the frontend directory
    #[command(visible_alias = "d")]
    Deploy {
        /// Deploy to production (false creates a preview deployment)
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        prod: Option<bool>,
    },

    /// Verify external tooling and authentication
    #[command(visible_alias = "c")]
    Check {
        /// Output machine-readable JSON
        #[arg(short, long)]
        json: bool,
    },
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
