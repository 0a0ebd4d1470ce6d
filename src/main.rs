//! Shipkit - publish and deploy workflow for the Creator Analytics frontend.

#![allow(dead_code)]

mod cli;
mod config;
mod embed;
mod logger;
mod tools;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    if let Err(e) = run(cli) {
        log!("error"; "{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &'static Cli) -> Result<()> {
    let config = ProjectConfig::load(cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_project(&config, name.is_some(), *dry),
        Commands::Render => cli::render::render_page(&config).map(|_| ()),
        Commands::Publish { .. } => cli::publish::publish_repo(&config),
        Commands::Deploy { .. } => cli::deploy::deploy_frontend(&config),
        Commands::Check { .. } => cli::check::check_tools(&config),
    }
}
