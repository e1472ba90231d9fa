//! flutter-assetgen - Dart asset constants and ARB management for Flutter projects.

#![allow(dead_code)]

mod cli;
mod config;
mod generator;
mod l10n;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Project;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let project = Project::load(&cli)?;
    debug!(
        "config";
        "root {}, {} asset root(s)",
        project.root.display(),
        project.asset_roots.len()
    );

    match &cli.command {
        Commands::Generate => cli::generate::run(&project),
        Commands::Watch => cli::watch::run(project),
        Commands::L10n { command } => cli::l10n::run(&project, command),
    }
}
