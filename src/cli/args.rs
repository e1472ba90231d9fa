//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Flutter asset constant generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Project root directory (default: search upward for the manifest)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Manifest file name (default: pubspec.yaml)
    #[arg(short = 'C', long, default_value = "pubspec.yaml", value_hint = clap::ValueHint::FilePath)]
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
    /// Generate the Dart asset constants file once
    #[command(visible_alias = "g")]
    Generate,

    /// Regenerate on every change under the configured asset roots
    #[command(visible_alias = "w")]
    Watch,

    /// Manage localization (ARB) files
    #[command(visible_alias = "l")]
    L10n {
        #[command(subcommand)]
        command: L10nCommands,
    },
}

/// Localization subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum L10nCommands {
    /// List ARB files with locale and message count
    List,

    /// Create a new locale file from the existing template
    Add {
        /// Locale tag (e.g. en, zh_Hans)
        locale: String,
    },

    /// Rewrite ARB files with deterministic key order
    Sort,
}

#[allow(unused)]
impl Cli {
    pub const fn is_generate(&self) -> bool {
        matches!(self.command, Commands::Generate)
    }
    pub const fn is_watch(&self) -> bool {
        matches!(self.command, Commands::Watch)
    }
    pub const fn is_l10n(&self) -> bool {
        matches!(self.command, Commands::L10n { .. })
    }
}
