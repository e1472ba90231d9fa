//! Command-line interface module.

mod args;
pub mod generate;
pub mod l10n;
pub mod watch;

pub use args::{Cli, Commands, L10nCommands};
