//! `l10n` command: ARB file management.

use anyhow::Result;

use crate::config::Project;
use crate::l10n::{add_locale, list_locales};
use crate::log;

use super::L10nCommands;

pub fn run(project: &Project, command: &L10nCommands) -> Result<()> {
    let arb_dir = project.arb_dir();

    match command {
        L10nCommands::List => {
            let documents = list_locales(&arb_dir)?;
            if documents.is_empty() {
                log!("l10n"; "no ARB files under {}", project.root_relative(&arb_dir).display());
                return Ok(());
            }
            for doc in &documents {
                log!(
                    "l10n";
                    "{:<8} {:>4} message(s)  {}",
                    doc.locale,
                    doc.message_count(),
                    project.root_relative(&doc.path).display()
                );
            }
        }

        L10nCommands::Add { locale } => {
            let path = add_locale(&arb_dir, locale)?;
            log!("l10n"; "created {}", project.root_relative(&path).display());
        }

        L10nCommands::Sort => {
            let documents = list_locales(&arb_dir)?;
            let total = documents.len();
            let mut changed = 0;
            for mut doc in documents {
                if doc.sort_keys() {
                    doc.save()?;
                    changed += 1;
                }
            }
            log!("l10n"; "sorted keys in {changed} of {total} file(s)");
        }
    }

    Ok(())
}
