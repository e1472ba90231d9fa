//! ARB (Application Resource Bundle) documents.
//!
//! ARB files are JSON objects whose key order is meaningful to reviewers,
//! so documents are kept order-preserving end to end. Message keys are
//! plain names; `@key` entries hold per-message metadata and `@@`-prefixed
//! entries hold file-level metadata.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::{GenerateError, GenerateResult};

/// One loaded ARB file.
#[derive(Debug, Clone)]
pub struct ArbDocument {
    /// Absolute file path.
    pub path: PathBuf,
    /// Locale, from `@@locale` or the filename.
    pub locale: String,
    /// All entries in file order.
    pub entries: Map<String, Value>,
}

impl ArbDocument {
    /// Load and parse the ARB file at `path`.
    pub fn load(path: &Path) -> GenerateResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| GenerateError::Io(path.to_path_buf(), err))?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|err| GenerateError::ArbParse(path.to_path_buf(), err))?;
        let entries = match value {
            Value::Object(map) => map,
            _ => {
                return Err(GenerateError::Config(format!(
                    "ARB file `{}` must contain a top-level object",
                    path.display()
                )));
            }
        };

        let locale = entries
            .get("@@locale")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| locale_from_filename(path))
            .unwrap_or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default()
            });

        Ok(Self {
            path: path.to_path_buf(),
            locale,
            entries,
        })
    }

    /// Message keys (entries that are not `@` metadata), in file order.
    pub fn message_keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys().filter(|key| !key.starts_with('@'))
    }

    /// Number of messages in the document.
    pub fn message_count(&self) -> usize {
        self.message_keys().count()
    }

    /// Reorder entries deterministically: `@@` file metadata first, then
    /// message keys in ordinal order, each immediately followed by its
    /// `@key` metadata. Orphan `@key` entries go last.
    ///
    /// Returns true if the order changed.
    pub fn sort_keys(&mut self) -> bool {
        let mut file_meta: Vec<&String> = self
            .entries
            .keys()
            .filter(|key| key.starts_with("@@"))
            .collect();
        file_meta.sort();
        let mut messages: Vec<&String> =
            self.entries.keys().filter(|key| !key.starts_with('@')).collect();
        messages.sort();

        let mut order: Vec<String> = Vec::with_capacity(self.entries.len());
        order.extend(file_meta.into_iter().cloned());
        for key in messages {
            order.push(key.clone());
            let meta_key = format!("@{key}");
            if self.entries.contains_key(&meta_key) {
                order.push(meta_key);
            }
        }
        let mut orphans: Vec<String> = self
            .entries
            .keys()
            .filter(|key| !order.contains(key))
            .cloned()
            .collect();
        orphans.sort();
        order.extend(orphans);

        let changed = !self.entries.keys().eq(order.iter());
        if changed {
            let mut sorted = Map::new();
            for key in order {
                if let Some(value) = self.entries.remove(&key) {
                    sorted.insert(key, value);
                }
            }
            self.entries = sorted;
        }
        changed
    }

    /// Serialize to pretty JSON with a trailing newline.
    pub fn to_pretty_string(&self) -> String {
        let mut out = serde_json::to_string_pretty(&self.entries).unwrap_or_else(|_| "{}".into());
        out.push('\n');
        out
    }

    /// Write the document back to its path.
    pub fn save(&self) -> GenerateResult<()> {
        fs::write(&self.path, self.to_pretty_string())
            .map_err(|err| GenerateError::Io(self.path.clone(), err))
    }
}

/// Derive the locale from the `<stem>_<locale>.arb` filename convention
/// (`intl_en.arb` → `en`, `intl_zh_Hans.arb` → `zh_Hans`).
pub fn locale_from_filename(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let (_, locale) = stem.split_once('_')?;
    if locale.is_empty() {
        None
    } else {
        Some(locale.to_string())
    }
}

// ============================================================================
// tests
// ============================================================================
