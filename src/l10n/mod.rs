//! Localization (ARB) file management.
//!
//! Sibling feature to asset generation: enumerate the project's ARB files,
//! add a locale from an existing template, and keep key order
//! deterministic. Grid editing of translations is out of scope.

pub mod arb;

pub use arb::ArbDocument;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{GenerateError, GenerateResult};
use crate::generator::scan;

/// Load every `.arb` file directly under `arb_dir`, sorted by locale.
///
/// A missing directory is an empty project, not an error.
pub fn list_locales(arb_dir: &Path) -> GenerateResult<Vec<ArbDocument>> {
    if !arb_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();
    for path in scan::list_files(arb_dir, false)? {
        if path.extension().is_some_and(|ext| ext == "arb") {
            documents.push(ArbDocument::load(&path)?);
        }
    }
    documents.sort_by(|a, b| a.locale.cmp(&b.locale));
    Ok(documents)
}

/// Create a new locale file under `arb_dir`.
///
/// The first existing document (by locale order) serves as template: its
/// message keys are copied with empty values and `@@locale` set. Without
/// any template an `intl_<locale>.arb` containing only `@@locale` is
/// created. Fails if the locale already exists.
pub fn add_locale(arb_dir: &Path, locale: &str) -> GenerateResult<PathBuf> {
    let documents = if arb_dir.is_dir() {
        list_locales(arb_dir)?
    } else {
        fs::create_dir_all(arb_dir).map_err(|err| GenerateError::Io(arb_dir.to_path_buf(), err))?;
        Vec::new()
    };

    if documents.iter().any(|doc| doc.locale == locale) {
        return Err(GenerateError::Config(format!(
            "locale `{locale}` already exists"
        )));
    }

    let template = documents.first();
    let stem_prefix = template
        .and_then(|doc| doc.path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .and_then(|stem| stem.split_once('_').map(|(prefix, _)| prefix.to_string()))
        .unwrap_or_else(|| "intl".to_string());
    let path = arb_dir.join(format!("{stem_prefix}_{locale}.arb"));

    let mut entries = serde_json::Map::new();
    entries.insert("@@locale".into(), serde_json::Value::String(locale.into()));
    if let Some(template) = template {
        for key in template.message_keys() {
            entries.insert(key.clone(), serde_json::Value::String(String::new()));
        }
    }

    let document = ArbDocument {
        path: path.clone(),
        locale: locale.to_string(),
        entries,
    };
    document.save()?;
    Ok(path)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn arb_fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("intl_en.arb"),
            r#"{"@@locale": "en", "hello": "Hello", "@hello": {"description": "greeting"}, "bye": "Bye"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("intl_de.arb"),
            r#"{"@@locale": "de", "hello": "Hallo", "bye": "Tschüss"}"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_list_locales_sorted() {
        let dir = arb_fixture();
        let docs = list_locales(dir.path()).unwrap();
        let locales: Vec<&str> = docs.iter().map(|d| d.locale.as_str()).collect();
        assert_eq!(locales, vec!["de", "en"]);
    }

    #[test]
    fn test_list_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let docs = list_locales(&dir.path().join("lib/l10n")).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_list_ignores_non_arb_files() {
        let dir = arb_fixture();
        fs::write(dir.path().join("notes.txt"), "not arb").unwrap();
        assert_eq!(list_locales(dir.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_add_locale_copies_template_keys() {
        let dir = arb_fixture();
        let path = add_locale(dir.path(), "fr").unwrap();
        assert_eq!(path, dir.path().join("intl_fr.arb"));

        let doc = ArbDocument::load(&path).unwrap();
        assert_eq!(doc.locale, "fr");
        assert_eq!(doc.entries.get("@@locale").unwrap(), "fr");
        assert_eq!(doc.entries.get("hello").unwrap(), "");
        assert_eq!(doc.entries.get("bye").unwrap(), "");
        // Template metadata entries are not copied
        assert!(!doc.entries.contains_key("@hello"));
    }

    #[test]
    fn test_add_existing_locale_fails() {
        let dir = arb_fixture();
        let result = add_locale(dir.path(), "en");
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }

    #[test]
    fn test_add_locale_without_template() {
        let dir = TempDir::new().unwrap();
        let arb_dir = dir.path().join("lib/l10n");
        let path = add_locale(&arb_dir, "en").unwrap();
        assert_eq!(path, arb_dir.join("intl_en.arb"));

        let doc = ArbDocument::load(&path).unwrap();
        assert_eq!(doc.locale, "en");
        assert_eq!(doc.message_count(), 0);
    }
}
