//! Asset collection: configured roots → sorted records.

use std::path::Path;

use crate::config::{GenerateError, GenerateResult, GeneratorConfig};

use super::record::AssetRecord;
use super::scan;

/// Turn the configured asset roots into a sorted list of records.
///
/// Roots containing any `path_ignore` substring or missing on disk are
/// dropped first; each surviving root is then walked transitively in input
/// order (directory entries themselves never become records). The combined
/// list is stable-sorted by identifier with ordinal comparison, so records
/// with equal identifiers keep their discovery order.
pub fn build(
    project_root: &Path,
    asset_roots: &[String],
    config: &GeneratorConfig,
) -> GenerateResult<Vec<AssetRecord>> {
    let surviving: Vec<&String> = asset_roots
        .iter()
        .filter(|root| {
            !config
                .path_ignore
                .iter()
                .any(|ignored| root.contains(ignored.as_str()))
        })
        .filter(|root| project_root.join(root).is_dir())
        .collect();

    if surviving.is_empty() {
        return Err(GenerateError::Config("no asset paths configured".into()));
    }

    let mut records = Vec::new();
    for root in surviving {
        let dir = project_root.join(root);
        for file in scan::list_files(&dir, true)? {
            records.push(AssetRecord::new(file, project_root, root, config));
        }
    }

    // Stable sort: ties keep discovery order
    records.sort_by(|a, b| a.identifier_name.cmp(&b.identifier_name));
    Ok(records)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneratorConfig, Manifest};
    use std::fs;
    use tempfile::TempDir;

    fn config_with(manifest: &str) -> GeneratorConfig {
        GeneratorConfig::from_manifest(&Manifest::from_str(manifest).unwrap()).unwrap()
    }

    fn identifiers(records: &[AssetRecord]) -> Vec<&str> {
        records.iter().map(|r| r.identifier_name.as_str()).collect()
    }

    #[test]
    fn test_end_to_end_scenario_sorted_by_identifier() {
        // Project root /p, assets root assets/img, files a.png and sub/b.png:
        // parent prefixes give imgA and subB, sorted imgA < subB
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets/img/sub")).unwrap();
        fs::write(dir.path().join("assets/img/a.png"), "a").unwrap();
        fs::write(dir.path().join("assets/img/sub/b.png"), "b").unwrap();

        let config = GeneratorConfig::default();
        let records = build(dir.path(), &["assets/img".to_string()], &config).unwrap();

        assert_eq!(identifiers(&records), vec!["imgA", "subB"]);
        assert_eq!(records[0].code_value, "assets/img/a.png");
        assert_eq!(records[1].code_value, "assets/img/sub/b.png");
    }

    #[test]
    fn test_ties_keep_root_order() {
        // Same identifier from two roots: discovery order (root order) wins
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("r1")).unwrap();
        fs::create_dir_all(dir.path().join("r2")).unwrap();
        fs::write(dir.path().join("r1/x.png"), "1").unwrap();
        fs::write(dir.path().join("r2/x.png"), "2").unwrap();

        let config = config_with("flutter_assets_generator:\n  named_with_parent: false\n");
        let records = build(
            dir.path(),
            &["r1".to_string(), "r2".to_string()],
            &config,
        )
        .unwrap();

        assert_eq!(identifiers(&records), vec!["x", "x"]);
        assert_eq!(records[0].code_value, "r1/x.png");
        assert_eq!(records[1].code_value, "r2/x.png");
    }

    #[test]
    fn test_path_ignore_excludes_whole_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets/img")).unwrap();
        fs::create_dir_all(dir.path().join("assets/fonts")).unwrap();
        fs::write(dir.path().join("assets/img/a.png"), "a").unwrap();
        fs::write(dir.path().join("assets/fonts/r.ttf"), "f").unwrap();

        let config = config_with("flutter_assets_generator:\n  path_ignore:\n    - fonts\n");
        let records = build(
            dir.path(),
            &["assets/img".to_string(), "assets/fonts".to_string()],
            &config,
        )
        .unwrap();

        assert_eq!(identifiers(&records), vec!["imgA"]);
    }

    #[test]
    fn test_missing_roots_are_dropped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/a.png"), "a").unwrap();

        let config = GeneratorConfig::default();
        let records = build(
            dir.path(),
            &["assets".to_string(), "missing".to_string()],
            &config,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_empty_roots_is_config_error() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig::default();
        let result = build(dir.path(), &[], &config);
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }

    #[test]
    fn test_all_filtered_roots_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets/fonts")).unwrap();

        let config = config_with("flutter_assets_generator:\n  path_ignore:\n    - fonts\n");
        let result = build(dir.path(), &["assets/fonts".to_string()], &config);
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }

    #[test]
    fn test_deterministic_across_runs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets/icons")).unwrap();
        for name in ["zebra.png", "apple.png", "mango-ripe.png"] {
            fs::write(dir.path().join("assets/icons").join(name), name).unwrap();
        }

        let config = GeneratorConfig::default();
        let first = build(dir.path(), &["assets".to_string()], &config).unwrap();
        let second = build(dir.path(), &["assets".to_string()], &config).unwrap();
        assert_eq!(first, second);

        let ids = identifiers(&first);
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
