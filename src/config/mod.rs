//! Project configuration from `pubspec.yaml`.
//!
//! The manifest is consumed as an opaque key-value tree: `pubspec.yaml`
//! carries arbitrary sections owned by other tools, so instead of a typed
//! top-level struct every recognized key is extracted explicitly with a
//! named default.
//!
//! Recognized keys under the `flutter_assets_generator` block:
//!
//! | key                          | default     |
//! |------------------------------|-------------|
//! | `output_dir`                 | `generated` |
//! | `class_name`                 | `Assets`    |
//! | `auto_detection`             | `false`     |
//! | `named_with_parent`          | `true`      |
//! | `leading_with_package_name`  | `false`     |
//! | `output_filename`            | `assets`    |
//! | `filename_split_pattern`     | `[-_]`      |
//! | `path_ignore`                | `[]`        |
//! | `arb_dir`                    | `lib/l10n`  |
//!
//! Asset roots come from the standard `flutter.assets` list; the package
//! name from the top-level `name` key.

mod error;
mod util;

pub use error::{GenerateError, GenerateResult};
pub use util::{find_manifest_file, normalize_path};

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde_yaml::Value;

use crate::cli::Cli;

/// The Dart source root; generated output always lives beneath it.
pub const SOURCE_ROOT: &str = "lib";

/// Default word-separator pattern for camel-case conversion.
pub const DEFAULT_SPLIT_PATTERN: &str = "[-_]";

// ============================================================================
// Manifest
// ============================================================================

/// A loaded `pubspec.yaml`, kept as an untyped YAML tree.
#[derive(Debug, Clone)]
pub struct Manifest {
    root: Value,
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    pub fn load(path: &Path) -> GenerateResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| GenerateError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Parse manifest content.
    pub fn from_str(content: &str) -> GenerateResult<Self> {
        let root: Value = serde_yaml::from_str(content)?;
        Ok(Self { root })
    }

    /// Top-level `name` key (the package name).
    pub fn package_name(&self) -> &str {
        self.root
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The `flutter.assets` list, in manifest order.
    ///
    /// Flutter allows a trailing `/` on directory entries; it is trimmed so
    /// roots join cleanly with the project root.
    pub fn asset_roots(&self) -> Vec<String> {
        self.root
            .get("flutter")
            .and_then(|flutter| flutter.get("assets"))
            .and_then(Value::as_sequence)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|entry| entry.trim_end_matches('/').to_string())
                    .filter(|entry| !entry.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The tool's own configuration block, if present.
    fn generator_block(&self) -> Option<&Value> {
        self.root.get("flutter_assets_generator")
    }
}

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Fully resolved generator options for one run.
///
/// Constructed once from the manifest before any asset record is built;
/// immutable for the duration of the run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Output subdirectory under the source root.
    pub output_dir: String,
    /// Base name (without extension) of the generated file.
    pub output_filename: String,
    /// Wrapper class name in generated code.
    pub class_name: String,
    /// Project package name, used only by `leading_with_package_name`.
    pub package_name: String,
    /// Editor-host toggle for generate-on-save; parsed for manifest
    /// compatibility, the CLI `watch` command is always explicit.
    pub auto_detection: bool,
    /// Prefix identifiers with the immediate parent directory name.
    pub named_with_parent: bool,
    /// Prefix emitted asset values with `packages/<package_name>/`.
    pub leading_with_package_name: bool,
    /// Regex fragment defining word-separator characters.
    pub filename_split_pattern: String,
    /// Substrings excluding whole asset roots from the scan.
    pub path_ignore: Vec<String>,
    /// ARB directory, relative to the project root.
    pub arb_dir: String,

    split_regex: Regex,
}

impl GeneratorConfig {
    /// Resolve generator options from the manifest, applying defaults for
    /// every absent key.
    pub fn from_manifest(manifest: &Manifest) -> GenerateResult<Self> {
        let block = manifest.generator_block();

        let filename_split_pattern =
            str_key(block, "filename_split_pattern", DEFAULT_SPLIT_PATTERN);
        let split_regex = compile_split_regex(&filename_split_pattern)?;

        Ok(Self {
            output_dir: str_key(block, "output_dir", "generated"),
            output_filename: str_key(block, "output_filename", "assets"),
            class_name: str_key(block, "class_name", "Assets"),
            package_name: manifest.package_name().to_string(),
            auto_detection: bool_key(block, "auto_detection", false),
            named_with_parent: bool_key(block, "named_with_parent", true),
            leading_with_package_name: bool_key(block, "leading_with_package_name", false),
            filename_split_pattern,
            path_ignore: str_list_key(block, "path_ignore"),
            arb_dir: str_key(block, "arb_dir", "lib/l10n"),
            split_regex,
        })
    }

    /// Word-splitting regex built from `filename_split_pattern`: one or more
    /// separator characters followed by a captured character.
    pub fn split_regex(&self) -> &Regex {
        &self.split_regex
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: "generated".into(),
            output_filename: "assets".into(),
            class_name: "Assets".into(),
            package_name: String::new(),
            auto_detection: false,
            named_with_parent: true,
            leading_with_package_name: false,
            filename_split_pattern: DEFAULT_SPLIT_PATTERN.into(),
            path_ignore: Vec::new(),
            arb_dir: "lib/l10n".into(),
            // The default pattern is a literal known to compile
            split_regex: compile_split_regex(DEFAULT_SPLIT_PATTERN)
                .expect("default split pattern is valid"),
        }
    }
}

fn compile_split_regex(pattern: &str) -> GenerateResult<Regex> {
    Regex::new(&format!("(?:{pattern})+(.)")).map_err(|err| {
        GenerateError::Config(format!("invalid filename_split_pattern `{pattern}`: {err}"))
    })
}

fn str_key(block: Option<&Value>, key: &str, default: &str) -> String {
    block
        .and_then(|b| b.get(key))
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn bool_key(block: Option<&Value>, key: &str, default: bool) -> bool {
    block
        .and_then(|b| b.get(key))
        .and_then(Value::as_bool)
        .unwrap_or(default)
}

fn str_list_key(block: Option<&Value>, key: &str) -> Vec<String> {
    block
        .and_then(|b| b.get(key))
        .and_then(Value::as_sequence)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Project
// ============================================================================

/// One Flutter project as seen by the generator: root directory, resolved
/// config, and asset roots in manifest order.
#[derive(Debug, Clone)]
pub struct Project {
    /// Absolute project root (the manifest's parent directory).
    pub root: PathBuf,
    /// Absolute manifest path.
    pub manifest_path: PathBuf,
    /// Resolved generator options.
    pub config: GeneratorConfig,
    /// Project-relative asset root directories, in manifest order.
    pub asset_roots: Vec<String>,
}

impl Project {
    /// Locate and load the project from CLI arguments.
    ///
    /// With `--root` the manifest is expected directly under it; otherwise
    /// the manifest is searched upward from the current directory and the
    /// project root is its parent.
    pub fn load(cli: &Cli) -> GenerateResult<Self> {
        let manifest_path = match &cli.root {
            Some(root) => normalize_path(root).join(&cli.config),
            None => find_manifest_file(&cli.config).ok_or_else(|| {
                GenerateError::Config(format!(
                    "manifest `{}` not found in the current directory or any parent",
                    cli.config.display()
                ))
            })?,
        };
        Self::from_manifest_path(&manifest_path)
    }

    /// Load the project whose manifest lives at `manifest_path`.
    pub fn from_manifest_path(manifest_path: &Path) -> GenerateResult<Self> {
        let manifest_path = normalize_path(manifest_path);
        let manifest = Manifest::load(&manifest_path)?;
        let root = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Self {
            root,
            manifest_path,
            config: GeneratorConfig::from_manifest(&manifest)?,
            asset_roots: manifest.asset_roots(),
        })
    }

    /// Join a path with the project root.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get a path relative to the project root (for display).
    pub fn root_relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Absolute path of the generated Dart file:
    /// `<root>/lib/<output_dir>/<output_filename>.dart`.
    pub fn output_path(&self) -> PathBuf {
        self.root
            .join(SOURCE_ROOT)
            .join(&self.config.output_dir)
            .join(format!("{}.dart", self.config.output_filename))
    }

    /// Absolute path of the ARB directory.
    pub fn arb_dir(&self) -> PathBuf {
        self.root.join(&self.config.arb_dir)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_MANIFEST: &str = r#"
name: my_pkg
flutter:
  assets:
    - assets/img/
    - assets/fonts
flutter_assets_generator:
  output_dir: gen
  class_name: R
  named_with_parent: false
  leading_with_package_name: true
  output_filename: resources
  filename_split_pattern: "[-_ ]"
  path_ignore:
    - fonts
"#;

    #[test]
    fn test_defaults_without_block() {
        let manifest = Manifest::from_str("name: app\n").unwrap();
        let config = GeneratorConfig::from_manifest(&manifest).unwrap();

        assert_eq!(config.output_dir, "generated");
        assert_eq!(config.output_filename, "assets");
        assert_eq!(config.class_name, "Assets");
        assert_eq!(config.package_name, "app");
        assert!(!config.auto_detection);
        assert!(config.named_with_parent);
        assert!(!config.leading_with_package_name);
        assert_eq!(config.filename_split_pattern, "[-_]");
        assert!(config.path_ignore.is_empty());
        assert_eq!(config.arb_dir, "lib/l10n");
    }

    #[test]
    fn test_block_overrides() {
        let manifest = Manifest::from_str(FULL_MANIFEST).unwrap();
        let config = GeneratorConfig::from_manifest(&manifest).unwrap();

        assert_eq!(config.output_dir, "gen");
        assert_eq!(config.class_name, "R");
        assert!(!config.named_with_parent);
        assert!(config.leading_with_package_name);
        assert_eq!(config.output_filename, "resources");
        assert_eq!(config.filename_split_pattern, "[-_ ]");
        assert_eq!(config.path_ignore, vec!["fonts".to_string()]);
    }

    #[test]
    fn test_asset_roots_trim_trailing_slash() {
        let manifest = Manifest::from_str(FULL_MANIFEST).unwrap();
        assert_eq!(manifest.asset_roots(), vec!["assets/img", "assets/fonts"]);
    }

    #[test]
    fn test_asset_roots_missing_is_empty() {
        let manifest = Manifest::from_str("name: app\n").unwrap();
        assert!(manifest.asset_roots().is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let result = Manifest::from_str("flutter:\n  assets: [\n");
        assert!(matches!(result, Err(GenerateError::ManifestParse(_))));
    }

    #[test]
    fn test_invalid_split_pattern_is_config_error() {
        let content = "name: app\nflutter_assets_generator:\n  filename_split_pattern: \"[\"\n";
        let manifest = Manifest::from_str(content).unwrap();
        let result = GeneratorConfig::from_manifest(&manifest);
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }

    #[test]
    fn test_output_path_layout() {
        let project = Project {
            root: PathBuf::from("/p"),
            manifest_path: PathBuf::from("/p/pubspec.yaml"),
            config: GeneratorConfig::default(),
            asset_roots: vec![],
        };
        assert_eq!(
            project.output_path(),
            PathBuf::from("/p/lib/generated/assets.dart")
        );
    }
}
