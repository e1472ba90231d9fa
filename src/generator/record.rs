//! Asset record value type.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;

use super::transform::{derive_code_value, derive_identifier};

/// One discovered asset file with its derived identifier and code value.
///
/// Created once per discovered file per generation run, immutable, and
/// discarded after the run; regeneration is stateless and idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    /// Absolute project root.
    pub project_root: PathBuf,
    /// Path relative to the configured asset root it was found under.
    pub asset_root_relative_path: PathBuf,
    /// Absolute path on disk.
    pub absolute_path: PathBuf,
    /// Derived Dart identifier.
    pub identifier_name: String,
    /// String literal embedded in generated code.
    pub code_value: String,
}

impl AssetRecord {
    /// Build a record for `absolute_path` found under `asset_root`
    /// (project-relative).
    pub fn new(
        absolute_path: PathBuf,
        project_root: &Path,
        asset_root: &str,
        config: &GeneratorConfig,
    ) -> Self {
        let identifier_name = derive_identifier(&absolute_path, project_root, config);
        let code_value = derive_code_value(&absolute_path, project_root, config);
        let asset_root_relative_path = absolute_path
            .strip_prefix(project_root.join(asset_root))
            .unwrap_or(&absolute_path)
            .to_path_buf();

        Self {
            project_root: project_root.to_path_buf(),
            asset_root_relative_path,
            absolute_path,
            identifier_name,
            code_value,
        }
    }
}
