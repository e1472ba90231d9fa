//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find the manifest file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `manifest_name`
/// Returns the absolute path to the manifest file if found
///
/// # Example
/// ```text
/// /home/user/app/lib/src/       ← cwd
/// /home/user/app/pubspec.yaml   ← found!
/// ```
pub fn find_manifest_file(manifest_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if manifest_name is an absolute path or exists in cwd
    if manifest_name.is_absolute() && manifest_name.exists() {
        return Some(manifest_name.to_path_buf());
    }

    // Walk up from cwd looking for the manifest
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(manifest_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

// ============================================================================
// tests
// ============================================================================
