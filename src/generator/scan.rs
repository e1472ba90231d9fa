//! Directory scanning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{GenerateError, GenerateResult};

/// File names excluded from every scan (OS metadata artifacts).
const EXCLUDED_FILES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Enumerate files (never directories) under `dir`.
///
/// With `recursive`, descends into subdirectories and appends their files;
/// without it, subdirectories are skipped entirely. Hidden (dot-prefixed)
/// files and OS metadata artifacts are always excluded.
///
/// The returned sequence is unordered; ordering is imposed later by the
/// collection builder. A missing or unreadable directory is an `Io` error;
/// the caller decides whether to treat it as empty or propagate.
pub fn list_files(dir: &Path, recursive: bool) -> GenerateResult<Vec<PathBuf>> {
    list_files_with(dir, recursive, &[])
}

/// [`list_files`] with additional caller-supplied excluded file names.
pub fn list_files_with(
    dir: &Path,
    recursive: bool,
    extra_excludes: &[String],
) -> GenerateResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|err| GenerateError::Io(dir.to_path_buf(), err))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| GenerateError::Io(dir.to_path_buf(), err))?;
        let path = entry.path();

        if path.is_dir() {
            if recursive {
                files.extend(list_files_with(&path, true, extra_excludes)?);
            }
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if is_excluded(&name) || extra_excludes.iter().any(|pattern| pattern == &*name) {
            continue;
        }
        files.push(path);
    }

    Ok(files)
}

fn is_excluded(name: &str) -> bool {
    name.starts_with('.') || EXCLUDED_FILES.contains(&name)
}

// ============================================================================
// tests
// ============================================================================
