//! Path → identifier transformation (pure, no side effects).
//!
//! Two community tools established slightly different naming conventions
//! for generated asset constants: one joins the full directory chain into
//! the identifier, the other prefixes the immediate parent directory name
//! only. Both dialects are served by one transform parameterized by
//! `named_with_parent` and `filename_split_pattern`; callers never branch
//! on which upstream they are migrating from.

use std::path::{Component, Path};

use crate::config::GeneratorConfig;

/// Derive the Dart identifier for one asset file.
///
/// `scan_base` is the directory the relative segment chain is computed
/// against; the collection builder passes the project root, so the chain
/// always contains every directory between project root and file and the
/// immediate parent is its last element.
///
/// Steps:
/// 1. The base name loses everything from the *first* dot (`a.b.png` → `a`).
/// 2. Directory segments between `scan_base` and the file have embedded
///    dots replaced by underscores.
/// 3. With `named_with_parent`, the last segment (immediate parent only;
///    deeper ancestors are discarded, matching the upstream convention)
///    becomes the prefix; otherwise there is no prefix at all.
/// 4. The separator pattern splits words for camel-casing: prefix and
///    composed name each pass through the split transform, the composed
///    name a second time.
///
/// No reserved-word or leading-digit validation is performed; collisions
/// keep last-match semantics.
pub fn derive_identifier(
    absolute_path: &Path,
    scan_base: &Path,
    config: &GeneratorConfig,
) -> String {
    let base_name = absolute_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base_name_no_ext = base_name.split('.').next().unwrap_or_default();

    let relative = absolute_path.strip_prefix(scan_base).unwrap_or(absolute_path);
    let all_dirs: Vec<String> = relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|component| match component {
                    Component::Normal(segment) => {
                        Some(segment.to_string_lossy().replace('.', "_"))
                    }
                    _ => None,
                })
                .filter(|segment| !segment.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let dir_prefix_raw = if config.named_with_parent {
        all_dirs.last().cloned().unwrap_or_default()
    } else {
        String::new()
    };

    let var_name = if dir_prefix_raw.is_empty() {
        lower_first(base_name_no_ext)
    } else {
        format!(
            "{}{}",
            split_to_camel(&dir_prefix_raw, config),
            upper_first(base_name_no_ext)
        )
    };

    split_to_camel(&var_name, config)
}

/// Derive the string literal embedded as the identifier's value: the
/// project-relative path, optionally behind `packages/<package_name>/`.
pub fn derive_code_value(
    absolute_path: &Path,
    project_root: &Path,
    config: &GeneratorConfig,
) -> String {
    let relative = absolute_path
        .strip_prefix(project_root)
        .unwrap_or(absolute_path);
    let value = relative.to_string_lossy().replace('\\', "/");

    if config.leading_with_package_name && !config.package_name.is_empty() {
        format!("packages/{}/{}", config.package_name, value)
    } else {
        value
    }
}

/// Replace every run of separator characters plus the following character
/// by that character upper-cased (`my-icon_name` → `myIconName`).
fn split_to_camel(input: &str, config: &GeneratorConfig) -> String {
    config
        .split_regex()
        .replace_all(input, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

fn lower_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ============================================================================
// tests
// ============================================================================
