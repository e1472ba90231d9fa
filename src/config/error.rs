//! Error types for a generation run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// There is no partial-success mode: the first error surfaces to the
/// caller verbatim and the run stops.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Missing or empty asset-roots list, invalid generator options.
    #[error("config error: {0}")]
    Config(String),

    /// Unreadable manifest or asset directory, failed output write.
    #[error("IO error at `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Malformed manifest content.
    #[error("manifest parsing error")]
    ManifestParse(#[from] serde_yaml::Error),

    /// Malformed ARB file content.
    #[error("ARB parsing error at `{0}`")]
    ArbParse(PathBuf, #[source] serde_json::Error),
}

pub type GenerateResult<T> = Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_display_contains_path() {
        let err = GenerateError::Io(
            PathBuf::from("assets/img"),
            Error::new(ErrorKind::NotFound, "not found"),
        );
        let display = format!("{err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("assets/img"));
    }

    #[test]
    fn test_config_error_display() {
        let err = GenerateError::Config("no asset paths configured".into());
        assert_eq!(format!("{err}"), "config error: no asset paths configured");
    }
}
