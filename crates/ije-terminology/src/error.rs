//! Error types for terminology loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading geographic reference data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TerminologyError {
    /// Failed to read the reference file.
    #[error("failed to read geo reference data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reference file is not valid JSON for a geo table.
    #[error("failed to parse geo reference data {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A table row is missing its code or name.
    #[error("empty {field} in {table} entry {index}")]
    EmptyEntry {
        table: &'static str,
        field: &'static str,
        index: usize,
    },
}

impl TerminologyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for terminology operations.
pub type Result<T> = std::result::Result<T, TerminologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TerminologyError::EmptyEntry {
            table: "counties",
            field: "name",
            index: 3,
        };
        assert_eq!(err.to_string(), "empty name in counties entry 3");

        let err = TerminologyError::io(
            "geo.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().starts_with("failed to read geo reference data geo.json"));
    }
}
