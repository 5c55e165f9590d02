//! Error types for record cleaning.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`CleanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source file is missing or cannot be read.
    NotFound,
    /// The source file is not a JSON array of objects.
    Parse,
    /// The destination file cannot be created or written.
    Io,
}

/// Errors that can occur while loading, cleaning, or saving records.
#[derive(Debug, Error)]
pub enum CleanError {
    // === Source Errors ===
    /// Source file does not exist.
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Source file exists but could not be read.
    #[error("failed to read source file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source contents are not a JSON array of objects.
    #[error("failed to parse records in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Destination Errors ===
    /// Records could not be encoded.
    #[error("failed to serialize records for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Destination I/O failure.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file was written but could not be moved into place.
    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CleanError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceNotFound { .. } | Self::Read { .. } => ErrorKind::NotFound,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Serialize { .. } | Self::Io { .. } | Self::AtomicWriteFailed { .. } => {
                ErrorKind::Io
            }
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::SourceNotFound { path } => {
                format!("The source file {} does not exist.", path.display())
            }
            Self::Read { path, .. } => {
                format!("The source file {} could not be read.", path.display())
            }
            Self::Parse { path, source } => format!(
                "The source file {} is not a JSON array of objects (line {}, column {}).",
                path.display(),
                source.line(),
                source.column()
            ),
            Self::Serialize { path, .. } => {
                format!("The records for {} could not be encoded.", path.display())
            }
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}.", operation, path.display())
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!("Could not save the file to {}.", target_path.display())
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::SourceNotFound { .. } => {
                Some("Check the path, or pass --input to point at the records file.".into())
            }
            Self::Read { .. } => {
                Some("Check that you have permission to read the source file.".into())
            }
            Self::Parse { .. } => Some(
                "The file must contain a single JSON array whose elements are all objects.".into(),
            ),
            Self::Serialize { .. } => None,
            Self::Io { .. } | Self::AtomicWriteFailed { .. } => Some(
                "Check disk space and that you have permission to write to this location.".into(),
            ),
        }
    }
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CleanError::SourceNotFound {
            path: PathBuf::from("/data/enriched_cities.json"),
        };
        assert_eq!(
            err.to_string(),
            "source file not found: /data/enriched_cities.json"
        );
    }

    #[test]
    fn test_error_kind() {
        let not_found = CleanError::SourceNotFound {
            path: PathBuf::from("a.json"),
        };
        assert_eq!(not_found.kind(), ErrorKind::NotFound);

        let parse = CleanError::Parse {
            path: PathBuf::from("a.json"),
            source: serde_json::from_str::<serde_json::Value>("[").unwrap_err(),
        };
        assert_eq!(parse.kind(), ErrorKind::Parse);
        assert!(parse.user_message().contains("line 1"));

        let io = CleanError::Io {
            operation: "create",
            path: PathBuf::from("out.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(io.kind(), ErrorKind::Io);
        assert!(io.suggestion().is_some());
    }
}
