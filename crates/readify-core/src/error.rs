//! Error types for Readify.
//!
//! Storage failures (the library file) and catalog failures (the remote book
//! service) share one enum so callers can propagate with `?` and still tell
//! the two apart with [`ReadifyError::is_storage`] / [`ReadifyError::is_catalog`].
//! A missing book is not an error: lookups return `Option` and deletes `bool`.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Main error type for the Readify library.
#[derive(Debug, Error)]
pub enum ReadifyError {
    // Storage errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Catalog errors
    #[error("Catalog request failed: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Catalog request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid catalog response: {message}")]
    InvalidResponse { message: String },

    // Input and configuration errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for Readify operations.
pub type Result<T> = std::result::Result<T, ReadifyError>;

impl From<std::io::Error> for ReadifyError {
    fn from(err: std::io::Error) -> Self {
        ReadifyError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for ReadifyError {
    fn from(err: serde_json::Error) -> Self {
        ReadifyError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl ReadifyError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ReadifyError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Wrap a reqwest failure, keeping timeouts distinguishable.
    pub(crate) fn from_request(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ReadifyError::Timeout(timeout)
        } else {
            ReadifyError::Network {
                message: err.to_string(),
                status_code: err.status().map(|s| s.as_u16()),
            }
        }
    }

    /// True for failures reading or writing the library file.
    pub fn is_storage(&self) -> bool {
        matches!(self, ReadifyError::Io { .. } | ReadifyError::Json { .. })
    }

    /// True for failures talking to the remote catalog.
    pub fn is_catalog(&self) -> bool {
        matches!(
            self,
            ReadifyError::Network { .. }
                | ReadifyError::Timeout(_)
                | ReadifyError::InvalidResponse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_storage() {
        let err: ReadifyError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_storage());
        assert!(!err.is_catalog());
    }

    #[test]
    fn test_json_error_is_storage() {
        let parse_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: ReadifyError = parse_err.into();
        assert!(err.is_storage());
    }

    #[test]
    fn test_catalog_kinds() {
        let network = ReadifyError::Network {
            message: "503".to_string(),
            status_code: Some(503),
        };
        assert!(network.is_catalog());
        assert!(ReadifyError::Timeout(Duration::from_secs(15)).is_catalog());
        assert!(!ReadifyError::Validation {
            field: "query".to_string(),
            message: "empty".to_string(),
        }
        .is_catalog());
    }

    #[test]
    fn test_io_with_path_display() {
        let err = ReadifyError::io_with_path(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            "/tmp/library.json",
        );
        let msg = err.to_string();
        assert!(msg.contains("library.json"));
        assert!(msg.contains("denied"));
    }
}
