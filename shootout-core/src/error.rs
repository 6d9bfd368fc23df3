//! Custom error types for the shootout harness.
//!
//! This module defines explicit enum error types - no `Box<dyn Error>`,
//! no `anyhow::Result`. Only fatal conditions surface here; a parser
//! rejecting its input is recoverable and handled inside the runner.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the shootout harness.
///
/// Every variant is fatal: the driver stops processing and the CLI exits
/// with a non-zero status.
#[derive(Debug, Error)]
pub enum ShootoutError {
    #[error("{path}: no such file")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report line: {0}")]
    Report(#[source] std::io::Error),
}

/// Result type alias using ShootoutError.
pub type ShootoutResult<T> = Result<T, ShootoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = ShootoutError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        assert_eq!(err.to_string(), "/tmp/missing.json: no such file");
    }

    #[test]
    fn test_io_error_chain() {
        let source = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err = ShootoutError::Io {
            context: "reading document",
            source,
        };
        assert!(err.to_string().contains("reading document"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
