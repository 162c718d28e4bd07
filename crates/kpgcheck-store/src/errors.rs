//! Error handling for kpgcheck-store
//!
//! Wraps kpgcheck-core ExError with store-specific helpers

use std::path::Path;

use kpgcheck_core::errors::{ExError, ExErrorKind, KpgError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a path
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::from(KpgError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
    .with_op(operation)
}

/// Create an invalid input file error
pub fn invalid_input(path: &Path, reason: &str) -> ExError {
    ExError::from(KpgError::InvalidInputFile {
        path: path.display().to_string(),
        reason: reason.to_string(),
    })
    .with_op("open_export")
}

/// Create an unsupported document error
pub fn unsupported_document(reason: &str) -> ExError {
    KpgError::UnsupportedDocument {
        reason: reason.to_string(),
    }
    .into()
}

/// Create a configuration error
pub fn invalid_config(path: &Path, reason: impl std::fmt::Display) -> ExError {
    ExError::from(KpgError::InvalidConfig {
        reason: format!("{}: {}", path.display(), reason),
    })
    .with_entity(path.display().to_string())
}

/// Create a CSV write error
pub fn csv_error(path: &Path, err: csv::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op("write_csv")
        .with_entity(path.display().to_string())
        .with_message(err.to_string())
}

/// Create an internal error
pub fn internal(operation: &str, message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(operation)
        .with_message(message)
}
