//! Store error types.
//!
//! These errors only surface through the fallible `read`/`write` methods.
//! The fail-soft `load`/`save` methods log them and keep going.

use std::path::PathBuf;

use thiserror::Error;

/// Mapping store operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid mapping document.
    #[error("Malformed mapping file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory tables could not be encoded.
    #[error("Failed to serialize mapping data")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// The temporary file could not be moved over the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the mapping file at {}", operation, path.display()),
            Self::Parse { path, source } => format!(
                "The mapping file at {} is not valid JSON ({}). Starting with empty mappings.",
                path.display(),
                source
            ),
            Self::Serialize { .. } => "An error occurred while encoding the mappings.".to_string(),
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not replace {}. The previous mappings were left in place.",
                target_path.display()
            ),
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
