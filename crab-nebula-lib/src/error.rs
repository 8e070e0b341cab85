// Error types for the file and configuration boundary. Induction itself
// cannot fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for boundary operations.
pub type Result<T> = std::result::Result<T, CrabError>;

#[derive(Error, Debug)]
pub enum CrabError {
    /// Input could not be read or a report could not be written.
    #[error("I/O failure on {}: {}", .path.display(), .source)]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A setting is out of range.
    #[error("invalid configuration for `{field}`: {message}")]
    Config { field: String, message: String },

    /// A configuration file is not valid JSON for the expected layout.
    #[error("malformed configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

impl CrabError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::IoFailure {
            path: path.into(),
            source,
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }
}
