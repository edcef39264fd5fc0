//! Failure classes for a normalization run.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for usage, not-found and structural failures.
pub const EXIT_USAGE: u8 = 2;

/// Exit code for unexpected I/O failures on an existing document.
pub const EXIT_IO: u8 = 1;

/// Errors that abort a run before anything is written.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// The target document does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The document exists but could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not parseable JSON.
    #[error("invalid JSON in {}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The document does not have the minimal OpenAPI shape.
    #[error("invalid OpenAPI document: {0}")]
    Structure(&'static str),
    /// The normalized document could not be serialized.
    #[error("failed to encode normalized document")]
    Encode(#[source] serde_json::Error),
    /// The normalized document could not be written back.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EnhanceError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            EnhanceError::NotFound(_)
            | EnhanceError::InvalidJson { .. }
            | EnhanceError::Structure(_) => EXIT_USAGE,
            EnhanceError::Read { .. } | EnhanceError::Encode(_) | EnhanceError::Write { .. } => {
                EXIT_IO
            }
        }
    }
}
