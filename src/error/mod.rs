//! Error handling for salary dataset ingestion and institution lookup.
//!
//! The statistics, grouping and comparison code never fails: empty input is a
//! value (`None`, an empty group list or an empty-state outcome). Errors only
//! come from reading datasets and from asking for an institution that was
//! never loaded.

use std::io;
use std::path::PathBuf;

/// Specialized error type for salary comparison operations
#[derive(Debug, thiserror::Error)]
pub enum SalaryCompareError {
    /// Error opening or reading a dataset file
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error decoding a JSON dataset document
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        /// Document that failed to decode (`<memory>` for in-memory input)
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Institution is not present in the loaded datasets
    #[error("Unknown institution: {0}")]
    UnknownInstitution(String),

    /// A required dataset has no entry for an institution
    #[error("Dataset '{kind}' has no entry for institution '{institution}'")]
    MissingDataset {
        /// Dataset kind (e.g. `titles`)
        kind: &'static str,
        /// Institution lacking the entry
        institution: String,
    },

    /// Background loading task failed to complete
    #[error("Loading task failed: {0}")]
    Task(String),
}

impl SalaryCompareError {
    /// Create an IO error for a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON decode error for a path
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result type for salary comparison operations
pub type Result<T> = std::result::Result<T, SalaryCompareError>;
