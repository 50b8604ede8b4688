//! Error types for the linkage library.
//!
//! The matching core is total and never fails; every variant here comes
//! from reading/writing the CSV collaborators or from a bad configuration.
//!
//! CHANGELOG:
//! - 10/17/2026 - Initial error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the CSV collaborators and config validation.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Column '{column}' not found in header of {}", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Column '{column}' is selected by name but {} is read without a header row", .path.display())]
    HeaderRequired { path: PathBuf, column: String },

    #[error("Threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LinkError>;
