//! Error types for the data-loader crate.
//!
//! Loading errors are hard stops: a malformed record group means the file
//! cannot be trusted, so the caller is expected to surface the error and halt.
//! Record-level rule failures are not errors here, they belong to the
//! `validation` crate.

use thiserror::Error;

/// Errors that can occur while reading and parsing catalog files
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record group in a catalog file couldn't be parsed
    ///
    /// `line` is 1-based and points at the line that broke the group.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
