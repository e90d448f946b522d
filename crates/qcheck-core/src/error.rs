//! Terminal failures of a document check.
//!
//! Per-record schema failures are not errors; they are collected as
//! [`Problem`](crate::Problem)s inside a [`CheckReport`](crate::CheckReport).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a document check before any record is validated.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The input file does not exist at load time.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input exists but could not be read as UTF-8 text.
    ///
    /// The I/O reason is rendered in the message and is not exposed as a
    /// `source`.
    #[error("Failed to read {}: {error}", .path.display())]
    Io { path: PathBuf, error: std::io::Error },

    /// The content is not syntactically valid JSON.
    #[error("File is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The JSON root is not an array.
    #[error("JSON must be a list of questions.")]
    NotAList,
}
