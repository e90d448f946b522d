//! Document-level checking: load, parse, shape check, aggregate.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::CheckError;
use crate::problem::Problem;
use crate::validator::validate_document;

/// Line printed when no problems were found.
pub const SUCCESS_MESSAGE: &str = "All questions look valid!";

/// Header printed before the problem list.
pub const PROBLEMS_HEADER: &str = "Found problems:";

/// Result of checking a well-formed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub records_checked: usize,
    pub problems: Vec<Problem>,
}

impl CheckReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Renders the line-oriented report: the success line, or the header and one
/// ` - <message>` line per problem.
impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str(SUCCESS_MESSAGE);
        }
        f.write_str(PROBLEMS_HEADER)?;
        for problem in &self.problems {
            write!(f, "\n - {problem}")?;
        }
        Ok(())
    }
}

/// Read, parse and check the document at `path`.
///
/// # Errors
///
/// Returns `CheckError::NotFound` if the file is missing, `CheckError::Io` if
/// it cannot be read as UTF-8, and the errors of [`check_str`] otherwise.
pub fn check_file(path: &Path) -> Result<CheckReport, CheckError> {
    tracing::debug!(path = %path.display(), "loading question document");

    let content = fs::read_to_string(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => CheckError::NotFound(path.to_path_buf()),
        _ => CheckError::Io {
            path: path.to_path_buf(),
            error,
        },
    })?;

    let report = check_str(&content)?;
    tracing::info!(
        path = %path.display(),
        records = report.records_checked,
        problems = report.problems.len(),
        "question document checked"
    );
    Ok(report)
}

/// Parse `content` as JSON and check it.
///
/// # Errors
///
/// Returns `CheckError::InvalidJson` on a parse failure and
/// `CheckError::NotAList` if the root is not an array.
pub fn check_str(content: &str) -> Result<CheckReport, CheckError> {
    let document: Value = serde_json::from_str(content)?;
    check_value(&document)
}

/// Check an already-parsed document.
///
/// # Errors
///
/// Returns `CheckError::NotAList` if the root is not an array.
pub fn check_value(document: &Value) -> Result<CheckReport, CheckError> {
    let Some(records) = document.as_array() else {
        return Err(CheckError::NotAList);
    };

    tracing::debug!(records = records.len(), "validating question records");
    Ok(CheckReport {
        records_checked: records.len(),
        problems: validate_document(records),
    })
}
