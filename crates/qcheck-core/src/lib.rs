//! # qcheck-core
//!
//! Schema checks for quiz-question documents.
//!
//! This crate provides:
//! - `Problem` / `ProblemKind`: one reported failure for one record
//! - `validate`: pure per-record validation over untyped JSON values
//! - `check_file` / `check_str` / `check_value`: document-level loading and
//!   aggregation into a `CheckReport`
//! - `CheckError`: terminal load and shape failures
//!
//! Records stay as `serde_json::Value` on purpose: a record may fail its
//! structural checks before its `type` can be trusted, so there is no typed
//! question struct to deserialize into.

pub mod checker;
pub mod equality;
pub mod error;
pub mod problem;
pub mod validator;

pub use checker::{CheckReport, check_file, check_str, check_value};
pub use error::CheckError;
pub use problem::{Problem, ProblemKind};
pub use validator::{MC_CHOICE_COUNT, MC_TYPE, REQUIRED_FIELDS, validate, validate_document};
