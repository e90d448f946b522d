//! Report output settings.

use serde::{Deserialize, Serialize};

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Line-oriented text.
    #[default]
    Human,
    /// One pretty-printed JSON object.
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ReportFormat,
}
