//! Settings for the document check itself.

use serde::{Deserialize, Serialize};

/// Path checked when no path argument is given.
pub const DEFAULT_DOCUMENT_PATH: &str = "./question.json";

fn default_path() -> String {
    DEFAULT_DOCUMENT_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Document checked when the CLI gets no path argument.
    #[serde(default = "default_path")]
    pub default_path: String,

    /// Exit non-zero when problems are found or the document fails to load.
    #[serde(default)]
    pub strict: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            default_path: default_path(),
            strict: false,
        }
    }
}
