//! # qcheck-config
//!
//! Layered configuration loading for qcheck using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QCHECK_*` prefix, `__` as separator)
//! 2. Project-level `.qcheck.toml`
//! 3. User-level `~/.config/qcheck/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! `QCHECK_CHECK__STRICT` -> `check.strict`,
//! `QCHECK_OUTPUT__FORMAT` -> `output.format`.
//!
//! # Usage
//!
//! ```no_run
//! use qcheck_config::QcheckConfig;
//!
//! let config = QcheckConfig::load_with_dotenv().expect("config");
//! println!("default document: {}", config.check.default_path);
//! ```

mod check;
mod error;
mod output;

pub use check::{CheckConfig, DEFAULT_DOCUMENT_PATH};
pub use error::ConfigError;
pub use output::{OutputConfig, ReportFormat};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".qcheck.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QcheckConfig {
    #[serde(default)]
    pub check: CheckConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl QcheckConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed and
    /// `ConfigError::InvalidValue` if the merged values are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("QCHECK_").split("__"))
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.check.default_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "check.default_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("qcheck").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = QcheckConfig::default();
        assert_eq!(config.check.default_path, DEFAULT_DOCUMENT_PATH);
        assert!(!config.check.strict);
        assert_eq!(config.output.format, ReportFormat::Human);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_default_path_is_rejected() {
        let mut config = QcheckConfig::default();
        config.check.default_path = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "check.default_path"
        ));
    }
}
