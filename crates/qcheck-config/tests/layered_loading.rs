//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env var changes.
//! `XDG_CONFIG_HOME` points into the jail so a real user config never leaks in.

use figment::Jail;
use pretty_assertions::assert_eq;
use qcheck_config::{ConfigError, QcheckConfig, ReportFormat};

fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().display().to_string();
    jail.set_env("XDG_CONFIG_HOME", dir);
}

#[test]
fn defaults_apply_without_sources() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);

        let config = QcheckConfig::load().expect("config loads");
        assert_eq!(config.check.default_path, "./question.json");
        assert!(!config.check.strict);
        assert_eq!(config.output.format, ReportFormat::Human);
        Ok(())
    });
}

#[test]
fn project_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            ".qcheck.toml",
            r#"
[check]
default_path = "data/quiz.json"
strict = true

[output]
format = "json"
"#,
        )?;

        let config = QcheckConfig::load().expect("config loads");
        assert_eq!(config.check.default_path, "data/quiz.json");
        assert!(config.check.strict);
        assert_eq!(config.output.format, ReportFormat::Json);
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn project_file_beats_user_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir("qcheck")?;
        jail.create_file(
            "qcheck/config.toml",
            r#"
[check]
default_path = "user.json"
strict = true
"#,
        )?;
        jail.create_file(
            ".qcheck.toml",
            r#"
[check]
default_path = "project.json"
"#,
        )?;

        let config = QcheckConfig::load().expect("config loads");
        assert_eq!(config.check.default_path, "project.json");
        assert!(config.check.strict, "unset project keys keep the user value");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            ".qcheck.toml",
            r#"
[check]
strict = false

[output]
format = "human"
"#,
        )?;
        jail.set_env("QCHECK_CHECK__STRICT", "true");
        jail.set_env("QCHECK_OUTPUT__FORMAT", "json");

        let config = QcheckConfig::load().expect("config loads");
        assert!(config.check.strict);
        assert_eq!(config.output.format, ReportFormat::Json);
        Ok(())
    });
}

#[test]
fn log_filter_env_var_is_ignored() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("QCHECK_LOG", "debug");

        let config = QcheckConfig::load().expect("config loads");
        assert_eq!(config.check.default_path, "./question.json");
        Ok(())
    });
}

#[test]
fn unknown_format_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("QCHECK_OUTPUT__FORMAT", "xml");

        let error = QcheckConfig::load().expect_err("format is rejected");
        assert!(matches!(error, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn empty_default_path_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            ".qcheck.toml",
            r#"
[check]
default_path = ""
"#,
        )?;

        let error = QcheckConfig::load().expect_err("empty path is rejected");
        assert!(matches!(error, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
