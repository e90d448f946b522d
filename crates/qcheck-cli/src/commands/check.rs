use std::path::{Path, PathBuf};

use anyhow::bail;
use qcheck_config::QcheckConfig;

use crate::cli::{OutputFormat, RunFlags};
use crate::output::{self, CheckOutcome};

/// Handle `qcheck [PATH]`. Returns the process exit code.
pub fn handle(
    path: Option<&Path>,
    config: &QcheckConfig,
    flags: &RunFlags,
) -> anyhow::Result<i32> {
    let path = resolve_path(path, config, flags);

    if !path.exists() {
        bail!("file does not exist: {}", path.display());
    }

    let outcome = qcheck_core::check_file(&path);
    if let Err(error) = &outcome {
        tracing::debug!(%error, "document could not be checked");
    }

    output::output(&path, &outcome, flags.format)?;
    Ok(exit_code(&outcome, flags.strict))
}

fn resolve_path(path: Option<&Path>, config: &QcheckConfig, flags: &RunFlags) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }

    let default = PathBuf::from(&config.check.default_path);
    if let Some(notice) = default_path_notice(&default, flags) {
        match notice.stream {
            Stream::Stdout => println!("{}", notice.text),
            Stream::Stderr => eprintln!("{}", notice.text),
        }
    }
    default
}

#[derive(Debug, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, PartialEq, Eq)]
struct Notice {
    text: String,
    stream: Stream,
}

/// Line announcing the fallback path, or `None` when quiet.
fn default_path_notice(default: &Path, flags: &RunFlags) -> Option<Notice> {
    if flags.quiet {
        return None;
    }
    let stream = match flags.format {
        OutputFormat::Human => Stream::Stdout,
        // Keep stdout a single JSON document.
        OutputFormat::Json => Stream::Stderr,
    };
    Some(Notice {
        text: format!("No path provided, using default: {}", default.display()),
        stream,
    })
}

/// Problems only fail the run in strict mode.
fn exit_code(outcome: &CheckOutcome, strict: bool) -> i32 {
    match outcome {
        Ok(report) if !strict || report.problems.is_empty() => 0,
        Err(_) if !strict => 0,
        _ => 1,
    }
}
