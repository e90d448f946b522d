use std::path::PathBuf;

use clap::Parser;
use qcheck_config::QcheckConfig;

pub mod global;

pub use global::{OutputFormat, RunFlags};

/// Top-level CLI parser for the `qcheck` binary.
#[derive(Debug, Parser)]
#[command(
    name = "qcheck",
    version,
    about = "qcheck - validate quiz question documents"
)]
pub struct Cli {
    /// Question document to check (defaults to `check.default_path`, ./question.json)
    pub path: Option<PathBuf>,

    /// Output format: human, json (defaults to `output.format`)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Exit with status 1 when problems are found or the document fails to load
    #[arg(long)]
    pub strict: bool,

    /// Quiet mode (errors only, no default-path notice)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge command-line flags over loaded configuration.
    #[must_use]
    pub fn run_flags(&self, config: &QcheckConfig) -> RunFlags {
        RunFlags {
            format: self
                .format
                .unwrap_or_else(|| config.output.format.into()),
            strict: self.strict || config.check.strict,
            quiet: self.quiet,
        }
    }
}
