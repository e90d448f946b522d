use clap::ValueEnum;
use qcheck_config::ReportFormat;

/// Report output mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Human => Self::Human,
            ReportFormat::Json => Self::Json,
        }
    }
}

/// Flags after merging command-line values over configuration.
#[derive(Clone, Debug)]
pub struct RunFlags {
    pub format: OutputFormat,
    pub strict: bool,
    pub quiet: bool,
}
