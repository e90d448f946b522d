use std::path::Path;

use qcheck_core::{CheckError, CheckReport, Problem};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Outcome of one document check, as handed to the renderer.
pub type CheckOutcome = Result<CheckReport, CheckError>;

/// JSON shape of a check: the report, or the terminal error.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    path: String,
    status: &'static str,
    records_checked: Option<usize>,
    problems: Vec<JsonProblem<'a>>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonProblem<'a> {
    #[serde(flatten)]
    problem: &'a Problem,
    message: String,
}

impl<'a> JsonReport<'a> {
    fn new(path: &Path, outcome: &'a CheckOutcome) -> Self {
        let path = path.display().to_string();
        match outcome {
            Ok(report) => Self {
                path,
                status: if report.is_valid() { "valid" } else { "invalid" },
                records_checked: Some(report.records_checked),
                problems: report
                    .problems
                    .iter()
                    .map(|problem| JsonProblem {
                        problem,
                        message: problem.to_string(),
                    })
                    .collect(),
                error: None,
            },
            Err(error) => Self {
                path,
                status: "error",
                records_checked: None,
                problems: Vec::new(),
                error: Some(error.to_string()),
            },
        }
    }
}

/// Render a check outcome in the requested format.
pub fn render(
    path: &Path,
    outcome: &CheckOutcome,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Human => Ok(match outcome {
            Ok(report) => report.to_string(),
            Err(error) => error.to_string(),
        }),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&JsonReport::new(path, outcome))?),
    }
}

/// Print a check outcome to stdout in the requested format.
pub fn output(
    path: &Path,
    outcome: &CheckOutcome,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render(path, outcome, format)?;
    println!("{rendered}");
    Ok(())
}
