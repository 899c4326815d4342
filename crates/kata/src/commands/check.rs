//! Run a case battery and report per-case results.

use std::{fmt::Write as _, path::PathBuf, process::ExitCode};

use anyhow::Result;
use kata_core::{CaseStatus, OutputFormat, Report, Suite};
use tracing::info;

/// Check command options
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Suite file; `None` runs the built-in battery
    pub suite: Option<PathBuf>,
    /// Stop at the first failing case
    pub fail_fast: bool,
    pub format: OutputFormat,
}

/// Run the check command
///
/// Exits with failure when any case fails.
///
/// # Errors
///
/// Returns an error if:
/// - The suite file cannot be read or parsed
/// - The report cannot be serialized (JSON mode)
pub async fn run(options: &CheckOptions) -> Result<ExitCode> {
    let suite = match &options.suite {
        Some(path) => Suite::load(path).await?,
        None => Suite::builtin(),
    };

    info!(
        cases = suite.len(),
        fail_fast = options.fail_fast,
        "running battery"
    );
    let report = suite.run(options.fail_fast);

    print!("{}", render(&report, options.format)?);

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Render a report as text lines or as one JSON object.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    if format.is_json() {
        return Ok(format!("{}\n", serde_json::to_string(report)?));
    }

    let mut out = String::new();
    for result in &report.results {
        match (&result.status, &result.message) {
            (CaseStatus::Failed, Some(message)) => {
                writeln!(out, "{} {}: {message}", result.status, result.name)?;
            }
            _ => writeln!(out, "{} {}", result.status, result.name)?,
        }
    }
    writeln!(out, "{report}")?;
    Ok(out)
}
