//! Evaluate one library call and print its result.

use std::process::ExitCode;

use anyhow::Result;
use kata_core::{Operation, Outcome, OutputFormat};
use serde::Serialize;

/// One JSON line per evaluation
#[derive(Debug, Serialize)]
struct EvalLine<'a> {
    operation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorLine>,
}

#[derive(Debug, Serialize)]
struct ErrorLine {
    code: &'static str,
    message: String,
}

/// Run the evaluate command
///
/// In human mode a domain error is returned so the caller prints it and
/// exits with its code. In JSON mode the error is printed as a JSON line
/// on stdout instead.
///
/// # Errors
///
/// Returns an error if:
/// - The operation is outside its domain (human mode)
/// - The result cannot be serialized (JSON mode)
pub fn run(operation: &Operation, format: OutputFormat) -> Result<ExitCode> {
    let evaluated = operation.evaluate();
    tracing::debug!(operation = operation.name(), ok = evaluated.is_ok(), "evaluated");

    if format.is_json() {
        println!("{}", render_json(operation, &evaluated)?);
        return Ok(evaluated.map_or_else(
            |e| ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1)),
            |_| ExitCode::SUCCESS,
        ));
    }

    let outcome = evaluated?;
    println!("{outcome}");
    Ok(ExitCode::SUCCESS)
}

/// Render an evaluation as a single JSON line.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(
    operation: &Operation,
    evaluated: &kata_core::Result<Outcome>,
) -> Result<String> {
    let line = match evaluated {
        Ok(outcome) => EvalLine {
            operation: operation.name(),
            result: Some(outcome),
            error: None,
        },
        Err(e) => EvalLine {
            operation: operation.name(),
            result: None,
            error: Some(ErrorLine {
                code: e.code(),
                message: e.to_string(),
            }),
        },
    };

    Ok(serde_json::to_string(&line)?)
}
