mod check;
mod eval;

use std::process::ExitCode;

use anyhow::Result;
use clap::ArgMatches;
use kata_core::{config::load_config, OutputFormat};

/// Route parsed arguments to the matching command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the command fails.
pub async fn dispatch(matches: &ArgMatches) -> Result<ExitCode> {
    let config = load_config().await?;
    let format = if matches.get_flag("json") {
        OutputFormat::Json
    } else {
        config.output
    };

    tracing::debug!(%format, "resolved output format");

    match matches.subcommand() {
        Some(("check", sub)) => check::handle(sub, &config, format).await,
        Some((name, sub)) => eval::handle(name, sub, format),
        None => anyhow::bail!("No command given. Run 'kata --help' for usage."),
    }
}
