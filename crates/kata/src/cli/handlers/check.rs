use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::ArgMatches;
use kata_core::{Config, OutputFormat};

use crate::commands::check::{self, CheckOptions};

pub async fn handle(
    matches: &ArgMatches,
    config: &Config,
    format: OutputFormat,
) -> Result<ExitCode> {
    let options = CheckOptions {
        suite: matches
            .get_one::<PathBuf>("suite")
            .cloned()
            .or_else(|| config.check.suite.clone()),
        fail_fast: matches.get_flag("fail-fast") || config.check.fail_fast,
        format,
    };

    check::run(&options).await
}
