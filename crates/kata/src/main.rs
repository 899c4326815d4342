use std::process::ExitCode;

use kata::cli::{build_cli, handlers, setup};

#[tokio::main]
async fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    if let Err(e) = setup::init_tracing(matches.get_flag("verbose")) {
        eprintln!("Warning: {e}");
    }

    match handlers::dispatch(&matches).await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::from(setup::exit_code_for(&e))
        }
    }
}
