//! Process setup: logging and exit codes

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for logging
///
/// Configures the tracing subscriber with:
/// - Environment filter (`RUST_LOG`), defaulting to WARN or DEBUG with `--verbose`
/// - Stderr output (to avoid mixing with stdout)
///
/// # Errors
/// Returns an error if the subscriber initialization fails
pub fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

/// Map an error to a process exit code.
///
/// Library errors carry their own code; anything else is a usage error.
pub fn exit_code_for(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<kata_core::Error>()
        .map_or(1, |e| u8::try_from(e.exit_code()).unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_core_errors() {
        let io = anyhow::Error::new(kata_core::Error::IoError("gone".into()));
        assert_eq!(exit_code_for(&io), 2);

        let domain = anyhow::Error::new(kata_core::Error::EmptySequence {
            operation: "find_max",
        });
        assert_eq!(exit_code_for(&domain), 1);
    }

    #[test]
    fn test_exit_code_for_context_wrapped_error() {
        use anyhow::Context;

        let wrapped: Result<()> =
            Err(kata_core::Error::IoError("gone".into())).context("loading suite");
        let err = wrapped.expect_err("error");
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        assert_eq!(exit_code_for(&anyhow::anyhow!("something else")), 1);
    }
}
