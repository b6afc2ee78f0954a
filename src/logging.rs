//! Diagnostic logging to stderr.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable that overrides the log filter, e.g. `ENV_RUN_LOG=debug`.
pub const LOG_ENV_VAR: &str = "ENV_RUN_LOG";

/// Installs the global subscriber.
///
/// `default_filter` applies unless [`LOG_ENV_VAR`] holds a valid filter.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install logger: {e}");
    }
}
