//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber.
///
/// Nothing is installed unless `verbose` or `debug` is set, so regular
/// command output stays clean. `RUST_LOG` overrides the chosen level.
pub fn init(verbose: bool, debug: bool) {
    if !verbose && !debug {
        return;
    }
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second init (e.g. from tests) keeps the existing subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
