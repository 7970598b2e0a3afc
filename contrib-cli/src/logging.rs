use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Builds the log filter.
///
/// An explicit `level` (a bare level such as `"debug"` or any full
/// `EnvFilter` directive) wins over `RUST_LOG`. With neither, only warnings
/// and errors are shown.
pub fn make_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Initializes logging. Call once at startup.
///
/// Records go to stderr so that stdout carries only command output. A
/// second call is a no-op.
pub fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = make_filter(level)?;

    // Already initialized (e.g. by a test harness); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .try_init();

    Ok(())
}
