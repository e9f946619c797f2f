// Rust guideline compliant 2026-02-06

//! Diagnostic logging setup.
//!
//! Logs go to stderr; stdout carries the hook report.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV: &str = "PARTIAL_FLAKE8_LOG";

/// Default level when neither the flag nor the environment sets one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the level is not one of error, warn, info, debug or trace.
pub fn init_tracing(level: Option<&str>) -> Result<()> {
    let from_env = std::env::var(LOG_ENV).ok();
    let level = parse_log_level(level.or(from_env.as_deref()).unwrap_or(DEFAULT_LEVEL))?;

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name, case-insensitively.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("invalid log level '{other}' (expected error, warn, info, debug or trace)"),
    }
}
