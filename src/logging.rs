//! Log setup.
//!
//! The terminal game owns stdout/stderr while the alternate screen is up,
//! so it logs to a file. The browser server and the simulator log to
//! stderr. The filter comes from `RIDGE_RUNNER_LOG`, falling back to the
//! caller's default.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "RIDGE_RUNNER_LOG";

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Append logs to `path`.
pub fn init_file(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

/// Log to stderr at `default_directive` unless the env var says otherwise.
pub fn init_stderr(default_directive: &str) -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_writer(io::stderr)
        .try_init()
        .map_err(io::Error::other)
}
