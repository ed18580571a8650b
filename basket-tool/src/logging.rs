use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::BskError;

/// Environment variable holding the log filter, e.g. `BASKET_LOG=debug`.
pub const LOG_ENV: &str = "BASKET_LOG";

/// Send tracing output to `log_file`. The terminal belongs to the TUI, so
/// without a file nothing is logged.
pub fn init(log_file: Option<&Path>) -> Result<(), BskError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| BskError::Logging(e.to_string()))
}
