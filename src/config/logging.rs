//! Diagnostic logging setup
//!
//! Events go to `expenses.log` in the base directory rather than the
//! terminal, which the TUI owns while it runs.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::paths::ExpensePaths;
use super::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the `log_level` setting. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init_logging(paths: &ExpensePaths, settings: &Settings) -> ExpenseResult<()> {
    paths.ensure_directories()?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| ExpenseError::Io(format!("Failed to open log file: {}", e)))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Arc::new(log_file));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    Ok(())
}
