//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::{expand_tilde, get_data_dir};
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "photogrid.log";

/// Resolves the log file path: `config.log_file` if set, otherwise
/// `<data_dir>/photogrid.log`.
#[must_use]
pub fn log_file_path(config: &Config) -> PathBuf {
    config
        .log_file
        .as_deref()
        .map_or_else(|| get_data_dir().join(LOG_FILE_NAME), expand_tilde)
}

/// Initializes the tracing subscriber with file output.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events with `RUST_LOG` if set, otherwise `config.trace_level`
/// 2. Formats them as plain text without ANSI colors
/// 3. Writes to a rotating file with backups
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if directory creation fails (logging is optional)
/// - Idempotent: safe to call multiple times (only the first call takes effect)
///
/// # Example
///
/// ```rust
/// use photogrid::observability::init_tracing;
/// use photogrid::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     trace_level: "debug".to_string(),
///     log_file: Some(dir.path().join("photogrid.log").display().to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let path = log_file_path(config);
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.trace_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let writer = FileWriter::new(path);
    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
