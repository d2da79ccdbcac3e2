//! Logging setup.
//!
//! File logging lives under the user cache directory and is switched on
//! via the `[logging]` section of the configuration file. When disabled,
//! log macros across the crate compile to no-ops at the dispatch level.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Install the global logger according to configuration.
///
/// Calling this twice returns an error; initialize once from the
/// composition root.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_path = log_file_path()?;

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log_path)?)
        .apply()
        .context("Logger already initialized")?;

    Ok(())
}

/// Path of the log file inside the user cache directory.
pub fn log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
