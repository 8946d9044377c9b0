//! Logging setup
//!
//! Library code logs through the `log` facade. [`init`] installs a `fern`
//! dispatcher that timestamps every record, appends it to a log file, and keeps
//! a copy in a shared in-memory [`Logger`] so a UI can show recent entries.

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT, MAX_LOG_ENTRIES};

/// Shared in-memory log buffer holding at most [`MAX_LOG_ENTRIES`] entries
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES))),
        }
    }

    /// Add a log entry, dropping the oldest one when the buffer is full
    pub fn log(&self, message: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                logs.pop_front();
            }
            logs.push_back(message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Build a dispatcher that formats records and feeds them into this buffer.
    ///
    /// Callers can chain more outputs before applying it.
    pub fn dispatch(&self, config: &LoggingConfig) -> Result<fern::Dispatch> {
        let level = if config.enabled {
            config.level_filter()?
        } else {
            log::LevelFilter::Off
        };

        let buffer = self.clone();
        Ok(fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Local::now().format(LOG_TIMESTAMP_FORMAT),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(fern::Output::call(move |record| buffer.log(record.args().to_string()))))
    }

    /// Get the log file path
    pub fn get_log_file_path() -> Result<PathBuf> {
        let dir = dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory for logs"))?;
        Ok(dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global logger described by `config` and return its buffer.
///
/// With logging disabled nothing is written to disk and the level is `Off`.
pub fn init(config: &LoggingConfig) -> Result<Logger> {
    let logger = Logger::new();
    let mut dispatch = logger.dispatch(config)?;

    if config.enabled {
        let path = Logger::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("A global logger is already installed")?;
    Ok(logger)
}
