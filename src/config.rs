//! Configuration management
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DAY_MONTH_YEAR_FORMAT, DEFAULT_EVENING_HOUR, DEFAULT_LANGUAGE,
    DEFAULT_LOCALE, DEFAULT_LOG_LEVEL, DEFAULT_MORNING_HOUR, DEFAULT_TICK_INTERVAL_MS, LOCAL_CONFIG_FILE,
    MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
};
use crate::localization::Bundle;
use crate::utils::datetime::NightInterval;
use anyhow::{Context, Result};
use chrono::Locale;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub clock: ClockConfig,
    pub localization: LocalizationConfig,
    pub logging: LoggingConfig,
}

/// Calendar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Locale for weekday and month names, e.g. "en_US" or "it_IT"
    pub locale: String,
    /// First hour counted as morning
    pub morning_hour: u32,
    /// Last hour counted as evening
    pub evening_hour: u32,
}

/// Clock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Tick period in milliseconds
    pub tick_interval_ms: u64,
}

/// Localization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Directory holding `<language>.toml` bundles (empty = no bundle)
    pub bundle_dir: String,
    /// Language of the bundle to load
    pub language: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Maximum level: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            morning_hour: DEFAULT_MORNING_HOUR,
            evening_hour: DEFAULT_EVENING_HOUR,
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            bundle_dir: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CalendarConfig {
    /// The configured chrono locale
    pub fn locale(&self) -> Result<Locale> {
        Locale::try_from(self.locale.as_str()).map_err(|_| anyhow::anyhow!("Unknown locale '{}'", self.locale))
    }

    /// Day/night thresholds
    pub fn night_interval(&self) -> NightInterval {
        NightInterval::new(self.morning_hour, self.evening_hour)
    }
}

impl ClockConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl LocalizationConfig {
    /// Load the configured bundle, or an empty one when no directory is set
    pub fn load_bundle(&self) -> Result<Bundle> {
        if self.bundle_dir.is_empty() {
            return Ok(Bundle::empty());
        }
        Bundle::load(&self.bundle_dir, &self.language)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate calendar settings
        self.calendar.locale()?;

        if self.calendar.morning_hour > 23 || self.calendar.evening_hour > 23 {
            anyhow::bail!(
                "morning_hour and evening_hour must be between 0 and 23, got {} and {}",
                self.calendar.morning_hour,
                self.calendar.evening_hour
            );
        }

        if self.calendar.morning_hour > self.calendar.evening_hour {
            anyhow::bail!(
                "morning_hour ({}) cannot be later than evening_hour ({})",
                self.calendar.morning_hour,
                self.calendar.evening_hour
            );
        }

        // Validate tick interval
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.clock.tick_interval_ms) {
            anyhow::bail!(
                "tick_interval_ms must be between {} and {}, got {}",
                MIN_TICK_INTERVAL_MS,
                MAX_TICK_INTERVAL_MS,
                self.clock.tick_interval_ms
            );
        }

        if !self.localization.bundle_dir.is_empty() && self.localization.language.is_empty() {
            anyhow::bail!("language cannot be empty when bundle_dir is set");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# datetime-extensions configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format(DAY_MONTH_YEAR_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
