//! Constants used throughout the library
//!
//! This module centralizes format patterns, default thresholds, and other
//! constant values to keep them consistent between formatters and config.

// Date patterns (chrono strftime syntax)
pub const STD_DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
pub const PRECISE_DATE_FORMAT: &str = "%d-%m-%y %H:%M:%S%.3f";
pub const DAY_MONTH_YEAR_FORMAT: &str = "%d-%m-%Y";
pub const PRECISE_TIME_FORMAT: &str = "%H:%M:%S%.3f";
pub const STD_TIME_FORMAT: &str = "%H:%M:%S";
pub const HOUR_MINUTE_FORMAT: &str = "%H:%M";
pub const FILE_NAME_FORMAT: &str = "%d-%m-%Y-%H-%M-%S";
pub const CLOUD_PATH_FORMAT: &str = "/%Y/%m/%d/";
pub const VIDEO_LOG_FORMAT: &str = "%d-%m-%Y %H:%M";
pub const TIMELINE_HEADER_PARSE_FORMAT: &str = "%a %d %B %Y";

// Single-field patterns
pub const DAY_FORMAT: &str = "%d";
pub const MINUTE_FORMAT: &str = "%M";
pub const SECOND_FORMAT: &str = "%S";

// Day/night thresholds (local hours)
pub const DEFAULT_MORNING_HOUR: u32 = 8;
pub const DEFAULT_EVENING_HOUR: u32 = 21;

// Clock
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const MIN_TICK_INTERVAL_MS: u64 = 1;
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

// Calendar
pub const DEFAULT_LOCALE: &str = "en_US";
pub const SECONDS_PER_HOUR: i64 = 60 * 60;
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

// Localization
pub const DEFAULT_LANGUAGE: &str = "en";
pub const BUNDLE_FILE_EXTENSION: &str = "toml";

// Configuration & logging
pub const APP_DIR_NAME: &str = "datetime-extensions";
pub const LOCAL_CONFIG_FILE: &str = "datetime-extensions.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "datetime-extensions.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
pub const MAX_LOG_ENTRIES: usize = 1000;
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";
