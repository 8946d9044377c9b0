//! datetime-extensions - formatting and calendar helpers on top of chrono
//!
//! This library adds display formatting, calendar arithmetic and day/night
//! classification to `chrono::DateTime`, stopwatch-style formatting to `f64`
//! second counts, and a ticking [`clock::Clock`] that UI code can subscribe to.
//!
//! # Modules
//!
//! * [`clock`] - Periodic clock with an optional elapsed-time session
//! * [`config`] - Library configuration management
//! * [`localization`] - Localized string bundles
//! * [`logger`] - Logging setup
//! * [`utils`] - Extension traits for dates, intervals and strings
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use datetime_extensions::prelude::*;
//!
//! let elapsed = 3725.0_f64;
//! assert_eq!(elapsed.to_hhmmss_string(), "01:02:05");
//!
//! let tz = FixedOffset::east_opt(0).unwrap();
//! let date = tz.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap();
//! assert_eq!(date.to_std_string(), "14-10-2026 09:30:00");
//! assert!(date.is_day());
//! ```

/// Ticking clock and time sources
pub mod clock;

/// Configuration module for managing library settings
pub mod config;

/// Library constants and default values
pub mod constants;

/// Key to string lookup tables loaded from TOML
pub mod localization;

/// Logging utilities
pub mod logger;

/// Utility functions for date/time handling and other helpers
pub mod utils;

/// Everything needed to call the extension methods.
pub mod prelude {
    pub use crate::clock::{Clock, ClockSnapshot, ManualTimeSource, SystemTimeSource, TimeSource};
    pub use crate::localization::Bundle;
    pub use crate::utils::datetime::{CalendarError, DatePattern, DateTimeExt, NightInterval};
    pub use crate::utils::interval::TimeIntervalExt;
    pub use crate::utils::strings::{CapitalizeInPlace, StringExt};
}
