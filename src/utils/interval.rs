//! Formatting helpers for `f64` time intervals
//!
//! An interval is a count of seconds. Depending on the call site it is either an
//! elapsed duration (stopwatch values coming from [`crate::clock::Clock`]) or an
//! absolute instant expressed as seconds since the Unix epoch.
//!
//! Duration formatters truncate to whole seconds. Negative durations are clamped
//! to zero, so clock skew never renders as a negative stopwatch.

use std::fmt::Display;

use chrono::{DateTime, Locale, TimeZone, Utc};

use crate::constants::{HOUR_MINUTE_FORMAT, SECOND_FORMAT, STD_TIME_FORMAT};
use crate::utils::datetime::DateTimeExt;

/// Convert seconds since the Unix epoch to a UTC instant.
///
/// Values that are not finite or fall outside chrono's range map to the epoch.
pub fn instant_from_secs(secs: f64) -> DateTime<Utc> {
    if !secs.is_finite() {
        return DateTime::<Utc>::default();
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1_000_000_000.0).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos).unwrap_or_default()
}

/// Convert an instant back to fractional seconds since the Unix epoch.
pub fn secs_from_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / 1_000_000_000.0
}

/// Whole-second breakdown of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Components {
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Components {
    fn from_secs(secs: f64) -> Self {
        // `as` saturates and maps NaN to zero
        let time = (secs as i64).max(0);
        Self {
            hours: time / 3600,
            minutes: (time / 60) % 60,
            seconds: time % 60,
        }
    }
}

/// Extension methods for `f64` second counts.
pub trait TimeIntervalExt {
    /// `HH:MM:SS`, every component zero-padded.
    fn to_hhmmss_string(&self) -> String;

    /// Like [`to_hhmmss_string`](Self::to_hhmmss_string) but only shows the
    /// units that carry a value: `5` → `"5"`, `65` → `"01:05"`. Once hours
    /// are shown, minutes and seconds stay two digits: `3605` → `"01:00:05"`.
    fn to_smart_hhmmss_string(&self) -> String;

    /// `HH:MM:SS` with all three components always present.
    fn to_full_hhmmss_string(&self) -> String;

    /// `MM:SS` when there is at least one minute, otherwise `SS`. Hours are dropped.
    fn to_mmss_string_watch(&self) -> String;

    /// `H:M:S:ms`, non-padded.
    fn to_full_text(&self) -> String;

    /// `H:M:S`, non-padded.
    fn to_hhmmss(&self) -> String;

    /// `H hs : M min`
    fn to_hhmm(&self) -> String;

    /// Interpret the value as epoch seconds.
    fn to_instant(&self) -> DateTime<Utc>;

    /// Wall-clock `HH:mm` of the epoch instant in `tz`.
    fn time_clock<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display;

    /// Wall-clock `HH:mm:ss` of the epoch instant in `tz`.
    fn time_clock_full<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display;

    /// Seconds field (`ss`) of the epoch instant in `tz`.
    fn secs_only<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display;

    /// Timestamp label for log lines, `HH:mm:ss`.
    fn to_time_stamp<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display,
    {
        self.time_clock_full(tz)
    }

    /// `d, MonthName yyyy` of the epoch instant in `tz`.
    fn to_history_view_format<Tz: TimeZone>(&self, tz: &Tz, locale: Locale) -> String
    where
        Tz::Offset: Display;
}

impl TimeIntervalExt for f64 {
    fn to_hhmmss_string(&self) -> String {
        let c = Components::from_secs(*self);
        format!("{:02}:{:02}:{:02}", c.hours, c.minutes, c.seconds)
    }

    fn to_smart_hhmmss_string(&self) -> String {
        let c = Components::from_secs(*self);
        if c.hours > 0 {
            format!("{:02}:{:02}:{:02}", c.hours, c.minutes, c.seconds)
        } else if c.minutes > 0 {
            format!("{:02}:{:02}", c.minutes, c.seconds)
        } else {
            c.seconds.to_string()
        }
    }

    fn to_full_hhmmss_string(&self) -> String {
        let c = Components::from_secs(*self);
        format!("{:02}:{:02}:{:02}", c.hours, c.minutes, c.seconds)
    }

    fn to_mmss_string_watch(&self) -> String {
        let c = Components::from_secs(*self);
        if c.minutes > 0 {
            format!("{:02}:{:02}", c.minutes, c.seconds)
        } else {
            format!("{:02}", c.seconds)
        }
    }

    fn to_full_text(&self) -> String {
        let c = Components::from_secs(*self);
        let millis = if *self > 0.0 { (self.fract() * 1000.0) as i64 } else { 0 };
        format!("{}:{}:{}:{}", c.hours, c.minutes, c.seconds, millis)
    }

    fn to_hhmmss(&self) -> String {
        let c = Components::from_secs(*self);
        format!("{}:{}:{}", c.hours, c.minutes, c.seconds)
    }

    fn to_hhmm(&self) -> String {
        let c = Components::from_secs(*self);
        format!("{} hs : {} min", c.hours, c.minutes)
    }

    fn to_instant(&self) -> DateTime<Utc> {
        instant_from_secs(*self)
    }

    fn time_clock<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display,
    {
        self.to_instant().with_timezone(tz).format(HOUR_MINUTE_FORMAT).to_string()
    }

    fn time_clock_full<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display,
    {
        self.to_instant().with_timezone(tz).format(STD_TIME_FORMAT).to_string()
    }

    fn secs_only<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display,
    {
        self.to_instant().with_timezone(tz).format(SECOND_FORMAT).to_string()
    }

    fn to_history_view_format<Tz: TimeZone>(&self, tz: &Tz, locale: Locale) -> String
    where
        Tz::Offset: Display,
    {
        self.to_instant().with_timezone(tz).return_dd_mm_yy(locale)
    }
}
