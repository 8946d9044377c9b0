//! Date and time utility functions
//!
//! This module extends `chrono::DateTime` with the fixed display patterns used by
//! the library, calendar arithmetic that reports failures instead of panicking,
//! day-boundary helpers, and the day/night classification.
//!
//! Weekday and month names always come from chrono's locale tables.

use std::fmt::{self, Display};

use chrono::{
    DateTime, Datelike, Days, Local, Locale, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Timelike, Utc,
};

use crate::constants::{
    CLOUD_PATH_FORMAT, DAY_FORMAT, DAY_MONTH_YEAR_FORMAT, DEFAULT_EVENING_HOUR, DEFAULT_MORNING_HOUR, FILE_NAME_FORMAT,
    HOUR_MINUTE_FORMAT, MINUTE_FORMAT, PRECISE_DATE_FORMAT, PRECISE_TIME_FORMAT, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECOND_FORMAT, STD_DATE_FORMAT, STD_TIME_FORMAT, TIMELINE_HEADER_PARSE_FORMAT, VIDEO_LOG_FORMAT,
};
use crate::utils::interval::secs_from_instant;
use crate::utils::strings::StringExt;

/// Calendar field used by the arithmetic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarUnit {
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalendarUnit::Month => "month",
            CalendarUnit::Day => "day",
            CalendarUnit::Hour => "hour",
            CalendarUnit::Minute => "minute",
            CalendarUnit::Second => "second",
        };
        f.write_str(name)
    }
}

/// Errors from calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Shifting by {amount} {unit}(s) leaves the supported date range")]
    OutOfRange { unit: CalendarUnit, amount: i64 },

    #[error("Local time {0} does not exist in this time zone")]
    NonexistentLocalTime(NaiveDateTime),
}

/// Fixed display layouts. Each variant owns its pattern, so no formatter state
/// is shared between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// `dd-MM-yyyy HH:mm:ss`
    Standard,
    /// `dd-MM-yy HH:mm:ss.SSS`
    Precise,
    /// `dd-MM-yyyy`
    DayMonthYear,
    /// `HH:mm:ss.SSS`
    PreciseTime,
    /// `HH:mm:ss`
    StandardTime,
    /// `HH:mm`
    HourMinute,
    /// `dd-MM-yyyy-HH-mm-ss`, safe for file names
    FileName,
    /// `/yyyy/MM/dd/`
    CloudPath,
    /// `dd-MM-yyyy HH:mm`
    VideoLog,
}

impl DatePattern {
    /// The chrono strftime string for this layout.
    pub const fn as_str(self) -> &'static str {
        match self {
            DatePattern::Standard => STD_DATE_FORMAT,
            DatePattern::Precise => PRECISE_DATE_FORMAT,
            DatePattern::DayMonthYear => DAY_MONTH_YEAR_FORMAT,
            DatePattern::PreciseTime => PRECISE_TIME_FORMAT,
            DatePattern::StandardTime => STD_TIME_FORMAT,
            DatePattern::HourMinute => HOUR_MINUTE_FORMAT,
            DatePattern::FileName => FILE_NAME_FORMAT,
            DatePattern::CloudPath => CLOUD_PATH_FORMAT,
            DatePattern::VideoLog => VIDEO_LOG_FORMAT,
        }
    }
}

/// Hour thresholds separating day from night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightInterval {
    /// First hour of the morning.
    pub morning: u32,
    /// Last hour of the evening.
    pub evening: u32,
}

impl Default for NightInterval {
    fn default() -> Self {
        Self {
            morning: DEFAULT_MORNING_HOUR,
            evening: DEFAULT_EVENING_HOUR,
        }
    }
}

impl NightInterval {
    pub fn new(morning: u32, evening: u32) -> Self {
        Self { morning, evening }
    }

    /// Strictly before the morning hour or strictly after the evening hour.
    pub fn is_night(&self, hour: u32) -> bool {
        hour < self.morning || hour > self.evening
    }

    /// Not the complement of [`is_night`](Self::is_night): the comparisons are
    /// inclusive and joined with `||`, so with `morning <= evening + 1` every
    /// hour counts as day, including the night hours on both sides.
    pub fn is_day(&self, hour: u32) -> bool {
        hour >= self.morning || hour <= self.evening
    }
}

const NOON: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(time) => time,
    None => panic!("12:00:00 is a valid time"),
};

fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>, CalendarError> {
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or(CalendarError::NonexistentLocalTime(naive))
}

fn shift_by<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    unit: CalendarUnit,
    amount: i64,
) -> Result<DateTime<Tz>, CalendarError> {
    let out_of_range = CalendarError::OutOfRange { unit, amount };
    let shifted = match unit {
        CalendarUnit::Month => {
            let months = u32::try_from(amount.unsigned_abs()).map_err(|_| out_of_range.clone())?;
            if amount >= 0 {
                instant.clone().checked_add_months(Months::new(months))
            } else {
                instant.clone().checked_sub_months(Months::new(months))
            }
        }
        CalendarUnit::Day => {
            let days = Days::new(amount.unsigned_abs());
            if amount >= 0 {
                instant.clone().checked_add_days(days)
            } else {
                instant.clone().checked_sub_days(days)
            }
        }
        CalendarUnit::Hour => {
            TimeDelta::try_hours(amount).and_then(|delta| instant.clone().checked_add_signed(delta))
        }
        CalendarUnit::Minute => {
            TimeDelta::try_minutes(amount).and_then(|delta| instant.clone().checked_add_signed(delta))
        }
        CalendarUnit::Second => {
            TimeDelta::try_seconds(amount).and_then(|delta| instant.clone().checked_add_signed(delta))
        }
    };
    shifted.ok_or(out_of_range)
}

fn shift_back<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    unit: CalendarUnit,
    amount: i64,
) -> Result<DateTime<Tz>, CalendarError> {
    let negated = amount
        .checked_neg()
        .ok_or(CalendarError::OutOfRange { unit, amount })?;
    shift_by(instant, unit, negated)
}

/// Extension methods for `chrono::DateTime`.
pub trait DateTimeExt: Sized {
    /// Format with one of the fixed layouts.
    fn format_pattern(&self, pattern: DatePattern) -> String;

    /// `dd-MM-yyyy HH:mm:ss`
    fn to_std_string(&self) -> String {
        self.format_pattern(DatePattern::Standard)
    }

    /// `dd-MM-yy HH:mm:ss.SSS`
    fn to_precise_string(&self) -> String {
        self.format_pattern(DatePattern::Precise)
    }

    /// `dd-MM-yyyy`
    fn to_day_month_year(&self) -> String {
        self.format_pattern(DatePattern::DayMonthYear)
    }

    /// `HH:mm:ss.SSS`
    fn to_precise_time(&self) -> String {
        self.format_pattern(DatePattern::PreciseTime)
    }

    /// `HH:mm:ss`
    fn to_std_time(&self) -> String {
        self.format_pattern(DatePattern::StandardTime)
    }

    /// `HH:mm`
    fn return_hh_mm(&self) -> String {
        self.format_pattern(DatePattern::HourMinute)
    }

    /// `dd-MM-yyyy-HH-mm-ss`
    fn return_file_name(&self) -> String {
        self.format_pattern(DatePattern::FileName)
    }

    /// `/yyyy/MM/dd/`
    fn return_cloud_path(&self) -> String {
        self.format_pattern(DatePattern::CloudPath)
    }

    /// `dd-MM-yyyy HH:mm`
    fn compare_video_log_dates(&self) -> String {
        self.format_pattern(DatePattern::VideoLog)
    }

    fn day_string(&self) -> String;
    fn minutes_string(&self) -> String;
    fn seconds_string(&self) -> String;
    fn hours_int(&self) -> u32;

    /// Full weekday name in `locale`.
    fn weekday_symbol(&self, locale: Locale) -> String;

    /// Weekday number counting Sunday as 1.
    fn weekday_number(&self) -> u32;

    /// `Weekday, d MonthName yyyy` with capitalized names.
    fn date_header(&self, locale: Locale) -> String;

    /// `Wkd d Mon yyyy` with capitalized short names.
    fn timeline_date_header(&self, locale: Locale) -> String;

    /// `d, MonthName yyyy`
    fn return_dd_mm_yy(&self, locale: Locale) -> String;

    fn add_months(&self, number: i64) -> Result<Self, CalendarError>;
    fn add_days(&self, number: i64) -> Result<Self, CalendarError>;
    fn add_hours(&self, number: i64) -> Result<Self, CalendarError>;
    fn add_minutes(&self, number: i64) -> Result<Self, CalendarError>;
    fn add_seconds(&self, number: i64) -> Result<Self, CalendarError>;
    fn months_ago(&self, number: i64) -> Result<Self, CalendarError>;
    fn days_ago(&self, number: i64) -> Result<Self, CalendarError>;
    fn hours_ago(&self, number: i64) -> Result<Self, CalendarError>;
    fn minutes_ago(&self, number: i64) -> Result<Self, CalendarError>;
    fn seconds_ago(&self, number: i64) -> Result<Self, CalendarError>;

    /// Shift back by exactly `number * 86400` seconds, ignoring the calendar.
    fn last_days(&self, number: i64) -> Result<Self, CalendarError>;

    /// Shift forward by exactly `number * 3600` seconds, ignoring the calendar.
    fn delta_hours(&self, number: i64) -> Result<Self, CalendarError>;

    /// Local midnight of the same calendar day.
    fn start_of_day(&self) -> Result<Self, CalendarError>;

    /// One second before the start of the next calendar day.
    fn end_of_day(&self) -> Result<Self, CalendarError>;

    /// 12:00:00 local time on the same calendar day.
    fn noon(&self) -> Result<Self, CalendarError>;

    fn midnight(&self) -> Result<Self, CalendarError> {
        self.start_of_day()
    }

    /// Noon of the previous calendar day.
    fn day_before(&self) -> Result<Self, CalendarError>;

    /// Noon of the next calendar day.
    fn day_after(&self) -> Result<Self, CalendarError>;

    fn is_last_day_of_month(&self) -> bool;

    /// Fractional seconds elapsed from `other` to `self`.
    fn seconds_since(&self, other: &Self) -> f64;

    fn is_night(&self) -> bool {
        self.is_night_with(NightInterval::default())
    }

    fn is_day(&self) -> bool {
        self.is_day_with(NightInterval::default())
    }

    fn is_night_with(&self, interval: NightInterval) -> bool {
        interval.is_night(self.hours_int())
    }

    fn is_day_with(&self, interval: NightInterval) -> bool {
        interval.is_day(self.hours_int())
    }
}

impl<Tz: TimeZone> DateTimeExt for DateTime<Tz>
where
    Tz::Offset: Display,
{
    fn format_pattern(&self, pattern: DatePattern) -> String {
        self.format(pattern.as_str()).to_string()
    }

    fn day_string(&self) -> String {
        self.format(DAY_FORMAT).to_string()
    }

    fn minutes_string(&self) -> String {
        self.format(MINUTE_FORMAT).to_string()
    }

    fn seconds_string(&self) -> String {
        self.format(SECOND_FORMAT).to_string()
    }

    fn hours_int(&self) -> u32 {
        self.hour()
    }

    fn weekday_symbol(&self, locale: Locale) -> String {
        self.format_localized("%A", locale).to_string()
    }

    fn weekday_number(&self) -> u32 {
        self.weekday().number_from_sunday()
    }

    fn date_header(&self, locale: Locale) -> String {
        let weekday = self.format_localized("%A", locale).to_string();
        let month = self.format_localized("%B", locale).to_string();
        format!(
            "{}, {} {} {}",
            weekday.capitalizing_first_letter(),
            self.day(),
            month.capitalizing_first_letter(),
            self.year()
        )
    }

    fn timeline_date_header(&self, locale: Locale) -> String {
        let weekday = self.format_localized("%a", locale).to_string();
        let month = self.format_localized("%b", locale).to_string();
        format!(
            "{} {} {} {}",
            weekday.capitalizing_first_letter(),
            self.day(),
            month.capitalizing_first_letter(),
            self.year()
        )
    }

    fn return_dd_mm_yy(&self, locale: Locale) -> String {
        let month = self.format_localized("%B", locale).to_string();
        format!("{}, {} {}", self.day(), month, self.year())
    }

    fn add_months(&self, number: i64) -> Result<Self, CalendarError> {
        shift_by(self, CalendarUnit::Month, number)
    }

    fn add_days(&self, number: i64) -> Result<Self, CalendarError> {
        shift_by(self, CalendarUnit::Day, number)
    }

    fn add_hours(&self, number: i64) -> Result<Self, CalendarError> {
        shift_by(self, CalendarUnit::Hour, number)
    }

    fn add_minutes(&self, number: i64) -> Result<Self, CalendarError> {
        shift_by(self, CalendarUnit::Minute, number)
    }

    fn add_seconds(&self, number: i64) -> Result<Self, CalendarError> {
        shift_by(self, CalendarUnit::Second, number)
    }

    fn months_ago(&self, number: i64) -> Result<Self, CalendarError> {
        shift_back(self, CalendarUnit::Month, number)
    }

    fn days_ago(&self, number: i64) -> Result<Self, CalendarError> {
        shift_back(self, CalendarUnit::Day, number)
    }

    fn hours_ago(&self, number: i64) -> Result<Self, CalendarError> {
        shift_back(self, CalendarUnit::Hour, number)
    }

    fn minutes_ago(&self, number: i64) -> Result<Self, CalendarError> {
        shift_back(self, CalendarUnit::Minute, number)
    }

    fn seconds_ago(&self, number: i64) -> Result<Self, CalendarError> {
        shift_back(self, CalendarUnit::Second, number)
    }

    fn last_days(&self, number: i64) -> Result<Self, CalendarError> {
        let seconds = number
            .checked_mul(SECONDS_PER_DAY)
            .ok_or(CalendarError::OutOfRange { unit: CalendarUnit::Day, amount: number })?;
        self.seconds_ago(seconds)
    }

    fn delta_hours(&self, number: i64) -> Result<Self, CalendarError> {
        let seconds = number
            .checked_mul(SECONDS_PER_HOUR)
            .ok_or(CalendarError::OutOfRange { unit: CalendarUnit::Hour, amount: number })?;
        self.add_seconds(seconds)
    }

    fn start_of_day(&self) -> Result<Self, CalendarError> {
        resolve_local(&self.timezone(), self.date_naive().and_time(NaiveTime::MIN))
    }

    fn end_of_day(&self) -> Result<Self, CalendarError> {
        self.start_of_day()?
            .add_days(1)?
            .checked_sub_signed(TimeDelta::seconds(1))
            .ok_or(CalendarError::OutOfRange { unit: CalendarUnit::Second, amount: -1 })
    }

    fn noon(&self) -> Result<Self, CalendarError> {
        resolve_local(&self.timezone(), self.date_naive().and_time(NOON))
    }

    fn day_before(&self) -> Result<Self, CalendarError> {
        self.noon()?.days_ago(1)
    }

    fn day_after(&self) -> Result<Self, CalendarError> {
        self.noon()?.add_days(1)
    }

    fn is_last_day_of_month(&self) -> bool {
        self.date_naive()
            .succ_opt()
            .map_or(true, |next| next.month() != self.month())
    }

    fn seconds_since(&self, other: &Self) -> f64 {
        secs_from_instant(self) - secs_from_instant(other)
    }
}

/// Midnight today in the local time zone.
pub fn today() -> Result<DateTime<Local>, CalendarError> {
    Local::now().start_of_day()
}

/// Noon yesterday in the local time zone.
pub fn yesterday() -> Result<DateTime<Local>, CalendarError> {
    Local::now().day_before()
}

/// Noon tomorrow in the local time zone.
pub fn tomorrow() -> Result<DateTime<Local>, CalendarError> {
    Local::now().day_after()
}

/// Parse a `dd-MM-yyyy HH:mm:ss` string as local time in `tz`.
///
/// Returns `None` when the string does not match or names a time that does
/// not exist in `tz`.
pub fn parse_std_date_string<Tz: TimeZone>(date_string: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(date_string, STD_DATE_FORMAT).ok()?;
    tz.from_local_datetime(&naive).earliest()
}

/// The epoch instant returned by parsers that always produce a value.
pub fn epoch_sentinel<Tz: TimeZone>(tz: &Tz) -> DateTime<Tz> {
    DateTime::<Utc>::default().with_timezone(tz)
}

/// Whether `instant` is the [`epoch_sentinel`], i.e. a failed parse.
pub fn is_parse_sentinel<Tz: TimeZone>(instant: &DateTime<Tz>) -> bool {
    instant.timestamp() == 0 && instant.timestamp_subsec_nanos() == 0
}

/// Parse a header produced by [`DateTimeExt::timeline_date_header`] back to
/// local midnight of that day.
///
/// Only English names are understood. Anything unparseable yields the
/// [`epoch_sentinel`].
pub fn parse_timeline_date_header<Tz: TimeZone>(date_header: &str, tz: &Tz) -> DateTime<Tz> {
    NaiveDate::parse_from_str(date_header.trim(), TIMELINE_HEADER_PARSE_FORMAT)
        .ok()
        .and_then(|date| tz.from_local_datetime(&date.and_time(NaiveTime::MIN)).earliest())
        .unwrap_or_else(|| epoch_sentinel(tz))
}
