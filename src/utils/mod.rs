//! Extension traits over chrono and primitive types.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Fixed-pattern formatting, calendar arithmetic and day/night checks for `DateTime`
//! - [`interval`] - Stopwatch-style formatting of `f64` second counts
//! - [`strings`] - Capitalization and localized lookup for display text
//!
//! All formatters are pure: they build their pattern per call and never
//! mutate their input.

pub mod datetime;
pub mod interval;
pub mod strings;
