use chrono::{FixedOffset, Locale, Utc};
use datetime_extensions::utils::interval::*;

#[test]
fn test_hhmmss_string_zero() {
    assert_eq!(0.0_f64.to_hhmmss_string(), "00:00:00");
}

#[test]
fn test_hhmmss_string_pads_each_component() {
    assert_eq!(5.0_f64.to_hhmmss_string(), "00:00:05");
    assert_eq!(3725.0_f64.to_hhmmss_string(), "01:02:05");
    assert_eq!(45296.0_f64.to_hhmmss_string(), "12:34:56");
}

#[test]
fn test_hhmmss_string_truncates_fraction() {
    assert_eq!(59.9_f64.to_hhmmss_string(), "00:00:59");
}

#[test]
fn test_hhmmss_string_shape_below_100_hours() {
    let mut secs = 0.0_f64;
    while secs < 360_000.0 {
        let text = secs.to_hhmmss_string();
        assert_eq!(text.len(), 8, "unexpected width for {}: {}", secs, text);
        for (i, c) in text.chars().enumerate() {
            if i == 2 || i == 5 {
                assert_eq!(c, ':');
            } else {
                assert!(c.is_ascii_digit(), "non digit in {}", text);
            }
        }
        secs += 997.0;
    }
}

#[test]
fn test_hhmmss_string_hours_grow_past_two_digits() {
    assert_eq!(360_000.0_f64.to_hhmmss_string(), "100:00:00");
}

#[test]
fn test_smart_string_seconds_only() {
    assert_eq!(5.0_f64.to_smart_hhmmss_string(), "5");
    assert_eq!(59.0_f64.to_smart_hhmmss_string(), "59");
    assert_eq!(0.0_f64.to_smart_hhmmss_string(), "0");
}

#[test]
fn test_smart_string_omits_hours_below_one_hour() {
    assert_eq!(65.0_f64.to_smart_hhmmss_string(), "01:05");
    assert_eq!(600.0_f64.to_smart_hhmmss_string(), "10:00");
    assert_eq!(3599.0_f64.to_smart_hhmmss_string(), "59:59");
}

#[test]
fn test_smart_string_with_hours() {
    assert_eq!(3725.0_f64.to_smart_hhmmss_string(), "01:02:05");
    assert_eq!(3605.0_f64.to_smart_hhmmss_string(), "01:00:05");
}

#[test]
fn test_full_string_always_has_three_components() {
    assert_eq!(0.0_f64.to_full_hhmmss_string(), "00:00:00");
    assert_eq!(7.0_f64.to_full_hhmmss_string(), "00:00:07");
    assert_eq!(3661.0_f64.to_full_hhmmss_string(), "01:01:01");
    for secs in [1.0_f64, 61.0, 3600.0, 86_399.0] {
        assert_eq!(secs.to_full_hhmmss_string().split(':').count(), 3);
    }
}

#[test]
fn test_watch_string() {
    assert_eq!(5.0_f64.to_mmss_string_watch(), "05");
    assert_eq!(65.0_f64.to_mmss_string_watch(), "01:05");
    // hours are not shown on the watch face
    assert_eq!(3725.0_f64.to_mmss_string_watch(), "02:05");
}

#[test]
fn test_full_text_includes_milliseconds() {
    assert_eq!(3661.5_f64.to_full_text(), "1:1:1:500");
    assert_eq!(0.25_f64.to_full_text(), "0:0:0:250");
    assert_eq!(10.0_f64.to_full_text(), "0:0:10:0");
}

#[test]
fn test_unpadded_formats() {
    assert_eq!(3661.0_f64.to_hhmmss(), "1:1:1");
    assert_eq!(3720.0_f64.to_hhmm(), "1 hs : 2 min");
    assert_eq!(59.0_f64.to_hhmm(), "0 hs : 0 min");
}

#[test]
fn test_negative_durations_clamp_to_zero() {
    assert_eq!((-5.0_f64).to_hhmmss_string(), "00:00:00");
    assert_eq!((-5.0_f64).to_smart_hhmmss_string(), "0");
    assert_eq!((-90.5_f64).to_full_text(), "0:0:0:0");
    assert_eq!((-3600.0_f64).to_hhmm(), "0 hs : 0 min");
}

#[test]
fn test_instant_from_secs() {
    let instant = instant_from_secs(1.5);
    assert_eq!(instant.timestamp(), 1);
    assert_eq!(instant.timestamp_subsec_millis(), 500);
    assert_eq!(secs_from_instant(&instant), 1.5);
}

#[test]
fn test_instant_from_invalid_secs_is_epoch() {
    assert_eq!(instant_from_secs(f64::NAN).timestamp(), 0);
    assert_eq!(instant_from_secs(f64::INFINITY).timestamp(), 0);
    assert_eq!(instant_from_secs(1e30).timestamp(), 0);
}

#[test]
fn test_time_clock_formats() {
    let secs = 3725.0_f64;
    assert_eq!(secs.time_clock(&Utc), "01:02");
    assert_eq!(secs.time_clock_full(&Utc), "01:02:05");
    assert_eq!(secs.to_time_stamp(&Utc), "01:02:05");
    assert_eq!(secs.secs_only(&Utc), "05");
}

#[test]
fn test_time_clock_respects_time_zone() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(3725.0_f64.time_clock(&tz), "03:02");
}

#[test]
fn test_history_view_format() {
    assert_eq!(0.0_f64.to_history_view_format(&Utc, Locale::en_US), "1, January 1970");
}
