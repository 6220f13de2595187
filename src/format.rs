//! Formatting Utilities
//!
//! Pure helpers for display strings: placeholder substitution, zero padding
//! and the fixed date/time formats used across the dashboard. Every function
//! is total over its input; absent or unparseable values render as the
//! placeholder rather than failing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Shown wherever a value may be absent.
pub const PLACEHOLDER: &str = "- - -";

/// Abbreviated month names, indexed by zero-based month.
pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// True if the string has no visible content.
pub fn is_empty_str(s: &str) -> bool {
    s.trim().is_empty()
}

/// The string itself, or the placeholder when empty.
pub fn or_placeholder(s: &str) -> String {
    if is_empty_str(s) {
        PLACEHOLDER.to_string()
    } else {
        s.to_string()
    }
}

/// Display form of an optional value, placeholder when absent.
pub fn opt_or_placeholder<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Zero-pad a day/month/hour/minute component to two digits.
pub fn two_digit(n: u32) -> String {
    format!("{:02}", n)
}

/// "07-Mar-2018" from epoch milliseconds.
pub fn date_dd_mmm_yyyy(epoch_millis: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_millis) {
        Some(dt) => format!(
            "{}-{}-{}",
            two_digit(dt.day()),
            MONTH_ABBREV[dt.month0() as usize],
            dt.year()
        ),
        None => PLACEHOLDER.to_string(),
    }
}

/// "07/03/2018" from epoch milliseconds.
pub fn date_dd_mm_yyyy(epoch_millis: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_millis) {
        Some(dt) => format!(
            "{}/{}/{}",
            two_digit(dt.day()),
            two_digit(dt.month()),
            dt.year()
        ),
        None => PLACEHOLDER.to_string(),
    }
}

/// "07/03/2018 14:05" from epoch milliseconds. Shared by chart axis labels
/// and the recent-measurement widgets.
pub fn date_time_dd_mm_yyyy_hh_mm(epoch_millis: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_millis) {
        Some(dt) => format!(
            "{}/{}/{} {}:{}",
            two_digit(dt.day()),
            two_digit(dt.month()),
            dt.year(),
            two_digit(dt.hour()),
            two_digit(dt.minute())
        ),
        None => PLACEHOLDER.to_string(),
    }
}

/// "07-Mar-2018 at 14:05" from a date string.
///
/// Accepts RFC 3339, RFC 2822 and plain `YYYY-MM-DD HH:MM:SS` inputs, with a
/// manual token parse as a fallback for strings carrying an explicit timezone
/// abbreviation, e.g. "Tue Jun 12 10:30:00 BST 2018".
pub fn date_string_dd_mmm_yyyy_at_hh_mm(input: &str) -> String {
    if is_empty_str(input) {
        return PLACEHOLDER.to_string();
    }
    match parse_date_string(input) {
        Some(dt) => format!(
            "{}-{}-{} at {}:{}",
            two_digit(dt.day()),
            MONTH_ABBREV[dt.month0() as usize],
            dt.year(),
            two_digit(dt.hour()),
            two_digit(dt.minute())
        ),
        None => parse_tz_abbrev_tokens(input).unwrap_or_else(|| PLACEHOLDER.to_string()),
    }
}

fn parse_date_string(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt);
        }
    }
    None
}

/// Fallback for "Tue Jun 12 10:30:00 BST 2018" style inputs, where the
/// timezone abbreviation defeats the standard parsers. Tokens are
/// [weekday, month, day, HH:MM:SS, tz, year]; the clock reading is kept as
/// written rather than converted.
fn parse_tz_abbrev_tokens(input: &str) -> Option<String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 6 {
        return None;
    }
    let (month, day, time, year) = (tokens[1], tokens[2], tokens[3], tokens[5]);
    if !MONTH_ABBREV.contains(&month) {
        return None;
    }
    let day: u32 = day.parse().ok()?;
    let mut clock = time.split(':');
    let hours: u32 = clock.next()?.parse().ok()?;
    let minutes: u32 = clock.next()?.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    Some(format!(
        "{}-{}-{} at {}:{}",
        two_digit(day),
        month,
        year,
        two_digit(hours),
        two_digit(minutes)
    ))
}

/// Inverse of [`date_dd_mmm_yyyy`]: recover the calendar date from its
/// displayed form.
pub fn parse_dd_mmm_yyyy(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split('-');
    let day: u32 = parts.next()?.parse().ok()?;
    let month = parts.next()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month0 = MONTH_ABBREV.iter().position(|m| *m == month)?;
    NaiveDate::from_ymd_opt(year, month0 as u32 + 1, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_for_empty_input() {
        assert_eq!(or_placeholder(""), PLACEHOLDER);
        assert_eq!(or_placeholder("   "), PLACEHOLDER);
        assert_eq!(or_placeholder("72"), "72");
        assert_eq!(opt_or_placeholder(&None::<f64>), PLACEHOLDER);
        assert_eq!(opt_or_placeholder(&Some(36.5)), "36.5");
        assert_eq!(date_string_dd_mmm_yyyy_at_hh_mm(""), PLACEHOLDER);
        assert_eq!(date_string_dd_mmm_yyyy_at_hh_mm("garbage"), PLACEHOLDER);
    }

    #[test]
    fn test_two_digit_padding() {
        assert_eq!(two_digit(0), "00");
        assert_eq!(two_digit(7), "07");
        assert_eq!(two_digit(12), "12");
    }

    #[test]
    fn test_timestamp_formats() {
        // 2018-03-07 14:05:00 UTC
        let ts = 1520431500000;
        assert_eq!(date_dd_mmm_yyyy(ts), "07-Mar-2018");
        assert_eq!(date_dd_mm_yyyy(ts), "07/03/2018");
        assert_eq!(date_time_dd_mm_yyyy_hh_mm(ts), "07/03/2018 14:05");
    }

    #[test]
    fn test_date_string_formats() {
        assert_eq!(
            date_string_dd_mmm_yyyy_at_hh_mm("2018-06-12T10:30:00Z"),
            "12-Jun-2018 at 10:30"
        );
        assert_eq!(
            date_string_dd_mmm_yyyy_at_hh_mm("2018-06-12 10:30:00"),
            "12-Jun-2018 at 10:30"
        );
    }

    #[test]
    fn test_tz_abbrev_fallback() {
        assert_eq!(
            date_string_dd_mmm_yyyy_at_hh_mm("Tue Jun 12 10:30:00 BST 2018"),
            "12-Jun-2018 at 10:30"
        );
    }

    #[test]
    fn test_display_date_round_trip() {
        let ts = 1520431500000; // 2018-03-07
        let displayed = date_dd_mmm_yyyy(ts);
        let recovered = parse_dd_mmm_yyyy(&displayed).unwrap();
        assert_eq!(recovered, NaiveDate::from_ymd_opt(2018, 3, 7).unwrap());
    }

    #[test]
    fn test_parse_dd_mmm_yyyy_rejects_bad_input() {
        assert!(parse_dd_mmm_yyyy("- - -").is_none());
        assert!(parse_dd_mmm_yyyy("07-Mars-2018").is_none());
        assert!(parse_dd_mmm_yyyy("32-Jan-2018").is_none());
    }
}
