//! ISO-8601 timestamp parsing for click events.

use crate::domain::SkipReason;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
    "%Y%m%dT%H%M%S%z",
];
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
];

/// Parses a click timestamp, keeping the offset it was written with.
///
/// A trailing `Z` is first rewritten to `+00:00`. The result is then read as
/// RFC 3339, then against the extended ISO-8601 forms (offset without a colon,
/// minute precision) and the basic form `20210315T103000`. Timestamps with no
/// offset at all, including bare dates, are read as UTC.
///
/// # Errors
///
/// Returns [`SkipReason::InvalidTimestamp`] if no format matches.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, SkipReason> {
    let normalized = normalize_zulu(raw.trim());

    if let Ok(ts) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(ts);
    }

    for format in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(&normalized, format) {
            return Ok(ts);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| SkipReason::InvalidTimestamp(raw.to_string()))
}

/// Replaces a trailing UTC designator with an explicit `+00:00` offset.
fn normalize_zulu(raw: &str) -> String {
    match raw.strip_suffix(['Z', 'z']) {
        Some(stripped) => format!("{stripped}+00:00"),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_normalize_zulu() {
        assert_eq!(normalize_zulu("2021-01-01T00:00:00Z"), "2021-01-01T00:00:00+00:00");
        assert_eq!(normalize_zulu("2021-01-01T00:00:00z"), "2021-01-01T00:00:00+00:00");
        assert_eq!(normalize_zulu("2021-01-01T00:00:00+02:00"), "2021-01-01T00:00:00+02:00");
    }

    #[test]
    fn test_parse_explicit_offset() {
        let ts = parse_timestamp("2021-03-15T10:30:00+05:30").unwrap();

        assert_eq!(ts.year(), 2021);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn test_parse_zulu() {
        let ts = parse_timestamp("2021-02-15T00:00:00Z").unwrap();

        assert_eq!(ts.year(), 2021);
        assert_eq!(ts.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let ts = parse_timestamp("2020-02-15T00:00:00.123456+00:00").unwrap();

        assert_eq!(ts.year(), 2020);
        assert_eq!(ts.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let ts = parse_timestamp("2021-07-04T12:00:00").unwrap();

        assert_eq!(ts.year(), 2021);
        assert_eq!(ts.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_space_separator_with_offset() {
        let ts = parse_timestamp("2021-07-04 12:00:00+00:00").unwrap();

        assert_eq!(ts.month(), 7);
    }

    #[test]
    fn test_parse_minute_precision_zulu() {
        let ts = parse_timestamp("2021-03-15T10:30Z").unwrap();

        assert_eq!(ts.year(), 2021);
        assert_eq!(ts.minute(), 30);
        assert_eq!(ts.second(), 0);
        assert_eq!(ts.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_minute_precision_with_offset() {
        let ts = parse_timestamp("2021-03-15T10:30+02:00").unwrap();

        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.offset().local_minus_utc(), 2 * 3600);

        let spaced = parse_timestamp("2021-03-15 10:30+00:00").unwrap();
        assert_eq!(spaced.minute(), 30);
    }

    #[test]
    fn test_parse_minute_precision_naive() {
        let ts = parse_timestamp("2021-03-15T10:30").unwrap();
        assert_eq!(ts.minute(), 30);
        assert_eq!(ts.offset().local_minus_utc(), 0);

        let spaced = parse_timestamp("2021-03-15 10:30").unwrap();
        assert_eq!(spaced.hour(), 10);
    }

    #[test]
    fn test_parse_basic_format() {
        let ts = parse_timestamp("20210315T103000Z").unwrap();
        assert_eq!(ts.year(), 2021);
        assert_eq!(ts.month(), 3);
        assert_eq!(ts.day(), 15);
        assert_eq!(ts.minute(), 30);

        let naive = parse_timestamp("20201231T235959").unwrap();
        assert_eq!(naive.year(), 2020);
    }

    #[test]
    fn test_parse_bare_date() {
        let ts = parse_timestamp("2021-07-04").unwrap();

        assert_eq!(ts.day(), 4);
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn test_parse_invalid() {
        let result = parse_timestamp("invalid-timestamp");
        assert_eq!(
            result,
            Err(SkipReason::InvalidTimestamp("invalid-timestamp".to_string()))
        );
    }

    #[test]
    fn test_parse_out_of_range_month() {
        assert!(parse_timestamp("2021-13-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_timestamp("").is_err());
    }
}
