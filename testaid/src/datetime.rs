//! Date/time precision and tolerance helpers.
//!
//! Truncation makes timestamps from sources with different precision compare
//! equal; tolerance comparison covers clocks that drift by a known window.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// The earliest timestamp the helpers default to: `0001-01-01T00:00:00`
pub fn min_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Nanoseconds since the Unix epoch.
pub(crate) fn to_ticks(value: NaiveDateTime) -> i128 {
    let utc = value.and_utc();
    i128::from(utc.timestamp()) * NANOS_PER_SECOND + i128::from(utc.timestamp_subsec_nanos())
}

/// Ticks for an exclusive upper bound.
///
/// A leap-second value maps to the start of the following second, so every
/// tick below the result converts back to a timestamp before `value`.
pub(crate) fn to_ticks_exclusive(value: NaiveDateTime) -> i128 {
    let leap_nanos = value.nanosecond().saturating_sub(NANOS_PER_SECOND as u32);
    to_ticks(value) - i128::from(leap_nanos)
}

pub(crate) fn from_ticks(ticks: i128) -> Option<NaiveDateTime> {
    let seconds = i64::try_from(ticks.div_euclid(NANOS_PER_SECOND)).ok()?;
    let nanos = u32::try_from(ticks.rem_euclid(NANOS_PER_SECOND)).ok()?;
    DateTime::from_timestamp(seconds, nanos).map(|utc| utc.naive_utc())
}

/// Granularity to truncate a timestamp to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Whole minutes
    Minute,
    /// Whole seconds
    Second,
    /// Tenths of a second (100 ms)
    Decisecond,
    /// Hundredths of a second (10 ms)
    Centisecond,
}

/// Zero every component of `value` finer than `precision`
pub fn truncate(value: NaiveDateTime, precision: Precision) -> NaiveDateTime {
    let truncated = match precision {
        Precision::Minute => value.with_second(0).and_then(|v| v.with_nanosecond(0)),
        Precision::Second => value.with_nanosecond(0),
        Precision::Decisecond => value.with_nanosecond(value.nanosecond() / 100_000_000 * 100_000_000),
        Precision::Centisecond => value.with_nanosecond(value.nanosecond() / 10_000_000 * 10_000_000),
    };
    // Truncated nanoseconds are always valid for the same second
    truncated.unwrap_or(value)
}

/// [`truncate`] over an optional timestamp; `None` stays `None`
pub fn truncate_opt(value: Option<NaiveDateTime>, precision: Precision) -> Option<NaiveDateTime> {
    value.map(|v| truncate(v, precision))
}

/// Drop seconds and everything below
pub fn to_minute_precision(value: NaiveDateTime) -> NaiveDateTime {
    truncate(value, Precision::Minute)
}

/// Drop fractional seconds
pub fn to_second_precision(value: NaiveDateTime) -> NaiveDateTime {
    truncate(value, Precision::Second)
}

/// Keep tenths of a second
pub fn to_decisecond_precision(value: NaiveDateTime) -> NaiveDateTime {
    truncate(value, Precision::Decisecond)
}

/// Keep hundredths of a second
pub fn to_centisecond_precision(value: NaiveDateTime) -> NaiveDateTime {
    truncate(value, Precision::Centisecond)
}

/// Whether `a` and `b` are at most `tolerance` apart, in either order
pub fn equal_within_tolerance(a: NaiveDateTime, b: NaiveDateTime, tolerance: TimeDelta) -> bool {
    (a - b).abs() <= tolerance
}

/// Render `value` as a PL/SQL `TO_DATE` expression for text-built statements
pub fn to_oracle_date(value: NaiveDateTime) -> String {
    format!(
        "TO_DATE('{}','MM/DD/YYYY HH24:MI:SS')",
        value.format("%m/%d/%Y %H:%M:%S")
    )
}

/// [`to_oracle_date`] for an optional value; `None` renders as `null`
pub fn to_oracle_date_opt(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(value) => to_oracle_date(value),
        None => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn timestamp(h: u32, m: u32, s: u32, nanos: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .and_then(|d| d.and_hms_nano_opt(h, m, s, nanos))
            .unwrap()
    }

    #[test_case(Precision::Minute, timestamp(13, 45, 0, 0); "minute")]
    #[test_case(Precision::Second, timestamp(13, 45, 27, 0); "second")]
    #[test_case(Precision::Decisecond, timestamp(13, 45, 27, 900_000_000); "decisecond")]
    #[test_case(Precision::Centisecond, timestamp(13, 45, 27, 980_000_000); "centisecond")]
    fn test_truncate(precision: Precision, expected: NaiveDateTime) {
        let value = timestamp(13, 45, 27, 987_654_321);
        let truncated = truncate(value, precision);
        assert_eq!(truncated, expected);
        assert_eq!(truncate(truncated, precision), truncated);
    }

    #[test]
    fn test_minute_precision_is_idempotent() {
        let value = timestamp(23, 59, 59, 999_999_999);
        let once = to_minute_precision(value);
        assert_eq!(once, timestamp(23, 59, 0, 0));
        assert_eq!(to_minute_precision(once), once);
        assert_eq!(once.date(), value.date());
    }

    #[test]
    fn test_named_precisions_match_truncate() {
        let value = timestamp(1, 2, 3, 456_789_000);
        assert_eq!(to_second_precision(value), timestamp(1, 2, 3, 0));
        assert_eq!(to_decisecond_precision(value), timestamp(1, 2, 3, 400_000_000));
        assert_eq!(to_centisecond_precision(value), timestamp(1, 2, 3, 450_000_000));
    }

    #[test]
    fn test_truncate_opt_propagates_none() {
        assert_eq!(truncate_opt(None, Precision::Second), None);
        assert_eq!(
            truncate_opt(Some(timestamp(1, 2, 3, 4)), Precision::Second),
            Some(timestamp(1, 2, 3, 0))
        );
    }

    #[test]
    fn test_equal_within_tolerance() {
        let t = timestamp(8, 0, 0, 0);
        let window = TimeDelta::seconds(60);

        assert!(equal_within_tolerance(t, t + TimeDelta::seconds(59), window));
        assert!(equal_within_tolerance(t, t + TimeDelta::seconds(60), window));
        assert!(!equal_within_tolerance(t, t + TimeDelta::seconds(61), window));

        // Symmetric
        assert!(equal_within_tolerance(t + TimeDelta::seconds(59), t, window));
        assert!(!equal_within_tolerance(t - TimeDelta::seconds(61), t, window));
    }

    #[test]
    fn test_to_oracle_date() {
        let value = timestamp(14, 5, 9, 123);
        assert_eq!(
            to_oracle_date(value),
            "TO_DATE('02/29/2024 14:05:09','MM/DD/YYYY HH24:MI:SS')"
        );
        assert_eq!(to_oracle_date_opt(None), "null");
        assert_eq!(to_oracle_date_opt(Some(value)), to_oracle_date(value));
    }

    #[test]
    fn test_ticks_round_trip() {
        let values = [
            min_datetime(),
            timestamp(0, 0, 0, 1),
            timestamp(12, 30, 15, 999_999_999),
            NaiveDate::from_ymd_opt(1969, 12, 31)
                .and_then(|d| d.and_hms_nano_opt(23, 59, 59, 5))
                .unwrap(),
        ];
        for value in values {
            assert_eq!(from_ticks(to_ticks(value)), Some(value));
        }
        assert!(to_ticks(min_datetime()) < 0);
    }

    #[test]
    fn test_exclusive_ticks_stop_at_leap_second() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .and_then(|d| d.and_hms_nano_opt(23, 59, 59, 1_500_000_000))
            .unwrap();
        let next_second = NaiveDate::from_ymd_opt(2017, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();

        assert_eq!(to_ticks(leap), to_ticks(next_second) + 500_000_000);
        assert_eq!(to_ticks_exclusive(leap), to_ticks(next_second));
        assert!(from_ticks(to_ticks_exclusive(leap) - 1).unwrap() < leap);

        let plain = timestamp(10, 0, 0, 42);
        assert_eq!(to_ticks_exclusive(plain), to_ticks(plain));
    }

    #[test]
    fn test_min_datetime() {
        assert_eq!(min_datetime().to_string(), "0001-01-01 00:00:00");
    }
}
