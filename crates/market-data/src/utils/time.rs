//! Date and Unix timestamp conversions.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;

/// Whole-second Unix timestamp of midnight UTC on `date`.
pub fn date_to_unix(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::default()).and_utc().timestamp()
}

/// Instant for a Unix timestamp in seconds, `None` when out of range.
pub fn unix_to_datetime(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

/// Drop the time-of-day, keeping midnight UTC of the same calendar date.
pub fn normalize_to_midnight(time: DateTime<Utc>) -> DateTime<Utc> {
    time.date_naive().and_time(NaiveTime::default()).and_utc()
}

/// Read a Unix-seconds cell that may be sent as a number or a numeric string.
pub fn coerce_timestamp(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use serde_json::json;

    #[test]
    fn test_date_to_unix_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
        assert_eq!(date_to_unix(date), 1356998400);

        let date = NaiveDate::from_ymd_opt(2025, 2, 12).unwrap();
        assert_eq!(date_to_unix(date), 1739318400);
    }

    #[test]
    fn test_normalize_drops_time_of_day() {
        // 2025-02-11 14:30:00 UTC
        let time = unix_to_datetime(1739284200).unwrap();
        assert_eq!(time.hour(), 14);

        let normalized = normalize_to_midnight(time);
        assert_eq!(normalized, Utc.with_ymd_and_hms(2025, 2, 11, 0, 0, 0).unwrap());
        assert_eq!(date_to_unix(normalized.date_naive()), normalized.timestamp());
    }

    #[test]
    fn test_unix_round_trip_preserves_instant() {
        let time = unix_to_datetime(1739491200).unwrap();
        assert_eq!(time.timestamp(), 1739491200);
        assert!(unix_to_datetime(i64::MAX).is_none());
    }

    #[test]
    fn test_coerce_timestamp() {
        assert_eq!(coerce_timestamp(&json!(100)), Some(100));
        assert_eq!(coerce_timestamp(&json!("1739491200")), Some(1739491200));
        assert_eq!(coerce_timestamp(&json!(200.0)), Some(200));
        assert_eq!(coerce_timestamp(&json!(200.5)), None);
        assert_eq!(coerce_timestamp(&json!("abc")), None);
        assert_eq!(coerce_timestamp(&json!(null)), None);
    }
}
