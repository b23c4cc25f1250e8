//! Time utilities: parsing user input into UTC instants and formatting them
//! for storage and display.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Storage format. Fixed width down to the nanosecond and always UTC, so
/// text order is time order.
pub const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9fZ";

const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM` (seconds optional, both
/// read as UTC) or a full RFC 3339 timestamp with offset.
pub fn parse_datetime(input: &str) -> AppResult<DateTime<Utc>> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::InvalidDateTime(input.to_string()))
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    input.map(|s| parse_datetime(s)).transpose()
}

pub fn to_storage(dt: &DateTime<Utc>) -> String {
    dt.format(STORAGE_FORMAT).to_string()
}

/// Also reads rows written before sub-second precision was stored.
pub fn from_storage(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidDateTime(s.to_string()))
}

pub fn display_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_plain_and_rfc3339_inputs() {
        let expected = Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap();
        assert_eq!(parse_datetime("2025-06-01 10:30").unwrap(), expected);
        assert_eq!(parse_datetime("2025-06-01T10:30").unwrap(), expected);
        assert_eq!(parse_datetime("2025-06-01T12:30:00+02:00").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_datetime("tomorrow-ish"),
            Err(AppError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn storage_format_sorts_chronologically() {
        let a = Utc.with_ymd_and_hms(2025, 1, 9, 23, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2025, 1, 10, 1, 0, 0).unwrap();
        assert!(to_storage(&a) < to_storage(&b));
        assert_eq!(from_storage(&to_storage(&b)).unwrap(), b);
    }

    #[test]
    fn storage_keeps_fractional_seconds() {
        let whole = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        let half = whole + chrono::Duration::milliseconds(500);

        assert_eq!(to_storage(&whole), "2025-06-01T10:00:00.000000000Z");
        assert_eq!(to_storage(&half), "2025-06-01T10:00:00.500000000Z");
        assert!(to_storage(&whole) < to_storage(&half));
        assert_eq!(from_storage(&to_storage(&half)).unwrap(), half);
        assert_eq!(parse_datetime("2025-06-01T10:00:00.500Z").unwrap(), half);
    }

    #[test]
    fn reads_legacy_whole_second_rows() {
        let expected = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(from_storage("2025-06-01T10:00:00Z").unwrap(), expected);
    }
}
