//! SkyPortal timestamp handling.
//!
//! The API emits and expects naive ISO-8601 timestamps in UTC, without an
//! offset suffix. Query parameters carry microsecond precision.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Format used in query parameters, e.g. `2025-05-15T12:00:00.123456`.
const QUERY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Naive ISO-8601 with optional fractional seconds, as found in payloads.
const PAYLOAD_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Render a timestamp the way SkyPortal query parameters expect it.
pub fn format_query_time(t: DateTime<Utc>) -> String {
    t.format(QUERY_FORMAT).to_string()
}

/// Parse a timestamp from an API payload or CLI argument.
///
/// Accepts RFC 3339 (with offset) and naive ISO-8601 (assumed UTC).
pub fn parse_api_time(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, PAYLOAD_FORMAT)
        .ok()
        .map(|t| t.and_utc())
}

/// Serde adapter for optional timestamp fields in API payloads.
/// Unparseable strings become `None` rather than failing the whole record.
pub fn deserialize_opt_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_api_time))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn query_time_has_no_offset_suffix() {
        let t = Utc.with_ymd_and_hms(2025, 5, 15, 12, 0, 0).unwrap();
        let s = format_query_time(t);
        assert_eq!(s, "2025-05-15T12:00:00.000000");
        assert!(!s.contains('+'));
        assert!(!s.ends_with('Z'));
    }

    #[test]
    fn query_time_keeps_microseconds() {
        let t = Utc
            .with_ymd_and_hms(2025, 5, 15, 12, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::microseconds(123_456))
            .unwrap();
        assert_eq!(format_query_time(t), "2025-05-15T12:00:00.123456");
    }

    #[test]
    fn parses_rfc3339_with_zulu() {
        let t = parse_api_time("2025-05-15T00:00:00Z").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 5, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_naive_iso_as_utc() {
        let t = parse_api_time("2025-05-15T00:00:00").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 5, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_naive_iso_with_fraction() {
        let t = parse_api_time("2025-05-15T00:00:00.500000").unwrap();
        let expected = Utc
            .with_ymd_and_hms(2025, 5, 15, 0, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(500))
            .unwrap();
        assert_eq!(t, expected);
    }

    #[test]
    fn round_trips_through_query_format() {
        let t = parse_api_time("2025-05-15T06:30:15.250000").unwrap();
        assert_eq!(format_query_time(t), "2025-05-15T06:30:15.250000");
    }

    #[test]
    fn garbage_returns_none() {
        assert!(parse_api_time("not a time").is_none());
        assert!(parse_api_time("").is_none());
    }
}
