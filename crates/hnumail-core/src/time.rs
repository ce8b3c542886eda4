//! Timestamp parsing and display.
//!
//! The backend sends zone-less ISO-8601 timestamps; they are read as local
//! time. RFC 3339 timestamps with an offset are accepted as well.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a backend timestamp.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// Relative age of a timestamp, measured against the current time.
#[must_use]
pub fn relative_time(raw: &str) -> String {
    format_relative(raw, Local::now())
}

/// Relative age of a timestamp, measured against `now`.
///
/// Less than a minute (or in the future) reads "just now", less than an hour
/// in minutes, less than a day in hours, anything older as a date.
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_relative(raw: &str, now: DateTime<Local>) -> String {
    let Some(at) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let age = now.signed_duration_since(at);
    let hours = age.num_hours();
    let minutes = age.num_minutes();

    if hours >= 24 {
        at.format("%Y-%m-%d").to_string()
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        "just now".to_string()
    }
}

/// Full local date and time, or the raw input when unparseable.
#[must_use]
pub fn format_absolute(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_string(),
        |at| at.format("%Y-%m-%d %H:%M").to_string(),
    )
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn now() -> DateTime<Local> {
        parse_timestamp("2025-12-15T12:00:00").unwrap()
    }

    #[test]
    fn test_parse_variants() {
        assert!(parse_timestamp("2025-12-15T11:08:47").is_some());
        assert!(parse_timestamp("2025-12-15T11:08:47.123456").is_some());
        assert!(parse_timestamp("2025-12-15 11:08:47").is_some());
        assert!(parse_timestamp("2025-12-15T11:08").is_some());
        assert!(parse_timestamp("2025-12-15T11:08:47Z").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_relative_ranges() {
        assert_eq!(format_relative("2025-12-15T11:59:30", now()), "just now");
        assert_eq!(format_relative("2025-12-15T11:59:00", now()), "1 minute ago");
        assert_eq!(format_relative("2025-12-15T11:15:00", now()), "45 minutes ago");
        assert_eq!(format_relative("2025-12-15T10:30:00", now()), "1 hour ago");
        assert_eq!(format_relative("2025-12-15T01:00:00", now()), "11 hours ago");
        assert_eq!(format_relative("2025-12-10T09:00:00", now()), "2025-12-10");
    }

    #[test]
    fn test_future_is_just_now() {
        assert_eq!(format_relative("2025-12-15T12:30:00", now()), "just now");
    }

    #[test]
    fn test_unparseable_returned_as_is() {
        assert_eq!(format_relative("n/a", now()), "n/a");
        assert_eq!(format_absolute("n/a"), "n/a");
    }

    #[test]
    fn test_absolute() {
        assert_eq!(format_absolute("2025-12-15T11:08:47"), "2025-12-15 11:08");
    }
}
