//! Publish date formatting for article rows.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Weekday names are optional in RFC 2822 and often wrong or spelled out.
    static ref RE_WEEKDAY: Regex = Regex::new(r"^[A-Za-z]+,\s*").unwrap();
    static ref RE_UTC_ZONE: Regex = Regex::new(r"(?i)\s+(?:UTC|Z)$").unwrap();
}

/// Rendered in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%b %-d";

/// Offset-carrying ISO 8601 forms not covered by RFC 3339 (e.g. `+0000`).
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Offset-less forms, read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Format a raw feed timestamp as e.g. `"Jan 1"`.
///
/// Accepts RFC 2822 (RSS, with any or no weekday and `UTC`/`GMT` zones),
/// RFC 3339 (Atom), ISO 8601 with or without an offset and bare
/// `YYYY-MM-DD` dates. The day shown is the UTC calendar day. Anything else
/// yields [`INVALID_DATE`].
pub fn format_date(raw: &str) -> String {
    match parse_utc_date(raw.trim()) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::debug!(raw, "unparseable publish date");
            INVALID_DATE.to_string()
        }
    }
}

fn parse_utc_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(&normalize_rfc2822(raw)) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc).date_naive());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Drop the weekday and spell UTC zone names as `+0000`.
fn normalize_rfc2822(raw: &str) -> Cow<'_, str> {
    let without_weekday = RE_WEEKDAY.replace(raw, "");
    if RE_UTC_ZONE.is_match(&without_weekday) {
        Cow::Owned(RE_UTC_ZONE.replace(&without_weekday, " +0000").into_owned())
    } else {
        without_weekday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rss_dates() {
        assert_eq!(format_date("Mon, 01 Jan 2024 12:00:00 GMT"), "Jan 1");
        assert_eq!(format_date("Sun, 31 Dec 2023 12:00:00 GMT"), "Dec 31");
        assert_eq!(format_date("Tue, 14 May 2024 08:30:00 +0200"), "May 14");
        assert_eq!(format_date("01 Jan 2024 12:00:00 GMT"), "Jan 1");
    }

    #[test]
    fn test_rss_utc_zone_name() {
        assert_eq!(format_date("Mon, 01 Jan 2024 12:00:00 UTC"), "Jan 1");
        assert_eq!(format_date("Mon, 01 Jan 2024 12:00:00 utc"), "Jan 1");
        assert_eq!(format_date("Mon, 01 Jan 2024 12:00:00 Z"), "Jan 1");
    }

    #[test]
    fn test_rss_weekday_is_ignored() {
        assert_eq!(format_date("Tue, 01 Jan 2024 12:00:00 GMT"), "Jan 1");
        assert_eq!(format_date("Monday, 01 Jan 2024 12:00:00 GMT"), "Jan 1");
    }

    #[test]
    fn test_atom_dates() {
        assert_eq!(format_date("2024-01-01T12:00:00Z"), "Jan 1");
        assert_eq!(format_date("2024-03-09T12:59:59.123-05:00"), "Mar 9");
        assert_eq!(format_date("2024-07-04T10:00:00"), "Jul 4");
        assert_eq!(format_date("2024-07-04 10:00:00"), "Jul 4");
        assert_eq!(format_date("2024-11-20"), "Nov 20");
    }

    #[test]
    fn test_offset_without_colon() {
        assert_eq!(format_date("2024-01-01T12:00:00+0000"), "Jan 1");
        assert_eq!(format_date("2024-01-01T12:00:00.5+0530"), "Jan 1");
    }

    #[test]
    fn test_day_is_taken_in_utc() {
        assert_eq!(format_date("2024-01-01T23:30:00-05:00"), "Jan 2");
        assert_eq!(format_date("2024-01-02T01:00:00+0200"), "Jan 1");
        assert_eq!(format_date("Mon, 01 Jan 2024 22:00:00 -0300"), "Jan 2");
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(format_date("invalid-date"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("2024-13-45"), INVALID_DATE);
        assert_eq!(format_date("Someday, whenever"), INVALID_DATE);
    }
}
