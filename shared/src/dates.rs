//! Date parsing and formatting for birthdays.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date sent by the API or entered in the form.
///
/// Accepts RFC 3339 timestamps (the UTC calendar date is used), naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps and plain `YYYY-MM-DD` dates.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.naive_utc().date());
    }

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// "dd.mm.yyyy"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Midnight UTC timestamp with millisecond precision, e.g. "2000-05-01T00:00:00.000Z"
pub fn to_utc_timestamp(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2000-05-01"), Some(date(2000, 5, 1)));
        assert_eq!(parse_date(" 2000-05-01 "), Some(date(2000, 5, 1)));
        assert_eq!(parse_date("2000-05-01T00:00:00.000Z"), Some(date(2000, 5, 1)));
        assert_eq!(parse_date("2000-05-01T23:30:00+03:00"), Some(date(2000, 5, 1)));
        assert_eq!(parse_date("2000-05-01T10:15:00"), Some(date(2000, 5, 1)));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("01.05.2000"), None);
        assert_eq!(parse_date("2000-13-01"), None);
        assert_eq!(parse_date("2001-02-29"), None);
    }

    #[test]
    fn test_format_display_date_pads() {
        assert_eq!(format_display_date(date(2000, 5, 1)), "01.05.2000");
        assert_eq!(format_display_date(date(1999, 12, 31)), "31.12.1999");
    }

    #[test]
    fn test_to_utc_timestamp() {
        assert_eq!(to_utc_timestamp(date(2000, 5, 1)), "2000-05-01T00:00:00.000Z");
    }
}
