use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Formats a backend timestamp (ISO-8601, with or without offset) as a calendar date.
/// Falls back to "N/A" for missing or unparseable values.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Header clock text, e.g. "October 16, 2026, 09:41:07 AM"
pub fn format_clock(now: DateTime<Local>) -> String {
    now.format("%B %-d, %Y, %I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_backend_isoformat_without_offset() {
        assert_eq!(format_date(Some("2024-03-05T14:22:01.123456")), "Mar 5, 2024");
    }

    #[test]
    fn formats_rfc3339_and_plain_dates() {
        assert_eq!(format_date(Some("2023-12-31T23:00:00+00:00")), "Dec 31, 2023");
        assert_eq!(format_date(Some("2022-01-09")), "Jan 9, 2022");
    }

    #[test]
    fn missing_or_garbage_is_not_available() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("yesterday")), "N/A");
    }

    #[test]
    fn clock_uses_twelve_hour_time() {
        let now = Local.with_ymd_and_hms(2026, 10, 16, 21, 5, 9).unwrap();
        assert_eq!(format_clock(now), "October 16, 2026, 09:05:09 PM");
    }
}
