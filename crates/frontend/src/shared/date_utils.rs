//! Date formatting for backend timestamps
//!
//! The API sends either RFC 3339 (`2024-03-15T14:02:26.000000Z`) or the
//! plain `2024-03-15 14:02:26` form; both are shown in the same style.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Example: "2024-03-15T14:02:26.123Z" -> "15 Mar 2024"
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Example: "2024-03-15T14:02:26.123Z" -> "15 Mar 2024, 14:02"
pub fn format_datetime(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Formats an optional timestamp, `"N/A"` when absent.
pub fn format_date_opt(raw: &Option<String>) -> String {
    raw.as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(format_date)
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.000000Z"),
            "15 Mar 2024, 14:02"
        );
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "31 Dec 2024, 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
        assert_eq!(format_date_opt(&None), "N/A");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
