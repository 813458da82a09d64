/// Utilities for date parsing
///
/// Filter inputs and backend payloads use a handful of date spellings;
/// everything is reduced to a calendar date.
use chrono::{DateTime, NaiveDate};

/// Parse "YYYY-MM-DD", "DD.MM.YYYY" or an RFC 3339 timestamp to a date.
/// Example: "2024-03-15T14:02:26.123Z" -> 2024-03-15
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d.%m.%Y"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}
