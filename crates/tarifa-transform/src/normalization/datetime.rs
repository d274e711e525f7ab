//! Date cleaning to ISO 8601.
//!
//! Vendor files carry dates in a handful of European and ISO layouts.
//! Unparseable input falls back to the current instant, a lossy behavior
//! inherited from the vendor feeds, so the result carries a `defaulted`
//! flag that lets chronological reports exclude substituted dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use tarifa_model::RawValue;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%d.%m.%Y",
];

/// Result of cleaning a date cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedDate {
    /// ISO-8601 rendering, `YYYY-MM-DDTHH:MM:SS`.
    pub iso: String,
    /// True when the source cell was unparseable and the current instant
    /// was substituted.
    pub defaulted: bool,
}

/// Cleans a cell to an ISO-8601 timestamp.
pub fn clean_date(raw: &RawValue) -> CleanedDate {
    if let RawValue::Text(text) = raw
        && let Some(parsed) = parse_datetime(text.trim())
    {
        return CleanedDate {
            iso: parsed.format("%Y-%m-%dT%H:%M:%S").to_string(),
            defaulted: false,
        };
    }
    CleanedDate {
        iso: Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        defaulted: true,
    }
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    if text.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}
