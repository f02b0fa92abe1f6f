//! Best-effort date/time parsing for heterogeneous inputs.
//!
//! Handles the formats that show up in hand-maintained CSV exports: ISO
//! 8601, slashed US/European dates, dotted German dates, and spelled-out
//! month names, with and without a time component.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Try to parse a string as a date/time value.
///
/// Date-only inputs map to midnight. Returns `None` rather than erroring;
/// the caller decides what an unparsable value means.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(dt) = try_parse_datetime(trimmed) {
        return Some(dt);
    }
    try_parse_date(trimmed).map(|d| d.and_time(NaiveTime::MIN))
}

/// Try to parse full datetime formats.
fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f", // With fractional seconds
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
        "%d-%b-%Y %H:%M",
        "%d/%m/%Y %H:%M:%S", // European
        "%d/%m/%Y %H:%M",
        "%m/%d/%Y %H:%M:%S", // US
        "%m/%d/%Y %H:%M",
    ];

    for fmt in &formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    None
}

/// Try to parse date-only formats.
fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d-%b-%Y",  // 15-Jan-2024
        "%d-%B-%Y",  // 15-January-2024
        "%d/%m/%Y",  // European: 15/01/2024
        "%m/%d/%Y",  // US: 01/15/2024
        "%d.%m.%Y",  // German: 15.01.2024
        "%Y%m%d",    // Compact: 20240115
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
        "%Y-%b-%d",  // 2024-Jan-15
        "%d-%m-%Y",  // 15-01-2024
    ];

    for fmt in &formats {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d);
        }
    }

    None
}
