//! Date and time utility functions
//!
//! This module provides parsing and formatting helpers for the date strings
//! that flow through the application: flexible parsing of the formats seen
//! in stored records, week-range calculations for reporting views, and the
//! timezone list shown in settings screens.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Check that a chrono format string contains no invalid specifiers
pub fn is_valid_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Parse a date or datetime string in any of the formats stored records use
///
/// Tries, in order: RFC3339 (e.g. "2025-01-15T14:30:00Z"), ISO 8601
/// without timezone, space-separated datetime, bare date (midnight).
///
/// # Returns
/// * `Option<NaiveDateTime>` - Parsed value, or `None` if no format matches
pub fn parse_flexible(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(input, &format!("{DATE_FORMAT}T%H:%M:%S")) {
        return Some(dt);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(input, &format!("{DATE_FORMAT} %H:%M:%S")) {
        return Some(dt);
    }

    if let Ok(d) = parse_date(input) {
        return d.and_hms_opt(0, 0, 0);
    }

    None
}

/// Render a date string with the given chrono format
///
/// Unparseable input and invalid format strings both degrade to returning
/// the input unchanged.
pub fn format_date(input: &str, format: &str) -> String {
    if !is_valid_format(format) {
        return input.to_string();
    }

    match parse_flexible(input) {
        Some(dt) => dt.format(format).to_string(),
        None => input.to_string(),
    }
}

/// The Sunday on or before the given date
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// The Saturday on or after the given date
pub fn week_end(date: NaiveDate) -> NaiveDate {
    let offset = 6 - date.weekday().num_days_from_sunday() as i64;
    date + Duration::days(offset)
}

/// Week boundary of the week containing `input`, as a YYYY-MM-DD string
///
/// With `end == false` this is the Sunday on or before the date, with
/// `end == true` the Saturday on or after it. Unparseable input is echoed
/// back unchanged.
pub fn week_range(input: &str, end: bool) -> String {
    let Some(date) = parse_flexible(input).map(|dt| dt.date()) else {
        return input.to_string();
    };

    if end {
        format_ymd(week_end(date))
    } else {
        format_ymd(week_start(date))
    }
}

/// All known timezone identifiers as an identifier -> identifier map
///
/// Settings screens bind both the option value and its label to the
/// identifier, hence the shape.
pub fn timezones() -> BTreeMap<String, String> {
    chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| (tz.name().to_string(), tz.name().to_string()))
        .collect()
}
