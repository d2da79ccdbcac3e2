use chrono::NaiveDate;
use crmbase::utils::datetime::*;

#[test]
fn test_parse_date() {
    let date = parse_date("2025-01-15").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());

    assert!(parse_date("15/01/2025").is_err());
    assert!(parse_date("not a date").is_err());
}

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
}

#[test]
fn test_is_valid_format() {
    assert!(is_valid_format("%Y-%m-%d"));
    assert!(is_valid_format("%d %b %Y %I:%M%p"));
    assert!(!is_valid_format("%Q"));
}

#[test]
fn test_parse_flexible_rfc3339() {
    let dt = parse_flexible("2025-01-15T14:30:00Z").unwrap();
    assert_eq!(format_ymd(dt.date()), "2025-01-15");
    assert_eq!(dt.format("%H:%M").to_string(), "14:30");
}

#[test]
fn test_parse_flexible_naive_formats() {
    assert!(parse_flexible("2025-01-15T14:30:00").is_some());
    assert!(parse_flexible("2025-01-15 14:30:00").is_some());

    // Bare dates parse to midnight
    let dt = parse_flexible("2025-01-15").unwrap();
    assert_eq!(dt.format("%H:%M:%S").to_string(), "00:00:00");
}

#[test]
fn test_parse_flexible_rejects_garbage() {
    assert!(parse_flexible("soon").is_none());
    assert!(parse_flexible("").is_none());
}

#[test]
fn test_format_date() {
    assert_eq!(format_date("2024-06-12", "%d %b %Y"), "12 Jun 2024");
    assert_eq!(format_date("2024-06-12T15:30:00", "%d %b %Y %I:%M%p"), "12 Jun 2024 03:30PM");
}

#[test]
fn test_format_date_degrades_to_input() {
    // Unparseable date
    assert_eq!(format_date("whenever", "%d %b %Y"), "whenever");
    // Invalid format string
    assert_eq!(format_date("2024-06-12", "%Q"), "2024-06-12");
}

#[test]
fn test_week_start_and_end() {
    // 2024-06-12 is a Wednesday
    let wednesday = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
    assert_eq!(format_ymd(week_start(wednesday)), "2024-06-09");
    assert_eq!(format_ymd(week_end(wednesday)), "2024-06-15");
}

#[test]
fn test_week_boundaries_on_their_own_day() {
    // A Sunday is its own week start
    let sunday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
    assert_eq!(week_start(sunday), sunday);
    assert_eq!(format_ymd(week_end(sunday)), "2024-06-15");

    // A Saturday is its own week end
    let saturday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    assert_eq!(week_end(saturday), saturday);
    assert_eq!(format_ymd(week_start(saturday)), "2024-06-09");
}

#[test]
fn test_week_range() {
    assert_eq!(week_range("2024-06-12", false), "2024-06-09");
    assert_eq!(week_range("2024-06-12", true), "2024-06-15");
}

#[test]
fn test_week_range_echoes_unparseable_input() {
    assert_eq!(week_range("someday", false), "someday");
    assert_eq!(week_range("someday", true), "someday");
}

#[test]
fn test_timezones() {
    let timezones = timezones();

    assert!(timezones.contains_key("UTC"));
    assert!(timezones.contains_key("Europe/Paris"));
    assert!(timezones.contains_key("America/New_York"));

    // Identifier maps to itself
    assert_eq!(timezones.get("UTC"), Some(&"UTC".to_string()));

    // BTreeMap keys iterate in sorted order
    let keys: Vec<_> = timezones.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
