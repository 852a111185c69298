mod common;

use chrono::{NaiveTime, TimeDelta};
use common::{HEADER, Src, approx, source_xlsx};
use rtimeweaver::core::duration::{hours_from_cell, parse_duration};
use rtimeweaver::errors::AppError;
use rtimeweaver::source::{CellValue, read_source};

#[test]
fn test_plain_numbers() {
    assert!(approx(parse_duration("8").unwrap(), 8.0));
    assert!(approx(parse_duration("7.5").unwrap(), 7.5));
    assert!(approx(parse_duration(" 6 ").unwrap(), 6.0));
}

#[test]
fn test_quarter_markers_are_not_minutes_over_sixty() {
    assert!(approx(parse_duration("08:00").unwrap(), 8.0));
    // :15 maps to .30, not .25
    assert!(approx(parse_duration("08:15").unwrap(), 8.3));
    assert!(approx(parse_duration("08:30").unwrap(), 8.5));
    assert!(approx(parse_duration("08:45").unwrap(), 8.75));
}

#[test]
fn test_other_minutes_are_dropped() {
    assert!(approx(parse_duration("08:20").unwrap(), 8.0));
    assert!(approx(parse_duration("07:59").unwrap(), 7.0));
}

#[test]
fn test_only_two_chars_around_first_colon_count() {
    // seconds are ignored
    assert!(approx(parse_duration("08:30:00").unwrap(), 8.5));
    // leading text before the hour digits is ignored too
    assert!(approx(parse_duration("PT 10:45").unwrap(), 10.75));
}

#[test]
fn test_malformed_durations() {
    assert_eq!(parse_duration("abc"), None);
    assert_eq!(parse_duration(""), None);
    assert_eq!(parse_duration("8:30"), None);
    assert_eq!(parse_duration("08:3"), None);
    assert_eq!(parse_duration("xx:15"), None);
    assert_eq!(parse_duration("08:ab"), None);
    assert_eq!(parse_duration("NaN"), None);
}

#[test]
fn test_hours_from_cell_shapes() {
    assert!(approx(hours_from_cell(&CellValue::Number(7.25), 2).unwrap(), 7.25));
    assert!(approx(hours_from_cell(&CellValue::from("08:45"), 2).unwrap(), 8.75));

    let half_past_eight = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
    assert!(approx(
        hours_from_cell(&CellValue::Time(half_past_eight), 2).unwrap(),
        8.5
    ));
}

#[test]
fn test_hours_from_cell_reports_format_error() {
    let err = hours_from_cell(&CellValue::from("eight"), 7).unwrap_err();

    match &err {
        AppError::Format { value, row } => {
            assert_eq!(value, "eight");
            assert_eq!(*row, 7);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.kind(), "format");
    assert_eq!(err.raw_value(), Some("eight"));
}

#[test]
fn test_elapsed_time_cells_over_a_day() {
    let long_shift = TimeDelta::try_minutes(26 * 60 + 15).unwrap();
    assert!(approx(hours_from_cell(&CellValue::Duration(long_shift), 2).unwrap(), 26.3));
    assert_eq!(CellValue::Duration(long_shift).to_string(), "26:15");

    let src = source_xlsx(&[
        HEADER.iter().map(|h| Src::T(h)).collect(),
        vec![
            Src::T("Jane"),
            Src::T("P-1"),
            Src::T("Audit"),
            Src::T("03-Mar-2025"),
            Src::H(30.5),
        ],
    ]);
    let table = read_source(&src).unwrap();
    let hours = table.rows[0].cell(4);

    assert!(matches!(hours, CellValue::Duration(_)), "{hours:?}");
    assert!(approx(hours_from_cell(hours, 2).unwrap(), 30.5));
}
