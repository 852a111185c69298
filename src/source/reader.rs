// src/source/reader.rs

use crate::errors::{AppError, AppResult};
use crate::source::{CellValue, SourceRecord, SourceTable};
use crate::utils::excel_date::{excel_serial_to_date, excel_serial_to_time};
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::io::Cursor;

/// Read the first sheet of an uploaded workbook (xlsx / xls / ods).
///
/// The whole sheet is loaded in memory; any further sheet is ignored.
pub fn read_source(bytes: &[u8]) -> AppResult<SourceTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| AppError::SourceRead(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::SourceRead("workbook contains no sheets".to_string()))?
        .map_err(|e| AppError::SourceRead(e.to_string()))?;

    Ok(table_from_range(&range))
}

/// Convert a calamine range into a `SourceTable`, first row as header.
pub fn table_from_range(range: &Range<Data>) -> SourceTable {
    // row number of the first cell of the range, 0-based
    let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);

    let mut rows = range.rows();

    let header: Vec<String> = match rows.next() {
        Some(cells) => cells.iter().map(|c| convert_cell(c).to_string()).collect(),
        None => return SourceTable::default(),
    };

    let rows: Vec<SourceRecord> = rows
        .enumerate()
        .filter_map(|(i, cells)| {
            let cells: Vec<CellValue> = cells.iter().map(convert_cell).collect();
            if cells.iter().all(CellValue::is_empty) {
                return None;
            }
            Some(SourceRecord {
                // +1 header, +1 for 1-based numbering
                number: first_row + i + 2,
                cells,
            })
        })
        .collect();

    SourceTable { header, rows }
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) if dt.is_duration() => {
            let serial = dt.as_f64();
            TimeDelta::try_seconds((serial * 86_400.0).round() as i64)
                .map(CellValue::Duration)
                .unwrap_or(CellValue::Number(serial * 24.0))
        }
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            // time-only formats have no date part
            let value = if serial < 1.0 {
                excel_serial_to_time(serial).map(CellValue::Time)
            } else {
                excel_serial_to_date(serial).map(CellValue::Date)
            };
            value.unwrap_or(CellValue::Number(serial))
        }
        Data::DateTimeIso(s) => parse_iso(s),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

fn parse_iso(s: &str) -> CellValue {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return CellValue::Date(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return CellValue::Date(d);
    }
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S%.f") {
        return CellValue::Time(t);
    }
    CellValue::Text(s.to_string())
}
