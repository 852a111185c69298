//! Record extraction and per-employee hour aggregation.

use crate::core::duration::hours_from_cell;
use crate::core::schema::SourceColumns;
use crate::errors::{AppError, AppResult};
use crate::models::{EmployeeTotal, SourceRow};
use crate::source::{CellValue, SourceTable};
use crate::utils::date::parse_with_formats;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Resolve the work date held by a source cell.
///
/// Text cells must match one of `formats`; native spreadsheet dates are
/// taken as they are. Anything else is a `DateFormat` error.
pub fn parse_work_date<S: AsRef<str>>(
    cell: &CellValue,
    row: usize,
    formats: &[S],
) -> AppResult<NaiveDate> {
    let parsed = match cell {
        CellValue::Date(d) => Some(*d),
        CellValue::Text(s) => parse_with_formats(s, formats),
        _ => None,
    };

    parsed.ok_or_else(|| AppError::DateFormat {
        value: cell.to_string(),
        row,
    })
}

/// Turn every data row that names an employee into a `SourceRow`.
///
/// Rows with an empty employee cell are ignored. A single unparsable date
/// aborts the whole extraction.
pub fn extract_rows<S: AsRef<str>>(
    table: &SourceTable,
    cols: &SourceColumns,
    date_formats: &[S],
) -> AppResult<Vec<SourceRow>> {
    let mut out = Vec::with_capacity(table.rows.len());

    for record in &table.rows {
        let name_cell = record.cell(cols.employee);
        if name_cell.is_empty() {
            continue;
        }

        let work_date = parse_work_date(record.cell(cols.date), record.number, date_formats)?;

        out.push(SourceRow {
            number: record.number,
            employee_name: name_cell.to_string(),
            work_date,
            description: record.cell(cols.description).to_string(),
            total_hours_raw: record.cell(cols.total_hours).clone(),
        });
    }

    Ok(out)
}

/// Sum the hours of each employee, counting one row per (employee, day).
///
/// Further rows of an already counted day add nothing, whatever their hours.
/// Rows without a total-hours value are skipped. The result is sorted by name.
pub fn aggregate_totals(rows: &[SourceRow]) -> AppResult<Vec<EmployeeTotal>> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    let mut counted: HashMap<&str, HashSet<u32>> = HashMap::new();

    for row in rows {
        if row.total_hours_raw.is_empty() {
            continue;
        }

        let name = row.employee_name.as_str();
        let day = row.day();

        if counted.get(name).is_some_and(|days| days.contains(&day)) {
            continue;
        }

        let hours = hours_from_cell(&row.total_hours_raw, row.number)?;
        *totals.entry(name).or_insert(0.0) += hours;
        counted.entry(name).or_default().insert(day);
    }

    Ok(totals
        .into_iter()
        .map(|(name, hours)| EmployeeTotal {
            name: name.to_string(),
            hours,
        })
        .collect())
}

/// Grand total shown at the bottom of the summary sheet.
///
/// The running sum is truncated to whole hours after every addition, so
/// `8.5 + 8.5` yields `16`, not `17`.
pub fn grand_total(totals: &[EmployeeTotal]) -> i64 {
    totals
        .iter()
        .fold(0_i64, |acc, t| (acc as f64 + t.hours) as i64)
}
