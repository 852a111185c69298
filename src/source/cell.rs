use crate::utils::formatting::format_hours;
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use std::fmt;

/// A single source cell, reduced to the shapes the engine cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Elapsed-time cell (`[h]:mm` formats), may exceed 24 hours.
    Duration(TimeDelta),
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    /// True for missing cells and for text cells holding only whitespace.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => f.write_str(&format_hours(*n)),
            CellValue::Date(d) => write!(f, "{}", d.format("%d-%b-%Y")),
            CellValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            CellValue::Duration(d) => {
                let minutes = d.num_minutes();
                write!(f, "{}:{:02}", minutes / 60, (minutes % 60).abs())
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// One data row of the source sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    /// 1-based row number as shown by spreadsheet applications.
    pub number: usize,
    pub cells: Vec<CellValue>,
}

impl SourceRecord {
    /// Cell at `col`; short rows read as empty.
    pub fn cell(&self, col: usize) -> &CellValue {
        self.cells.get(col).unwrap_or(&EMPTY_CELL)
    }
}

/// Whole first sheet of the uploaded workbook: header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    pub header: Vec<String>,
    pub rows: Vec<SourceRecord>,
}

impl SourceTable {
    /// Build a table from plain rows; the first row is the header.
    /// Mostly useful for callers that already hold the data in memory.
    pub fn from_rows(mut rows: Vec<Vec<CellValue>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let header: Vec<String> = rows.remove(0).iter().map(|c| c.to_string()).collect();
        let rows: Vec<SourceRecord> = rows
            .into_iter()
            .enumerate()
            .filter(|(_, cells)| !cells.iter().all(CellValue::is_empty))
            .map(|(i, cells)| SourceRecord {
                number: i + 2,
                cells,
            })
            .collect();

        Self { header, rows }
    }
}
