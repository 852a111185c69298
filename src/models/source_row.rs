use crate::source::CellValue;
use chrono::{Datelike, NaiveDate};

/// One logged task of the source timesheet, with its date already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// 1-based spreadsheet row the task came from.
    pub number: usize,
    pub employee_name: String,
    pub work_date: NaiveDate,
    pub description: String,
    /// Raw "Total Hours" cell; may be empty.
    pub total_hours_raw: CellValue,
}

impl SourceRow {
    pub fn day(&self) -> u32 {
        self.work_date.day()
    }
}
