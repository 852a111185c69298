use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Hours written on any day that received at least one task.
pub const WORKDAY_HOURS: &str = "8";

/// One calendar day in an employee's monthly sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub title: String,
    /// Comma-joined task descriptions, empty when nothing was logged.
    pub description: String,
    /// `WORKDAY_HOURS` once a task lands on the day, empty otherwise.
    pub hours: String,
    pub is_weekend: bool,
}

impl DayRecord {
    pub fn has_tasks(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Calendar of one employee for the target month, keyed by day-of-month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSheet {
    pub employee: String,
    pub year: i32,
    pub month: u32,
    pub days: BTreeMap<u32, DayRecord>,
}

impl MonthSheet {
    pub fn day(&self, day: u32) -> Option<&DayRecord> {
        self.days.get(&day)
    }

    pub fn day_mut(&mut self, day: u32) -> Option<&mut DayRecord> {
        self.days.get_mut(&day)
    }

    /// Day records in ascending date order.
    pub fn records(&self) -> impl Iterator<Item = &DayRecord> {
        self.days.values()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
