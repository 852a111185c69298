//! Merge the source tasks of one employee into their monthly calendar.

use crate::config::DedupScope;
use crate::models::{MonthSheet, SourceRow, WORKDAY_HOURS};
use std::collections::HashSet;

/// Descriptions already merged for one employee.
///
/// Owned by a single consolidation call; with `DedupScope::Month` a
/// description is accepted once for the whole month, with `DedupScope::Day`
/// once per day.
#[derive(Debug, Clone)]
pub struct TaskDedupIndex {
    scope: DedupScope,
    seen: HashSet<(u32, String)>,
}

impl TaskDedupIndex {
    pub fn new(scope: DedupScope) -> Self {
        Self {
            scope,
            seen: HashSet::new(),
        }
    }

    /// Record `description` for `day`; returns false if it was already taken.
    pub fn insert(&mut self, day: u32, description: &str) -> bool {
        let key_day = match self.scope {
            DedupScope::Month => 0,
            DedupScope::Day => day,
        };
        self.seen.insert((key_day, description.to_string()))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Fill `sheet` with the tasks of its employee found in `rows`.
///
/// Rows are taken in source order. Each accepted description is appended to
/// its day (", " separated) and the day's hours become `WORKDAY_HOURS`.
/// Rows whose day-of-month does not exist in the target month are ignored.
pub fn consolidate(sheet: &mut MonthSheet, rows: &[SourceRow], scope: DedupScope) {
    let mut index = TaskDedupIndex::new(scope);
    let employee = sheet.employee.clone();

    for row in rows.iter().filter(|r| r.employee_name == employee) {
        let day = row.day();
        let Some(record) = sheet.day_mut(day) else {
            continue;
        };

        if !index.insert(day, &row.description) {
            continue;
        }

        if !record.description.is_empty() {
            record.description.push_str(", ");
        }
        record.description.push_str(&row.description);
        record.hours = WORKDAY_HOURS.to_string();
    }
}
