use crate::config::ColumnNames;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

/// Header name → column index, built once per source table.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    by_name: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Scan the header left to right; on duplicate names the leftmost wins.
    pub fn from_header(header: &[String]) -> Self {
        let mut by_name = HashMap::with_capacity(header.len());
        for (idx, name) in header.iter().enumerate() {
            by_name.entry(name.clone()).or_insert(idx);
        }
        Self { by_name }
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn require(&self, name: &str) -> AppResult<usize> {
        self.find(name)
            .ok_or_else(|| AppError::Schema(name.to_string()))
    }
}

/// Resolved positions of the four columns the engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceColumns {
    pub employee: usize,
    pub date: usize,
    pub description: usize,
    pub total_hours: usize,
}

impl SourceColumns {
    /// Fails with `AppError::Schema` naming the first missing header.
    pub fn resolve(header: &[String], names: &ColumnNames) -> AppResult<Self> {
        let index = ColumnIndex::from_header(header);
        Ok(Self {
            employee: index.require(&names.employee)?,
            date: index.require(&names.date)?,
            description: index.require(&names.description)?,
            total_hours: index.require(&names.total_hours)?,
        })
    }
}
