use crate::errors::{AppError, AppResult};
use crate::utils::date::days_in_month;
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2050;

/// Month the output calendars cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPeriod {
    pub year: i32,
    pub month: u32,
}

impl TargetPeriod {
    /// Validated constructor: year in 2000..=2050, month in 1..=12.
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        check_month(month)?;
        check_year(year)?;
        Ok(Self { year, month })
    }

    /// Pick the target month from the request, filling whatever is missing
    /// from `first_date` (the date of the first data row).
    pub fn resolve(
        month: Option<u32>,
        year: Option<i32>,
        first_date: Option<NaiveDate>,
    ) -> AppResult<Self> {
        match (month, year, first_date) {
            (Some(m), Some(y), _) => Self::new(y, m),
            (m, y, Some(d)) => Self::new(y.unwrap_or(d.year()), m.unwrap_or(d.month())),
            _ => Err(AppError::Validation(
                "month/year not given and the source has no data row to derive them from"
                    .to_string(),
            )),
        }
    }

    pub fn days_in_month(&self) -> u32 {
        // month already validated
        days_in_month(self.year, self.month).unwrap_or(0)
    }
}

impl fmt::Display for TargetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Validate the optional request parameters before any source row is read.
pub fn validate_request(month: Option<u32>, year: Option<i32>) -> AppResult<()> {
    if let Some(m) = month {
        check_month(m)?;
    }
    if let Some(y) = year {
        check_year(y)?;
    }
    Ok(())
}

fn check_month(month: u32) -> AppResult<()> {
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    Ok(())
}

fn check_year(year: i32) -> AppResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(AppError::Validation(format!(
            "year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
        )));
    }
    Ok(())
}
