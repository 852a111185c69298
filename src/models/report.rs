use crate::models::day_record::MonthSheet;
use crate::models::employee_total::EmployeeTotal;

/// Fully consolidated result of one conversion, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub year: i32,
    pub month: u32,
    /// Sorted by employee name.
    pub totals: Vec<EmployeeTotal>,
    /// Sum of all totals, truncated to whole hours after every addition.
    pub total_hours: i64,
    /// One sheet per employee, same order as `totals`.
    pub sheets: Vec<MonthSheet>,
}
