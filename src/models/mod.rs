pub mod day_record;
pub mod employee_total;
pub mod report;
pub mod source_row;

pub use day_record::{DayRecord, MonthSheet, WORKDAY_HOURS};
pub use employee_total::EmployeeTotal;
pub use report::Report;
pub use source_row::SourceRow;
