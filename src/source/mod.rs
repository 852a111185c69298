//! Raw source timesheet: workbook reading and the in-memory cell table.

mod cell;
pub mod reader;

pub use cell::{CellValue, SourceRecord, SourceTable};
pub use reader::read_source;
