//! Consolidation engine: from a raw timesheet table to monthly calendars.

pub mod calendar;
pub mod consolidate;
pub mod duration;
pub mod extract;
pub mod logic;
pub mod period;
pub mod schema;

pub use logic::{Conversion, ConvertRequest, Core};
