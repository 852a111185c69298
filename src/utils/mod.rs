pub mod date;
pub mod excel_date;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::format_hours;
