//! Duration cells → fractional hours.
//!
//! Accepted shapes:
//! - plain numbers (`8`, `7.5`)
//! - `HH:MM` strings, where only the quarter markers of the minutes count
//!   (`:15` → +0.30, `:30` → +0.50, `:45` → +0.75, anything else → +0)

use crate::errors::{AppError, AppResult};
use crate::source::CellValue;

/// Parse a raw duration string, `None` when it is not a valid duration.
pub fn parse_duration(raw: &str) -> Option<f64> {
    let Some(idx) = raw.find(':') else {
        return raw.trim().parse::<f64>().ok().filter(|h| h.is_finite());
    };

    // two chars before and two chars after the first colon
    let hour_part = raw.get(idx.checked_sub(2)?..idx)?;
    let minute_part = raw.get(idx + 1..idx + 3)?;

    let hours = hour_part.trim().parse::<f64>().ok().filter(|h| h.is_finite())?;
    let minutes = minute_part.parse::<i32>().ok()?;

    Some(hours + quarter_fraction(minutes))
}

fn quarter_fraction(minutes: i32) -> f64 {
    match minutes {
        15 => 0.3,
        30 => 0.5,
        45 => 0.75,
        _ => 0.0,
    }
}

/// Hours held by a source cell; `row` is only used for the error report.
pub fn hours_from_cell(cell: &CellValue, row: usize) -> AppResult<f64> {
    let parsed = match cell {
        CellValue::Number(n) if n.is_finite() => Some(*n),
        CellValue::Text(s) => parse_duration(s),
        CellValue::Time(t) => parse_duration(&t.format("%H:%M:%S").to_string()),
        CellValue::Duration(d) => {
            let minutes = d.num_minutes();
            Some(minutes.div_euclid(60) as f64 + quarter_fraction(minutes.rem_euclid(60) as i32))
        }
        _ => None,
    };

    parsed.ok_or_else(|| AppError::Format {
        value: cell.to_string(),
        row,
    })
}
