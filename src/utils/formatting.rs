//! Formatting utilities used for CLI and export outputs.

/// Render an hour amount the way the summary sheet shows it:
/// whole values keep one decimal (`8.0`), fractional ones print as-is (`16.75`).
pub fn format_hours(hours: f64) -> String {
    if hours.is_finite() && hours.fract() == 0.0 {
        format!("{:.1}", hours)
    } else {
        format!("{}", hours)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}
