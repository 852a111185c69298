//! Excel serial date helpers (1900 date system, epoch 1899-12-30).

use chrono::{Duration, NaiveDate, NaiveTime};

const SECONDS_PER_DAY: f64 = 86400.0;

fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

/// Seriale Excel per una data (mezzanotte).
pub fn date_to_excel_serial(d: &NaiveDate) -> f64 {
    (*d - excel_epoch()).num_days() as f64
}

/// Parte intera del seriale → data di calendario.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    excel_epoch().checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// Parte frazionaria del seriale → ora del giorno, arrotondata al secondo.
pub fn excel_serial_to_time(serial: f64) -> Option<NaiveTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let secs = (serial.fract() * SECONDS_PER_DAY).round() as u32;
    // 23:59:59.6 rounds up to a full day
    NaiveTime::from_num_seconds_from_midnight_opt(secs.min(86399), 0)
}
