// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::{EmployeeTotal, Report};
use serde::Serialize;

/// Struttura “piatta” per export del riepilogo ore.
#[derive(Serialize, Debug)]
pub struct SummaryExport<'a> {
    pub period: String,
    pub employees: &'a [EmployeeTotal],
    pub total_hours: i64,
}

impl<'a> SummaryExport<'a> {
    pub fn from_report(report: &'a Report) -> Self {
        Self {
            period: format!("{:04}-{:02}", report.year, report.month),
            employees: &report.totals,
            total_hours: report.total_hours,
        }
    }
}

/// Riepilogo in JSON pretty-printed.
pub fn summary_to_json(report: &Report) -> AppResult<String> {
    serde_json::to_string_pretty(&SummaryExport::from_report(report))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

/// Riepilogo in CSV (header incluso grazie a serde).
pub fn summary_to_csv(report: &Report) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for item in &report.totals {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
