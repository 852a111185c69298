// src/export/xlsx.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::presentation::{RowKind, classify, description_text, format_for};
use crate::models::{MonthSheet, Report};
use crate::utils::excel_date::date_to_excel_serial;
use crate::utils::formatting::format_hours;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

pub const SUMMARY_SHEET: &str = "Summary";
pub const SUMMARY_HEADERS: [&str; 3] = ["Name", "Hours", "New/Existing"];
pub const EMPLOYEE_HEADERS: [&str; 5] = ["Name", "Date", "Title", "Description", "Project Time"];
pub const TOTAL_LABEL: &str = "Total Hours";

const DATE_FORMAT: &str = "yyyy-mm-dd";
// "2025-03-01" as displayed by DATE_FORMAT
const DATE_WIDTH: usize = 10;

/// Render a report as an xlsx workbook held in memory.
///
/// Sheet order: "Summary", then one sheet per employee in `report.sheets` order.
pub fn assemble(report: &Report, cfg: &Config) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    write_summary(workbook.add_worksheet(), report, cfg)?;

    for sheet in &report.sheets {
        write_month_sheet(workbook.add_worksheet(), sheet, cfg)?;
    }

    workbook.save_to_buffer().map_err(to_export_error)
}

fn write_summary(ws: &mut Worksheet, report: &Report, cfg: &Config) -> AppResult<()> {
    ws.set_name(SUMMARY_SHEET).map_err(to_export_error)?;

    let mut widths = ColumnWidths::new(&SUMMARY_HEADERS);
    write_header(ws, &SUMMARY_HEADERS)?;

    let plain = format_for(RowKind::Plain, None);
    let mut row: u32 = 1;

    for total in &report.totals {
        let hours = format_hours(total.hours);
        let cells = [total.name.as_str(), hours.as_str(), cfg.summary_status.as_str()];
        write_text_row(ws, row, &cells, &plain)?;
        widths.update(&cells);
        row += 1;
    }

    // separator
    for col in 0..SUMMARY_HEADERS.len() {
        ws.write_blank(row, col as u16, &plain)
            .map_err(to_export_error)?;
    }
    row += 1;

    let total = report.total_hours.to_string();
    let cells = [TOTAL_LABEL, total.as_str(), ""];
    write_text_row(ws, row, &cells, &plain)?;
    widths.update(&cells);

    widths.apply(ws)
}

fn write_month_sheet(ws: &mut Worksheet, sheet: &MonthSheet, cfg: &Config) -> AppResult<()> {
    ws.set_name(&sheet.employee).map_err(to_export_error)?;

    let mut widths = ColumnWidths::new(&EMPLOYEE_HEADERS);
    widths.fit(1, DATE_WIDTH);
    write_header(ws, &EMPLOYEE_HEADERS)?;

    for (idx, day) in sheet.records().enumerate() {
        let row = (idx + 1) as u32;
        let kind = classify(day);
        let text_fmt = format_for(kind, None);
        let date_fmt = format_for(kind, Some(DATE_FORMAT));

        let description = description_text(day, &cfg.leave_label);

        ws.write_with_format(row, 0, sheet.employee.as_str(), &text_fmt)
            .map_err(to_export_error)?;
        ws.write_with_format(row, 1, date_to_excel_serial(&day.date), &date_fmt)
            .map_err(to_export_error)?;
        write_text_cell(ws, row, 2, &day.title, &text_fmt)?;
        write_text_cell(ws, row, 3, description, &text_fmt)?;
        write_text_cell(ws, row, 4, &day.hours, &text_fmt)?;

        widths.update(&[
            sheet.employee.as_str(),
            "",
            day.title.as_str(),
            description,
            day.hours.as_str(),
        ]);
    }

    widths.apply(ws)
}

fn write_header(ws: &mut Worksheet, headers: &[&str]) -> AppResult<()> {
    let fmt = format_for(RowKind::Header, None);
    write_text_row(ws, 0, headers, &fmt)?;
    ws.set_freeze_panes(1, 0).map_err(to_export_error)?;
    Ok(())
}

fn write_text_row(ws: &mut Worksheet, row: u32, cells: &[&str], fmt: &Format) -> AppResult<()> {
    for (col, value) in cells.iter().enumerate() {
        write_text_cell(ws, row, col as u16, value, fmt)?;
    }
    Ok(())
}

/// Empty strings become styled blanks so borders and fills still show.
fn write_text_cell(ws: &mut Worksheet, row: u32, col: u16, value: &str, fmt: &Format) -> AppResult<()> {
    if value.is_empty() {
        ws.write_blank(row, col, fmt).map_err(to_export_error)?;
    } else {
        ws.write_with_format(row, col, value, fmt)
            .map_err(to_export_error)?;
    }
    Ok(())
}

/// Auto-larghezza colonne in base al contenuto più largo.
struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    fn new(headers: &[&str]) -> Self {
        Self(headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect())
    }

    fn fit(&mut self, col: usize, width: usize) {
        if let Some(w) = self.0.get_mut(col) {
            *w = (*w).max(width);
        }
    }

    fn update(&mut self, cells: &[&str]) {
        for (col, value) in cells.iter().enumerate() {
            self.fit(col, UnicodeWidthStr::width(*value));
        }
    }

    fn apply(&self, ws: &mut Worksheet) -> AppResult<()> {
        for (col, w) in self.0.iter().enumerate() {
            ws.set_column_width(col as u16, *w as f64 + 2.0)
                .map_err(to_export_error)?;
        }
        Ok(())
    }
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
