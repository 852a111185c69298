use crate::config::Config;
use crate::core::calendar::synthesize;
use crate::core::consolidate::consolidate;
use crate::core::extract::{aggregate_totals, extract_rows, grand_total};
use crate::core::period::{TargetPeriod, validate_request};
use crate::core::schema::SourceColumns;
use crate::errors::AppResult;
use crate::export::xlsx::assemble;
use crate::models::Report;
use crate::source::{SourceTable, read_source};

/// Target month requested by the caller; missing parts are derived from
/// the first data row of the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertRequest {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Outcome of a conversion: the engine's report and the rendered workbook.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub report: Report,
    pub workbook: Vec<u8>,
}

pub struct Core;

impl Core {
    /// Source bytes → output workbook bytes.
    ///
    /// Either the whole workbook is produced or an error is returned;
    /// nothing is written before every row has been consolidated.
    pub fn convert(bytes: &[u8], request: &ConvertRequest, cfg: &Config) -> AppResult<Conversion> {
        validate_request(request.month, request.year)?;

        let table = read_source(bytes)?;
        let report = Self::build_report(&table, request, cfg)?;
        let workbook = assemble(&report, cfg)?;

        Ok(Conversion { report, workbook })
    }

    /// Run the engine on an in-memory table.
    pub fn build_report(
        table: &SourceTable,
        request: &ConvertRequest,
        cfg: &Config,
    ) -> AppResult<Report> {
        validate_request(request.month, request.year)?;

        let cols = SourceColumns::resolve(&table.header, &cfg.columns)?;

        let rows = extract_rows(table, &cols, &cfg.date_formats)?;

        // missing month/year come from the first row naming an employee
        let first_date = rows.first().map(|r| r.work_date);
        let period = TargetPeriod::resolve(request.month, request.year, first_date)?;

        let totals = aggregate_totals(&rows)?;

        let sheets = totals
            .iter()
            .map(|total| {
                let mut sheet = synthesize(&total.name, &period, &cfg.default_title);
                consolidate(&mut sheet, &rows, cfg.task_dedup);
                sheet
            })
            .collect();

        Ok(Report {
            year: period.year,
            month: period.month,
            total_hours: grand_total(&totals),
            totals,
            sheets,
        })
    }
}
