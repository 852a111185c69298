use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::validate_request;
use crate::core::{Conversion, ConvertRequest, Core};
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::ui::messages::{detail, info, warning};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        input,
        output,
        month,
        year,
        dedup,
        force,
    } = cmd
    {
        let request = ConvertRequest {
            month: *month,
            year: *year,
        };
        // reject bad parameters before touching any file
        validate_request(request.month, request.year)?;

        let mut cfg = cfg.clone();
        if let Some(scope) = dedup {
            cfg.task_dedup = *scope;
        }

        let input_path = expand_tilde(input);
        let output_path = expand_tilde(output);

        ensure_writable(&output_path, *force)?;

        info(format!("Reading timesheet: {}", input_path.display()));
        let bytes = fs::read(&input_path)?;

        let Conversion { report, workbook } = Core::convert(&bytes, &request, &cfg)?;
        if report.sheets.is_empty() {
            warning("No employee with logged hours found: only the summary sheet was written.");
        }

        fs::write(&output_path, workbook)?;

        detail("Period", format!("{:04}-{:02}", report.year, report.month));
        detail("Employees", report.sheets.len());
        detail("Total hours", report.total_hours);
        notify_export_success("XLSX", &output_path);
    }
    Ok(())
}
