use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ConvertRequest, Core};
use crate::errors::AppResult;
use crate::export::xlsx::TOTAL_LABEL;
use crate::export::{SummaryFormat, summary_to_csv, summary_to_json};
use crate::models::Report;
use crate::source::read_source;
use crate::ui::messages::info;
use crate::utils::format_hours;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Align, Column, Table};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        input,
        month,
        year,
        format,
    } = cmd
    {
        let request = ConvertRequest {
            month: *month,
            year: *year,
        };

        let bytes = fs::read(expand_tilde(input))?;
        let table = read_source(&bytes)?;
        let report = Core::build_report(&table, &request, cfg)?;

        match format {
            SummaryFormat::Table => {
                info(format!(
                    "Hours summary for {:04}-{:02}",
                    report.year, report.month
                ));
                print!("{}", render_table(&report, cfg));
            }
            SummaryFormat::Json => println!("{}", summary_to_json(&report)?),
            SummaryFormat::Csv => print!("{}", summary_to_csv(&report)?),
        }
    }
    Ok(())
}

fn render_table(report: &Report, cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::new("Name", Align::Left),
        Column::new("Hours", Align::Right),
        Column::new("New/Existing", Align::Left),
    ]);

    for total in &report.totals {
        table.add_row(vec![
            total.name.clone(),
            format_hours(total.hours),
            cfg.summary_status.clone(),
        ]);
    }
    table.add_row(vec![
        TOTAL_LABEL.to_string(),
        report.total_hours.to_string(),
        String::new(),
    ]);

    table.render()
}
