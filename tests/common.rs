#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
use rtimeweaver::source::{CellValue, SourceTable};
use rust_xlsxwriter::{Format, Workbook};
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

pub const HEADER: [&str; 5] = ["Emp Name", "Project", "Description", "Date", "Total Hours"];

pub fn rtw() -> Command {
    cargo_bin_cmd!("rtimeweaver")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeweaver.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A source cell for generated workbooks.
pub enum Src<'a> {
    T(&'a str),
    N(f64),
    /// Date-formatted Excel serial
    D(f64),
    /// Elapsed hours, stored as a `[h]:mm` duration
    H(f64),
}

/// Build a single-sheet xlsx in memory, first row is the header.
pub fn source_xlsx(rows: &[Vec<Src>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    let date_fmt = Format::new().set_num_format("dd-mmm-yyyy");
    let duration_fmt = Format::new().set_num_format("[h]:mm");

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Src::T(s) => {
                    ws.write_string(r as u32, c as u16, *s).expect("write string");
                }
                Src::N(n) => {
                    ws.write_number(r as u32, c as u16, *n).expect("write number");
                }
                Src::D(serial) => {
                    ws.write_number_with_format(r as u32, c as u16, *serial, &date_fmt)
                        .expect("write date");
                }
                Src::H(hours) => {
                    ws.write_number_with_format(r as u32, c as u16, *hours / 24.0, &duration_fmt)
                        .expect("write duration");
                }
            }
        }
    }

    workbook.save_to_buffer().expect("save source workbook")
}

/// Text-only source workbook with the default header.
pub fn text_source(rows: &[[&str; 4]]) -> Vec<u8> {
    let mut all = vec![HEADER.iter().map(|h| Src::T(h)).collect::<Vec<_>>()];
    for [name, desc, date, hours] in rows {
        all.push(vec![
            Src::T(name),
            Src::T("P-1"),
            Src::T(desc),
            Src::T(date),
            Src::T(hours),
        ]);
    }
    source_xlsx(&all)
}

/// In-memory table with the default header, rows as (name, desc, date, hours).
pub fn table(rows: &[[&str; 4]]) -> SourceTable {
    let mut all: Vec<Vec<CellValue>> = vec![HEADER.iter().map(|h| CellValue::from(*h)).collect()];
    for [name, desc, date, hours] in rows {
        all.push(
            [*name, "P-1", *desc, *date, *hours]
                .iter()
                .map(|s| {
                    if s.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::from(*s)
                    }
                })
                .collect(),
        );
    }
    SourceTable::from_rows(all)
}

pub fn sheet_names(bytes: &[u8]) -> Vec<String> {
    let wb: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec())).expect("open output");
    wb.sheet_names().to_vec()
}

/// Every cell of a sheet rendered as text.
pub fn read_sheet(bytes: &[u8], name: &str) -> Vec<Vec<String>> {
    let mut wb: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec())).expect("open output");
    let range = wb.worksheet_range(name).expect("sheet exists");
    range
        .rows()
        .map(|row| {
            row.iter()
                .map(|c| match c {
                    Data::Empty => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
