// src/export/presentation.rs

use crate::models::DayRecord;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern};

const HEADER_FILL: Color = Color::RGB(0x3366FF);
const WEEKEND_FILL: Color = Color::RGB(0x008000);
const LEAVE_FILL: Color = Color::RGB(0x00CCFF);

/// Visual category of a sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Weekend,
    Leave,
    Plain,
}

/// Weekend wins over everything, then weekdays with nothing logged are leave.
pub fn classify(day: &DayRecord) -> RowKind {
    if day.is_weekend {
        RowKind::Weekend
    } else if !day.has_tasks() {
        RowKind::Leave
    } else {
        RowKind::Plain
    }
}

/// Text for the description column: leave days show `leave_label`.
pub fn description_text<'a>(day: &'a DayRecord, leave_label: &'a str) -> &'a str {
    match classify(day) {
        RowKind::Leave => leave_label,
        _ => &day.description,
    }
}

/// Cell format for a row category; `num_format` is set for date cells.
pub fn format_for(kind: RowKind, num_format: Option<&str>) -> Format {
    let mut fmt = Format::new()
        .set_border(FormatBorder::Medium)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();

    let fill = match kind {
        RowKind::Header => Some(HEADER_FILL),
        RowKind::Weekend => Some(WEEKEND_FILL),
        RowKind::Leave => Some(LEAVE_FILL),
        RowKind::Plain => None,
    };

    if let Some(color) = fill {
        fmt = fmt
            .set_background_color(color)
            .set_pattern(FormatPattern::Solid);
    }

    if kind == RowKind::Header {
        fmt = fmt.set_bold();
    }

    if let Some(nf) = num_format {
        fmt = fmt.set_num_format(nf);
    }

    fmt
}
