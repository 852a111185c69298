// src/export/mod.rs

pub(crate) mod fs_utils;
pub mod json_csv;
pub mod presentation;
pub mod xlsx;

pub use json_csv::{summary_to_csv, summary_to_json};
pub use xlsx::assemble;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Output formats of the `summary` command.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SummaryFormat {
    #[default]
    Table,
    Json,
    Csv,
}
