//! Unified application error type.
//! Every stage of a conversion (source reading, engine, export, cli) returns
//! AppError, so a failed request always surfaces as one structured value and
//! never as a partially written workbook.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Request validation
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Source parsing errors
    // ---------------------------
    #[error("Unreadable source workbook: {0}")]
    SourceRead(String),

    #[error("Missing column in header row: '{0}'")]
    Schema(String),

    #[error("Invalid date format at row {row}: '{value}'")]
    DateFormat { value: String, row: usize },

    #[error("Invalid duration format at row {row}: '{value}'")]
    Format { value: String, row: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Stable short code for the error family, for callers that map
    /// failures onto their own status scheme.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Io(_) => "io",
            AppError::Validation(_) => "validation",
            AppError::SourceRead(_) => "source_read",
            AppError::Schema(_) => "schema",
            AppError::DateFormat { .. } => "date_format",
            AppError::Format { .. } => "format",
            AppError::Config(_) | AppError::ConfigLoad | AppError::ConfigSave => "config",
            AppError::Export(_) => "export",
        }
    }

    /// Offending raw cell value, when the failure came from one.
    pub fn raw_value(&self) -> Option<&str> {
        match self {
            AppError::DateFormat { value, .. } | AppError::Format { value, .. } => {
                Some(value.as_str())
            }
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
