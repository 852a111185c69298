use crate::config::DedupScope;
use crate::export::SummaryFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeweaver
/// CLI application to turn raw timesheet exports into monthly calendars
#[derive(Parser)]
#[command(
    name = "rtimeweaver",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a raw multi-employee timesheet export into one monthly calendar sheet per employee",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Convert a raw timesheet workbook into the monthly report workbook
    Convert {
        /// Source workbook (xlsx, xls or ods; first sheet only)
        input: String,

        #[arg(long, short = 'o', value_name = "FILE", help = "Output xlsx file")]
        output: String,

        #[arg(long, help = "Target month (1-12), default: month of the first row")]
        month: Option<u32>,

        #[arg(long, help = "Target year (2000-2050), default: year of the first row")]
        year: Option<i32>,

        #[arg(long, value_enum, help = "Task description dedup scope (overrides config)")]
        dedup: Option<DedupScope>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print per-employee monthly totals without writing a workbook
    Summary {
        /// Source workbook (xlsx, xls or ods; first sheet only)
        input: String,

        #[arg(long, help = "Target month (1-12), default: month of the first row")]
        month: Option<u32>,

        #[arg(long, help = "Target year (2000-2050), default: year of the first row")]
        year: Option<i32>,

        #[arg(long, value_enum, default_value = "table")]
        format: SummaryFormat,
    },
}
