//! rTimeweaver library root.
//! Exposes the CLI parser, the high-level run() function and the
//! consolidation engine (`core::Core::convert`) for embedding callers.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::config_path;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, &config_path(cli))
        }
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (default se il file non esiste);
    // init la riscrive, quindi non deve dipendere da un file magari rotto
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(Some(&config_path(&cli)))?,
    };

    // 3️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
