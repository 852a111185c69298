pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::utils::path::expand_tilde;
use parser::Cli;
use std::path::PathBuf;

/// Configuration file in use: `--config` if given, the standard one otherwise.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file)
}
