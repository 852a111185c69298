use crate::cli::config_path;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, success, warning};

/// Handle the `init` command
///
/// Writes the configuration file with default values. An existing file is
/// left untouched unless `--force` is given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = config_path(cli);

    if path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    info("Initializing rTimeweaver…");
    Config::default().save(&path)?;

    detail("Config file", path.display());
    success("rTimeweaver initialization completed!");
    Ok(())
}
