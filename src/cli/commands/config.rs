use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::path::expand_tilde;

/// Manage the configuration file: print, check or edit.
pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = match &cli.config {
            Some(custom) => expand_tilde(custom),
            None => Config::config_file(),
        };

        if *print_config {
            return ConfigLogic::print(&path);
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                messages::success("Configuration is valid");
                return Ok(());
            }
            for p in &problems {
                messages::warning(p);
            }
            return Err(AppError::Config(format!(
                "{} invalid field(s)",
                problems.len()
            )));
        }

        if *edit_config {
            return ConfigLogic::edit(&path, editor);
        }

        messages::info("Use --print, --check or --edit");
    }

    Ok(())
}
