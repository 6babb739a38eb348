use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with default values
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = match &cli.config {
        Some(custom) => expand_tilde(custom),
        None => Config::config_file(),
    };

    println!("⚙️  Initializing rEarnTracker…");

    if Config::init_at(&path)? {
        println!("📄 Config file : {}", path.display());
        messages::success(format!("Configuration created at {}", path.display()));
    } else {
        messages::info(format!(
            "Configuration already present at {}",
            path.display()
        ));
    }

    Ok(())
}
