use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::rate::{derive_rate, per_second_rate};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting::format_money;

/// Show the hourly and per-second rate derived from a wage entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { wage } = cmd {
        let hourly = derive_rate(wage);

        if hourly <= 0.0 {
            messages::warning(format!(
                "'{}' does not derive a usable rate; tracking would not start",
                wage
            ));
            return Ok(());
        }

        println!(
            "Hourly rate    : {}",
            format_money(hourly, &cfg.currency_symbol, 2)
        );
        println!(
            "Per-second rate: {}",
            format_money(per_second_rate(hourly), &cfg.currency_symbol, cfg.decimals)
        );
    }

    Ok(())
}
