//! rEarnTracker library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cli, cfg),
        Commands::Rate { .. } => cli::commands::rate::handle(&cli.command, cfg),
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; --config overrides the platform default path.
    let cfg = match &cli.config {
        Some(custom) => Config::load_from(&utils::path::expand_tilde(custom))?,
        None => Config::load_from(&Config::config_file())?,
    };

    dispatch(&cli, &cfg)
}
