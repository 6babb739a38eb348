use clap::{Parser, Subcommand};

/// Command-line interface definition for rEarnTracker
/// CLI application to watch accrued earnings grow from an hourly wage
#[derive(Parser)]
#[command(
    name = "rearntracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple earnings tracking CLI: watch accrued pay grow in real time from an hourly wage",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Pin the current instant for deterministic runs
    #[arg(global = true, long = "now", value_name = "YYYY-MM-DD HH:MM[:SS]", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid values")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the hourly and per-second rate derived from a wage entry
    Rate {
        /// Hourly wage (e.g. 25.50)
        wage: String,
    },

    /// Start tracking accrued earnings from a given moment
    Start {
        /// Hourly wage (e.g. 25.50)
        wage: String,

        /// Start date (layout from config; defaults to today)
        #[arg(long = "date", help = "Start date (layout from config, default: today)")]
        date: Option<String>,

        /// Start time (HH:MM; defaults to the current minute)
        #[arg(long = "time", help = "Start time HH:MM (default: current minute)")]
        time: Option<String>,

        /// Interpret --time on the 12-hour clock, ante meridiem
        #[arg(long = "am", conflicts_with = "pm")]
        am: bool,

        /// Interpret --time on the 12-hour clock, post meridiem
        #[arg(long = "pm")]
        pm: bool,

        /// Print a single reading and exit instead of ticking
        #[arg(long = "once")]
        once: bool,

        /// Emit the reading as JSON (implies --once)
        #[arg(long = "json")]
        json: bool,

        /// Stop automatically after this many seconds of live updates
        #[arg(long = "for", value_name = "SECS")]
        run_for: Option<u64>,
    },
}
