use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::utils::date::DateFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Date entry layout: "DD/MM/YYYY" or "YYYY-MM-DD"
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// "24h", or "12h" (12h requires --am/--pm on start)
    #[serde(default = "default_clock_mode")]
    pub clock_mode: String,

    #[serde(default = "default_tick_interval")]
    pub tick_interval_secs: u64,

    /// Decimal digits shown for accrued amounts
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_currency_symbol() -> String {
    "€".to_string()
}
fn default_date_format() -> String {
    "DD/MM/YYYY".to_string()
}
fn default_clock_mode() -> String {
    "24h".to_string()
}
fn default_tick_interval() -> u64 {
    1
}
fn default_decimals() -> usize {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
            clock_mode: default_clock_mode(),
            tick_interval_secs: default_tick_interval(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rearntracker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rearntracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rearntracker.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does
    /// not exist yet.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    /// Write a default configuration file at `path` unless one is already
    /// present. Returns true when a new file was written.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        if path.exists() {
            return Ok(false);
        }

        let content = serde_yaml::to_string(&Self::default()).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, content)?;
        Ok(true)
    }

    /// Validate field values; returns one message per problem found.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if DateFormat::from_code(&self.date_format).is_none() {
            problems.push(format!(
                "date_format '{}' is not supported (use DD/MM/YYYY or YYYY-MM-DD)",
                self.date_format
            ));
        }

        if !matches!(self.clock_mode.trim(), "24h" | "12h") {
            problems.push(format!(
                "clock_mode '{}' is not supported (use 24h or 12h)",
                self.clock_mode
            ));
        }

        if self.tick_interval_secs == 0 {
            problems.push("tick_interval_secs must be at least 1".to_string());
        }

        if self.currency_symbol.trim().is_empty() {
            problems.push("currency_symbol must not be empty".to_string());
        }

        problems
    }
}
