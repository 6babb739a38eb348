//! Formatting utilities for terminal output: money, elapsed time, padding.

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// `€ 12.345678` with the configured number of decimals.
pub fn format_money(amount: f64, symbol: &str, decimals: usize) -> String {
    format!("{symbol} {amount:.decimals$}")
}

/// `3d 02h 15m`, with the day component omitted while it is zero.
pub fn format_elapsed(days: i64, hours: i64, minutes: i64) -> String {
    if days > 0 {
        format!("{}d {:02}h {:02}m", days, hours, minutes)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}

/// Elapsed rendering for the live line, down to the second.
pub fn format_elapsed_precise(days: i64, hours: i64, minutes: i64, seconds: i64) -> String {
    format!("{} {:02}s", format_elapsed(days, hours, minutes), seconds)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Printable width of a string once ANSI escape sequences are removed.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

pub fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}
