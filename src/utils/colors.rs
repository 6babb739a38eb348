/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Accrued-amount color:
/// \>0 → green
/// 0 → grey
pub fn color_for_earnings(amount: f64) -> &'static str {
    if amount > 0.0 { GREEN } else { GREY }
}

/// Grey out placeholder readings ("00h 00m", zero amounts) so a fresh
/// session reads as idle at a glance.
pub fn colorize_zeroable(value: &str, is_zero: bool) -> String {
    if is_zero {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
