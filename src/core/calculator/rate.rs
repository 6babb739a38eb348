//! Wage rate derivation.

/// Parse an hourly wage entry. Non-numeric or non-positive input derives
/// the inert 0 rate, which keeps tracking from starting.
pub fn derive_rate(wage_input: &str) -> f64 {
    match wage_input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Currency units accrued per elapsed second.
pub fn per_second_rate(hourly: f64) -> f64 {
    hourly / 3600.0
}
