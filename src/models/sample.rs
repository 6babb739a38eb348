//! Point-in-time reading of a session: elapsed breakdown plus accrued
//! earnings. Recomputed on demand, never stored.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Sample {
    pub elapsed_days: i64,
    pub elapsed_hours: i64,
    pub elapsed_minutes: i64,
    /// Total whole seconds since the start moment; the earnings basis.
    pub elapsed_seconds: i64,
    pub earnings: f64,
}
