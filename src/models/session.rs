//! The single in-memory tracking session.

use chrono::{DateTime, Local};

/// Ephemeral tracking state. Exactly one session exists at a time and it
/// is owned by the engine; the view layer only goes through start/reset.
///
/// The default value is the inert state: not running, no start moment,
/// zero rate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackingSession {
    pub running: bool,
    pub start_moment: Option<DateTime<Local>>,
    pub hourly_rate: f64,
}

impl TrackingSession {
    pub fn is_running(&self) -> bool {
        self.running
    }
}
