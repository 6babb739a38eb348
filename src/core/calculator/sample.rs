//! Elapsed/earnings computation for one instant.

use chrono::{DateTime, Local};

use crate::core::calculator::rate::per_second_rate;
use crate::models::sample::Sample;
use crate::models::session::TrackingSession;

const MILLIS_PER_DAY: i64 = 86_400_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Compute a reading for `session` as of `now`. Pure: inert sessions read
/// all zeros, running sessions read the breakdown of `now - start_moment`.
///
/// Earnings always come from the total elapsed seconds, never from the
/// rounded day/hour/minute breakdown.
pub fn compute_sample(session: &TrackingSession, now: DateTime<Local>) -> Sample {
    let Some(start) = session.start_moment.filter(|_| session.running) else {
        return Sample::default();
    };

    let elapsed_millis = (now - start).num_milliseconds().max(0);
    let elapsed_seconds = elapsed_millis / 1000;

    Sample {
        elapsed_days: elapsed_millis / MILLIS_PER_DAY,
        elapsed_hours: (elapsed_millis % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
        elapsed_minutes: (elapsed_millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
        elapsed_seconds,
        earnings: elapsed_seconds as f64 * per_second_rate(session.hourly_rate),
    }
}
