//! The earnings engine: owns the session, validates prospective starts,
//! and exposes the sampling path.

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::core::calculator::rate::derive_rate;
use crate::core::calculator::sample::compute_sample;
use crate::models::sample::Sample;
use crate::models::session::TrackingSession;
use crate::utils::date::{self, DateFormat};
use crate::utils::time::{self, ClockMode};

/// Why a start attempt was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// The raw input did not resolve to a real calendar date/time.
    #[error("invalid date or time format")]
    InvalidFormat,

    /// The parsed start moment is strictly later than "now".
    #[error("start date/time is in the future")]
    FutureStart,
}

/// What a start attempt did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartOutcome {
    /// Session is now running. The reading as of `now` is attached so a
    /// caller polling right after start sees non-zero values without
    /// waiting for the first tick.
    Started(Sample),

    /// Gating failed (inert rate or empty date); nothing changed.
    Ignored,
}

/// Raw view-layer input for a start attempt.
#[derive(Debug, Clone)]
pub struct StartInput<'a> {
    pub wage: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub date_format: DateFormat,
    pub clock_mode: ClockMode,
}

#[derive(Debug, Default)]
pub struct EarningsEngine {
    session: TrackingSession,
}

impl EarningsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &TrackingSession {
        &self.session
    }

    /// Pre-check used to gate the start path. The time input never gates:
    /// the view always supplies a default for it.
    pub fn can_start(wage: &str, date: &str, _time: &str) -> bool {
        derive_rate(wage) > 0.0 && !date.trim().is_empty()
    }

    /// Attempt the Inert → Running transition. On any rejection the
    /// session is left completely unchanged.
    pub fn start(
        &mut self,
        input: &StartInput<'_>,
        now: DateTime<Local>,
    ) -> Result<StartOutcome, StartError> {
        if !Self::can_start(input.wage, input.date, input.time) {
            return Ok(StartOutcome::Ignored);
        }

        let start_moment = date::parse_date(input.date, input.date_format)
            .and_then(|d| time::parse_time_of_day(input.time, input.clock_mode).map(|t| (d, t)))
            .and_then(|(d, t)| time::combine(d, t))
            .ok_or(StartError::InvalidFormat)?;

        if start_moment > now {
            return Err(StartError::FutureStart);
        }

        self.session = TrackingSession {
            running: true,
            start_moment: Some(start_moment),
            hourly_rate: derive_rate(input.wage),
        };

        Ok(StartOutcome::Started(self.sample(now)))
    }

    /// Reading as of `now`. Total over every reachable session state.
    pub fn sample(&self, now: DateTime<Local>) -> Sample {
        compute_sample(&self.session, now)
    }

    /// Back to the inert state. Idempotent.
    pub fn reset(&mut self) {
        self.session = TrackingSession::default();
    }
}
