//! Time-of-day parsing: HH:MM on the 24-hour clock or the
//! meridiem-disambiguated 12-hour clock, plus date+time combination.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime};

/// How an HH:MM string should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    TwentyFourHour,
    /// 12-hour clock; `is_am` disambiguates the half of the day.
    TwelveHour { is_am: bool },
}

/// Map a 12-hour clock reading onto the 24-hour scale.
/// 12 AM is midnight, hours below 12 PM gain twelve, 12 PM stays noon.
pub fn to_24h(hour: u32, is_am: bool) -> u32 {
    match (hour, is_am) {
        (12, true) => 0,
        (h, false) if h < 12 => h + 12,
        (h, _) => h,
    }
}

/// Parse an `HH:MM` string. Returns None for non-numeric tokens or
/// components that do not name a real time of day (e.g. "25:99").
pub fn parse_time_of_day(s: &str, mode: ClockMode) -> Option<NaiveTime> {
    let (h, m) = s.trim().split_once(':')?;
    let hour: u32 = h.trim().parse().ok()?;
    let minute: u32 = m.trim().parse().ok()?;

    let hour = match mode {
        ClockMode::TwentyFourHour => hour,
        ClockMode::TwelveHour { is_am } => to_24h(hour, is_am),
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Merge a calendar date and a time of day into one local instant at
/// second granularity. A combination the local timezone cannot represent
/// unambiguously (DST gaps and overlaps) counts as invalid.
pub fn combine(date: NaiveDate, time: NaiveTime) -> Option<DateTime<Local>> {
    match date.and_time(time).and_local_timezone(Local) {
        LocalResult::Single(dt) => Some(dt),
        _ => None,
    }
}

/// Parse the hidden `--now` override: `YYYY-MM-DD HH:MM` with optional
/// `:SS` seconds.
pub fn parse_instant(s: &str) -> Option<DateTime<Local>> {
    let raw = s.trim();
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .ok()?;

    match naive.and_local_timezone(Local) {
        LocalResult::Single(dt) => Some(dt),
        _ => None,
    }
}
