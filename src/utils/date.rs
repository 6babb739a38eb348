//! Date parsing for the two supported entry layouts.

use chrono::NaiveDate;

/// Supported date entry layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `DD/MM/YYYY`
    DayMonthYear,
    /// `YYYY-MM-DD`
    YearMonthDay,
}

impl DateFormat {
    /// Resolve the layout code used in the configuration file.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "DD/MM/YYYY" => Some(Self::DayMonthYear),
            "YYYY-MM-DD" => Some(Self::YearMonthDay),
            _ => None,
        }
    }

    pub fn separator(&self) -> char {
        match self {
            Self::DayMonthYear => '/',
            Self::YearMonthDay => '-',
        }
    }
}

/// Parse a date string in the given layout.
///
/// Splits on the layout separator and parses three integer components.
/// Returns None when a token is non-numeric, the arity is wrong, or the
/// components do not name a real calendar date (e.g. 31/02/2024).
pub fn parse_date(s: &str, format: DateFormat) -> Option<NaiveDate> {
    let mut parts = s.trim().split(format.separator());
    let (a, b, c) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let (day, month, year) = match format {
        DateFormat::DayMonthYear => (a, b, c),
        DateFormat::YearMonthDay => (c, b, a),
    };

    let day: u32 = day.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a date in the given entry layout (used for argv defaults).
pub fn format_date(d: NaiveDate, format: DateFormat) -> String {
    match format {
        DateFormat::DayMonthYear => d.format("%d/%m/%Y").to_string(),
        DateFormat::YearMonthDay => d.format("%Y-%m-%d").to_string(),
    }
}
