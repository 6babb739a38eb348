use chrono::{NaiveDate, Timelike};

use rearntracker::utils::date::{DateFormat, format_date, parse_date};
use rearntracker::utils::time::{ClockMode, combine, parse_instant, parse_time_of_day};

#[test]
fn parses_day_month_year_dates() {
    assert_eq!(
        parse_date("05/08/2026", DateFormat::DayMonthYear),
        NaiveDate::from_ymd_opt(2026, 8, 5)
    );
}

#[test]
fn parses_year_month_day_dates() {
    assert_eq!(
        parse_date("2026-08-05", DateFormat::YearMonthDay),
        NaiveDate::from_ymd_opt(2026, 8, 5)
    );
}

#[test]
fn rejects_non_numeric_date_tokens() {
    assert_eq!(parse_date("aa/08/2026", DateFormat::DayMonthYear), None);
    assert_eq!(parse_date("05/xx/2026", DateFormat::DayMonthYear), None);
    assert_eq!(parse_date("2026-08-ab", DateFormat::YearMonthDay), None);
}

#[test]
fn rejects_wrong_component_count() {
    assert_eq!(parse_date("05/08", DateFormat::DayMonthYear), None);
    assert_eq!(parse_date("05/08/2026/01", DateFormat::DayMonthYear), None);
    assert_eq!(parse_date("2026-08", DateFormat::YearMonthDay), None);
}

#[test]
fn rejects_impossible_calendar_dates() {
    assert_eq!(parse_date("31/02/2024", DateFormat::DayMonthYear), None);
    assert_eq!(parse_date("31/04/2025", DateFormat::DayMonthYear), None);
    assert_eq!(parse_date("2025-13-01", DateFormat::YearMonthDay), None);
}

#[test]
fn leap_day_parses_on_leap_years_only() {
    assert!(parse_date("29/02/2024", DateFormat::DayMonthYear).is_some());
    assert_eq!(parse_date("29/02/2025", DateFormat::DayMonthYear), None);
}

#[test]
fn format_date_round_trips_both_layouts() {
    let d = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    assert_eq!(format_date(d, DateFormat::DayMonthYear), "05/08/2026");
    assert_eq!(format_date(d, DateFormat::YearMonthDay), "2026-08-05");
    assert_eq!(
        parse_date(&format_date(d, DateFormat::DayMonthYear), DateFormat::DayMonthYear),
        Some(d)
    );
}

#[test]
fn twenty_four_hour_times_parse_as_is() {
    let t = parse_time_of_day("23:59", ClockMode::TwentyFourHour).unwrap();
    assert_eq!((t.hour(), t.minute()), (23, 59));

    let t = parse_time_of_day("00:00", ClockMode::TwentyFourHour).unwrap();
    assert_eq!((t.hour(), t.minute()), (0, 0));
}

#[test]
fn rejects_non_numeric_time_tokens() {
    assert_eq!(parse_time_of_day("ab:30", ClockMode::TwentyFourHour), None);
    assert_eq!(parse_time_of_day("12:cd", ClockMode::TwentyFourHour), None);
    assert_eq!(parse_time_of_day("0930", ClockMode::TwentyFourHour), None);
}

#[test]
fn rejects_out_of_range_time_components() {
    assert_eq!(parse_time_of_day("24:00", ClockMode::TwentyFourHour), None);
    assert_eq!(parse_time_of_day("12:60", ClockMode::TwentyFourHour), None);
    assert_eq!(parse_time_of_day("25:99", ClockMode::TwentyFourHour), None);
}

#[test]
fn twelve_hour_parsing_honors_the_meridiem_flag() {
    let t = parse_time_of_day("12:05", ClockMode::TwelveHour { is_am: true }).unwrap();
    assert_eq!(t.hour(), 0);

    let t = parse_time_of_day("07:00", ClockMode::TwelveHour { is_am: false }).unwrap();
    assert_eq!(t.hour(), 19);

    let t = parse_time_of_day("12:00", ClockMode::TwelveHour { is_am: false }).unwrap();
    assert_eq!(t.hour(), 12);
}

#[test]
fn combine_is_second_granular() {
    let d = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    let t = parse_time_of_day("14:30", ClockMode::TwentyFourHour).unwrap();

    let dt = combine(d, t).expect("representable local instant");
    assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2026-08-05 14:30:00");
}

#[test]
fn parse_instant_accepts_both_precisions() {
    assert!(parse_instant("2026-08-05 14:30").is_some());
    assert!(parse_instant("2026-08-05 14:30:15").is_some());
    assert!(parse_instant("garbage").is_none());
    assert!(parse_instant("2026-08-05").is_none());
}
