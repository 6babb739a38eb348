//! Terminal rendering for the tracker: start banner, live line, snapshot
//! and final summary. The engine emits raw values only; every display
//! string is produced here.

use std::io::{self, Write};

use ansi_term::Colour;
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::Config;
use crate::core::calculator::rate::per_second_rate;
use crate::errors::{AppError, AppResult};
use crate::models::sample::Sample;
use crate::models::session::TrackingSession;
use crate::ui::messages;
use crate::utils::colors;
use crate::utils::date::{DateFormat, format_date};
use crate::utils::formatting::{
    format_elapsed, format_elapsed_precise, format_money, pad_right, visible_width,
};

/// Banner printed once the session is running.
pub fn print_started(session: &TrackingSession, cfg: &Config) {
    let Some(start) = session.start_moment else {
        return;
    };

    println!("💰 Tracking earnings…");

    let rows = [
        ("Started", format_start_moment(start, cfg)),
        (
            "Hourly rate",
            format_money(session.hourly_rate, &cfg.currency_symbol, 2),
        ),
        (
            "Per second",
            format_money(
                per_second_rate(session.hourly_rate),
                &cfg.currency_symbol,
                cfg.decimals,
            ),
        ),
    ];

    print_rows(&rows);
}

/// One-shot reading (`start --once`).
pub fn print_snapshot(sample: &Sample, cfg: &Config) {
    let rows = [
        ("Elapsed", elapsed_cell(sample)),
        ("Earned", earnings_cell(sample, cfg)),
    ];
    print_rows(&rows);
}

/// In-place line repainted on every tick.
pub fn print_live_line(sample: &Sample, cfg: &Config) {
    print!(
        "\r⏱  {}   {}   ",
        elapsed_cell(sample),
        earnings_cell(sample, cfg)
    );
    let _ = io::stdout().flush();
}

/// Final block once the live session is torn down.
pub fn print_summary(sample: &Sample, cfg: &Config) {
    println!();
    messages::success("Tracking stopped");

    let rows = [
        (
            "Elapsed",
            format_elapsed(
                sample.elapsed_days,
                sample.elapsed_hours,
                sample.elapsed_minutes,
            ),
        ),
        ("Total earned", earnings_cell(sample, cfg)),
    ];
    print_rows(&rows);
}

#[derive(Serialize)]
struct Snapshot<'a> {
    start_moment: DateTime<Local>,
    hourly_rate: f64,
    sample: &'a Sample,
}

/// Machine-readable one-shot reading (`start --once --json`).
pub fn print_snapshot_json(session: &TrackingSession, sample: &Sample) -> AppResult<()> {
    let Some(start_moment) = session.start_moment else {
        return Ok(());
    };

    let snapshot = Snapshot {
        start_moment,
        hourly_rate: session.hourly_rate,
        sample,
    };

    let out = serde_json::to_string_pretty(&snapshot).map_err(|e| AppError::Other(e.to_string()))?;
    println!("{}", out);
    Ok(())
}

fn format_start_moment(start: DateTime<Local>, cfg: &Config) -> String {
    let date_part = match DateFormat::from_code(&cfg.date_format) {
        Some(f) => format_date(start.date_naive(), f),
        None => start.format("%Y-%m-%d").to_string(),
    };
    format!("{} {}", date_part, start.format("%H:%M"))
}

fn elapsed_cell(sample: &Sample) -> String {
    let rendered = format_elapsed_precise(
        sample.elapsed_days,
        sample.elapsed_hours,
        sample.elapsed_minutes,
        sample.elapsed_seconds % 60,
    );
    colors::colorize_zeroable(&rendered, sample.elapsed_seconds == 0)
}

fn earnings_cell(sample: &Sample, cfg: &Config) -> String {
    let money = format_money(sample.earnings, &cfg.currency_symbol, cfg.decimals);
    if sample.earnings > 0.0 {
        Colour::Green.bold().paint(money).to_string()
    } else {
        format!("{}{}{}", colors::GREY, money, colors::RESET)
    }
}

/// Aligned label/value rows; widths are measured without ANSI sequences.
fn print_rows(rows: &[(&str, String)]) {
    let label_w = rows.iter().map(|(l, _)| visible_width(l)).max().unwrap_or(0);
    for (label, value) in rows {
        println!("   {} : {}", pad_right(label, label_w), value);
    }
}
