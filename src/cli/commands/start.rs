use std::time::Duration;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::sample::compute_sample;
use crate::core::engine::{EarningsEngine, StartError, StartInput, StartOutcome};
use crate::core::ticker::Ticker;
use crate::errors::{AppError, AppResult};
use crate::ui::{display, messages};
use crate::utils::clock::{AppClock, Clock};
use crate::utils::date::{self, DateFormat};
use crate::utils::time::{self, ClockMode};

/// Start tracking accrued earnings and drive the live display.
pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        wage,
        date,
        time: time_arg,
        am,
        pm,
        once,
        json,
        run_for,
    } = cmd
    {
        //
        // 1. Resolve the clock first: argv defaults derive from it.
        //
        let clock = match &cli.now {
            Some(raw) => {
                let pinned =
                    time::parse_instant(raw).ok_or_else(|| AppError::InvalidTime(raw.clone()))?;
                AppClock::fixed(pinned)
            }
            None => AppClock::system(),
        };
        let now = clock.now();

        //
        // 2. Resolve entry layouts from config and meridiem flags.
        //
        let date_format = DateFormat::from_code(&cfg.date_format).ok_or_else(|| {
            AppError::Config(format!("unknown date_format '{}'", cfg.date_format))
        })?;
        let clock_mode = resolve_clock_mode(cfg, *am, *pm)?;

        //
        // 3. Defaults mirror the entry form: today, current minute.
        //
        let date_input = match date {
            Some(d) => d.clone(),
            None => date::format_date(now.date_naive(), date_format),
        };
        let time_input = match time_arg {
            Some(t) => t.clone(),
            None => now.format("%H:%M").to_string(),
        };

        //
        // 4. Attempt the start transition.
        //
        let mut engine = EarningsEngine::new();
        let input = StartInput {
            wage,
            date: &date_input,
            time: &time_input,
            date_format,
            clock_mode,
        };

        let initial = match engine.start(&input, now) {
            Ok(StartOutcome::Started(sample)) => sample,
            Ok(StartOutcome::Ignored) => {
                messages::warning(format!(
                    "Nothing to track: '{}' does not derive a positive hourly rate",
                    wage
                ));
                return Ok(());
            }
            Err(StartError::InvalidFormat) => {
                return Err(AppError::InvalidFormat(format!(
                    "'{} {}' (expected {} and HH:MM)",
                    date_input, time_input, cfg.date_format
                )));
            }
            Err(StartError::FutureStart) => {
                return Err(AppError::FutureStart(format!(
                    "{} {}",
                    date_input, time_input
                )));
            }
        };

        let session = *engine.session();

        //
        // 5. One-shot modes print the initial reading and leave.
        //
        if *json {
            display::print_snapshot_json(&session, &initial)?;
            engine.reset();
            return Ok(());
        }
        if *once {
            display::print_started(&session, cfg);
            display::print_snapshot(&initial, cfg);
            engine.reset();
            return Ok(());
        }

        //
        // 6. Live mode: one tick per interval until Enter (or --for).
        //
        display::print_started(&session, cfg);
        if run_for.is_none() {
            messages::info("Press Enter to stop tracking");
        }
        display::print_live_line(&initial, cfg);

        // The tick thread owns its own copy of the session, which is
        // immutable while Running; start/reset stay on this thread.
        let tick_cfg = cfg.clone();
        let interval = Duration::from_secs(cfg.tick_interval_secs.max(1));
        let mut ticker = Ticker::spawn(interval, move || {
            let sample = compute_sample(&session, clock.now());
            display::print_live_line(&sample, &tick_cfg);
        });

        match run_for {
            Some(secs) => std::thread::sleep(Duration::from_secs(*secs)),
            None => {
                let mut line = String::new();
                let _ = std::io::stdin().read_line(&mut line);
            }
        }

        ticker.stop();

        let last = engine.sample(clock.now());
        engine.reset();
        display::print_summary(&last, cfg);
    }

    Ok(())
}

fn resolve_clock_mode(cfg: &Config, am: bool, pm: bool) -> AppResult<ClockMode> {
    if am || pm {
        return Ok(ClockMode::TwelveHour { is_am: am });
    }

    match cfg.clock_mode.trim() {
        "24h" => Ok(ClockMode::TwentyFourHour),
        "12h" => Err(AppError::InvalidTime(
            "12-hour clock mode requires --am or --pm".into(),
        )),
        other => Err(AppError::Config(format!("unknown clock_mode '{}'", other))),
    }
}
