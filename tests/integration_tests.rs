use predicates::str::contains;

mod common;
use common::{ret, setup_test_config, write_test_config};

#[test]
fn test_init_creates_config_file() {
    let cfg = setup_test_config("init");

    ret()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Initializing"))
        .stdout(contains("Configuration created"));

    assert!(std::path::Path::new(&cfg).exists());

    // a second init leaves the existing file alone
    ret()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_config_print_shows_fields() {
    let cfg = setup_test_config("print");

    ret().args(["--config", &cfg, "init"]).assert().success();

    ret()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("date_format"))
        .stdout(contains("clock_mode"))
        .stdout(contains("tick_interval_secs"));
}

#[test]
fn test_config_check_accepts_defaults() {
    let cfg = setup_test_config("check_ok");

    ret().args(["--config", &cfg, "init"]).assert().success();

    ret()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}

#[test]
fn test_config_check_flags_bad_values() {
    let cfg = write_test_config(
        "check_bad",
        "currency_symbol: '€'\n\
         date_format: MM-DD-YYYY\n\
         clock_mode: 24h\n\
         tick_interval_secs: 1\n\
         decimals: 6\n",
    );

    ret()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .failure()
        .stdout(contains("date_format"))
        .stderr(contains("Configuration error"));
}

#[test]
fn test_rate_outputs_hourly_and_per_second() {
    let cfg = setup_test_config("rate");

    ret()
        .args(["--config", &cfg, "rate", "25.50"])
        .assert()
        .success()
        .stdout(contains("Hourly rate"))
        .stdout(contains("25.50"))
        .stdout(contains("0.007083"));
}

#[test]
fn test_rate_warns_on_inert_wage() {
    let cfg = setup_test_config("rate_inert");

    ret()
        .args(["--config", &cfg, "rate", "abc"])
        .assert()
        .success()
        .stdout(contains("does not derive a usable rate"));

    ret()
        .args(["--config", &cfg, "rate", "0"])
        .assert()
        .success()
        .stdout(contains("does not derive a usable rate"));
}

#[test]
fn test_start_once_with_pinned_clock_reports_elapsed_and_earnings() {
    let cfg = setup_test_config("start_once");

    ret()
        .args([
            "--config",
            &cfg,
            "--now",
            "2026-08-05 14:00:00",
            "start",
            "10",
            "--date",
            "05/08/2026",
            "--time",
            "12:00",
            "--once",
        ])
        .assert()
        .success()
        .stdout(contains("Tracking earnings"))
        .stdout(contains("02h 00m"))
        .stdout(contains("20.000000"));
}

#[test]
fn test_start_future_moment_fails() {
    let cfg = setup_test_config("start_future");

    ret()
        .args([
            "--config",
            &cfg,
            "--now",
            "2026-08-05 14:00:00",
            "start",
            "10",
            "--date",
            "05/08/2026",
            "--time",
            "15:00",
            "--once",
        ])
        .assert()
        .failure()
        .stderr(contains("future"));
}

#[test]
fn test_start_malformed_date_fails() {
    let cfg = setup_test_config("start_malformed");

    ret()
        .args([
            "--config",
            &cfg,
            "--now",
            "2026-08-05 14:00:00",
            "start",
            "10",
            "--date",
            "aa/08/2026",
            "--time",
            "12:00",
            "--once",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date or time"));
}

#[test]
fn test_start_gated_wage_exits_cleanly() {
    let cfg = setup_test_config("start_gated");

    ret()
        .args(["--config", &cfg, "start", "abc", "--once"])
        .assert()
        .success()
        .stdout(contains("Nothing to track"));
}

#[test]
fn test_start_json_snapshot() {
    let cfg = setup_test_config("start_json");

    ret()
        .args([
            "--config",
            &cfg,
            "--now",
            "2026-08-05 14:00:00",
            "start",
            "10",
            "--date",
            "05/08/2026",
            "--time",
            "12:00",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"earnings\""))
        .stdout(contains("20.0"))
        .stdout(contains("\"elapsed_hours\": 2"))
        .stdout(contains("\"hourly_rate\": 10.0"));
}

#[test]
fn test_start_twelve_hour_time_with_pm() {
    let cfg = setup_test_config("start_pm");

    ret()
        .args([
            "--config",
            &cfg,
            "--now",
            "2026-08-05 20:00:00",
            "start",
            "10",
            "--date",
            "05/08/2026",
            "--time",
            "07:00",
            "--pm",
            "--once",
        ])
        .assert()
        .success()
        .stdout(contains("01h 00m"))
        .stdout(contains("10.000000"));
}

#[test]
fn test_start_twelve_hour_config_requires_meridiem_flag() {
    let cfg = write_test_config(
        "start_12h_cfg",
        "currency_symbol: '€'\n\
         date_format: DD/MM/YYYY\n\
         clock_mode: 12h\n\
         tick_interval_secs: 1\n\
         decimals: 6\n",
    );

    ret()
        .args([
            "--config",
            &cfg,
            "--now",
            "2026-08-05 20:00:00",
            "start",
            "10",
            "--date",
            "05/08/2026",
            "--time",
            "07:00",
            "--once",
        ])
        .assert()
        .failure()
        .stderr(contains("12-hour"));
}

#[test]
fn test_start_defaults_resolve_from_pinned_clock() {
    let cfg = setup_test_config("start_defaults");

    // date and time omitted: today at the current minute, zero elapsed
    ret()
        .args([
            "--config",
            &cfg,
            "--now",
            "2026-08-05 14:00:00",
            "start",
            "12",
            "--once",
        ])
        .assert()
        .success()
        .stdout(contains("05/08/2026 14:00"))
        .stdout(contains("0.000000"));
}

#[test]
fn test_start_live_run_stops_after_deadline() {
    let cfg = setup_test_config("start_live");

    ret()
        .args(["--config", &cfg, "start", "5", "--for", "1"])
        .assert()
        .success()
        .stdout(contains("Tracking earnings"))
        .stdout(contains("Tracking stopped"));
}
