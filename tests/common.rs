#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ret() -> Command {
    cargo_bin_cmd!("rearntracker")
}

/// Create a unique test config path inside the system temp dir and remove
/// any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rearntracker.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write a config file with the given YAML body, replacing any existing one
pub fn write_test_config(name: &str, body: &str) -> String {
    let cfg_path = setup_test_config(name);
    fs::write(&cfg_path, body).expect("write test config");
    cfg_path
}
