#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ath() -> Command {
    cargo_bin_cmd!("athletica")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_athletica.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    ath()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// `add` with the common flags; `extra` is appended as-is.
pub fn add_event(db_path: &str, title: &str, start: &str, end: &str, extra: &[&str]) {
    ath()
        .args(["--db", db_path, "add", title, "--start", start, "--end", end])
        .args(extra)
        .assert()
        .success();
}

/// Stdout of `list` with the given filter flags.
pub fn list_stdout(db_path: &str, filters: &[&str]) -> String {
    let out = ath()
        .args(["--db", db_path, "list"])
        .args(filters)
        .output()
        .expect("failed to run list");
    assert!(out.status.success());
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// Lines of the event table (those starting with an id).
pub fn event_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}
