#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use locandine::models::event_record::EventRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Sample poster used across the suites.
pub const POSTER: &str = "15 Marzo – Comune di Test\nPresso Teatro Nuovo ore 20:30 – Sala Grande";

/// A fixed "today" (a Monday) so that year-less dates resolve predictably.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn record_dated(title: &str, date: &str) -> EventRecord {
    EventRecord {
        title: title.to_string(),
        date: date.to_string(),
        ..Default::default()
    }
}

/// CLI bound to an isolated config home and data file.
pub fn loc(home: &Path, data: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("locandine");
    cmd.env("LOCANDINE_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("LOCANDINE_LOG")
        .args(["--test", "--data"])
        .arg(data);
    cmd
}

/// Data file path inside `dir`.
pub fn data_file(dir: &Path) -> PathBuf {
    dir.join("data.json")
}

pub fn write_text(dir: &Path, name: &str, content: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, content).expect("write test file");
    p
}

pub fn read_records(path: &Path) -> Vec<EventRecord> {
    let content = fs::read_to_string(path).expect("read data file");
    serde_json::from_str(&content).expect("parse data file")
}
