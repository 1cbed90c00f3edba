#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use cronograma::db::repository::SqliteRepository;
use cronograma::models::entry::{Entry, EntryDraft};
use cronograma::state::ScheduleState;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so no real
/// configuration is read or written.
pub fn cron() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("cronograma_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("cronograma");
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_cronograma.sqlite", name));
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

/// Initialize DB with the initial calendar
pub fn init_seeded(db_path: &str) {
    cron()
        .args(["--db", db_path, "--test", "init", "--seed"])
        .assert()
        .success();
}

pub fn entry(id: i64, activity: &str, category: &str, start: &str, end: &str) -> Entry {
    Entry {
        id,
        month: "Maio".to_string(),
        activity: activity.to_string(),
        category: category.to_string(),
        start: start.to_string(),
        end: end.to_string(),
    }
}

/// In-memory schedule with six filler rows followed by "Acelera", so that
/// "Acelera" gets id 7.
pub fn schedule_with_acelera() -> ScheduleState<SqliteRepository> {
    let mut state = ScheduleState::new(SqliteRepository::in_memory().expect("in-memory db"));
    for i in 1..=6 {
        state
            .add(&EntryDraft::new(
                "Janeiro",
                format!("Filler {i}"),
                "Planejamento",
                "2025-01-01",
                "2025-01-31",
            ))
            .expect("add filler");
    }
    let acelera = state
        .add(&EntryDraft::new(
            "Maio",
            "Acelera",
            "Inovação",
            "2025-05-01",
            "2025-05-31",
        ))
        .expect("add acelera");
    assert_eq!(acelera.id, 7);
    state
}
