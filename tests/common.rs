#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cat() -> Command {
    let mut cmd = cargo_bin_cmd!("catlog");
    cmd.env_remove("CATLOG_DB");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_catlog.sqlite", name));
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
    cat()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// `catlog add <subject> <category> <content> --date <date> --time <time>`
pub fn add_event(db_path: &str, subject: &str, category: &str, content: &str, date: &str, time: &str) {
    cat()
        .args([
            "--db", db_path, "add", subject, category, content, "--date", date, "--time", time,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    add_event(db_path, "Mimi", "feeding", "0.5", "2024-01-01", "08:00");
    add_event(db_path, "Mimi", "feeding", "1", "2024-01-01", "18:30");
    add_event(db_path, "Mimi", "weight", "4.2", "2024-01-01", "09:00");
    add_event(db_path, "Coco", "litter", "normal", "2024-01-01", "10:00");
    add_event(db_path, "Mimi", "feeding", "2", "2024-01-02", "08:00");
}

/// Raw cells of every data row of one sheet, in store order.
pub fn sheet_rows(db_path: &str, sheet: &str) -> Vec<Vec<String>> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare("SELECT cells FROM sheet_rows WHERE sheet = ?1 ORDER BY id")
        .expect("prepare");
    let rows: Vec<Vec<String>> = stmt
        .query_map([sheet], |row| row.get::<_, String>(0))
        .expect("query")
        .map(|cells| serde_json::from_str(&cells.expect("row")).expect("json cells"))
        .collect();
    rows
}
