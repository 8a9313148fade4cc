#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn hor() -> Command {
    cargo_bin_cmd!("horario")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_horario.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

/// Initialize a store and record one full workday, useful for many tests
pub fn init_db_with_data(db_path: &str, worker: &str) {
    hor()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    hor()
        .args([
            "--db", db_path, "set", "2025-03", "5", "-w", worker, "--in", "09:00", "--out",
            "17:30",
        ])
        .assert()
        .success();
}
