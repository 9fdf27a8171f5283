#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const PASSWORD: &str = "galactic2025";

/// Private HOME so a developer's own config never leaks into a test.
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("hospitrack_home_{name}"));
    fs::create_dir_all(&path).ok();
    path
}

/// Binary with HOME pointed at a per-test directory.
pub fn hs(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("hospitrack");
    cmd.env("HOME", test_home(name));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_hospitrack.sqlite"));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the state DB and log in.
pub fn init_logged_in(name: &str, db_path: &str) {
    hs(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    hs(name)
        .args(["--db", db_path, "login", "--password", PASSWORD])
        .assert()
        .success();
}
