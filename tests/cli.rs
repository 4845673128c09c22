//! End-to-end runs of the headless binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn funcplot() -> Command {
    Command::cargo_bin("funcplot").unwrap()
}

#[test]
fn plots_polynomial_and_exits() {
    funcplot()
        .arg("--headless")
        .write_stdin("1\n1 2 3\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plotted 1 + 2x + 3x^2"))
        .stdout(predicate::str::contains("9. Exit"));
}

#[test]
fn bad_choice_redisplays_menu() {
    funcplot()
        .arg("--headless")
        .write_stdin("seven\n42\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: Invalid input: 'seven' is not a menu number"))
        .stdout(predicate::str::contains("choose a number between 1 and 9"));
}

#[test]
fn save_and_reload_across_runs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.curves");
    let script = format!("3\n1 2\n7\n{}\n9\n", path.display());

    funcplot()
        .args(["--headless", "--points", "4"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 curves"));

    let saved = fs::read_to_string(&path).unwrap();
    assert_eq!(saved.trim_end(), "-10,0.0009765625 -5,0.03125 0,1 5,32 10,1024");

    funcplot()
        .arg("--headless")
        .arg("--load")
        .arg(&path)
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 curves"));
}

#[test]
fn strict_domain_reports_log_failure() {
    funcplot()
        .args(["--headless", "--strict-domain"])
        .write_stdin("4\n1 10 0\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("logarithm is undefined"));
}

#[test]
fn missing_startup_file_fails() {
    funcplot()
        .args(["--headless", "--load", "/no/such/file.curves"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resource unavailable"));
}

#[test]
fn zero_points_rejected_by_cli() {
    funcplot()
        .args(["--headless", "--points", "0"])
        .assert()
        .failure();
}

#[test]
fn log_file_honours_level_filter() {
    let dir = TempDir::new().unwrap();
    let debug_log = dir.path().join("debug.log");
    let warn_log = dir.path().join("warn.log");

    funcplot()
        .args(["--headless", "--log"])
        .arg(&debug_log)
        .env_remove("RUST_LOG")
        .write_stdin("6\n9\n")
        .assert()
        .success();
    let debug = fs::read_to_string(&debug_log).unwrap();
    assert!(debug.contains("Starting Funcplot"));
    assert!(debug.contains("Queued Clear"));

    funcplot()
        .args(["--headless", "--log"])
        .arg(&warn_log)
        .env("RUST_LOG", "warn")
        .write_stdin("x\n9\n")
        .assert()
        .success();
    let warn = fs::read_to_string(&warn_log).unwrap();
    assert!(!warn.contains("Starting Funcplot"));
    assert!(warn.contains("is not a menu number"));
}
