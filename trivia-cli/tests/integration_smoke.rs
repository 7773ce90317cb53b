//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_seed_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("seed").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Category labels"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .arg("migrate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.args(["serve", "--in-memory", "--bind", "not-an-address"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}
