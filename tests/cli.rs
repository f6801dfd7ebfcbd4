use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cuentas(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cuentas").unwrap();
    cmd.env("CUENTAS_CLARAS_DATA_DIR", data_dir.path())
        .env_remove("CUENTAS_CLARAS_API_URL");
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    cuentas(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn config_shows_resolved_paths_and_override() {
    let dir = TempDir::new().unwrap();
    cuentas(&dir)
        .args(["--api-url", "http://127.0.0.1:9", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_string_lossy().as_ref()))
        .stdout(predicate::str::contains("http://127.0.0.1:9"))
        .stdout(predicate::str::contains("Initialized:    false"));
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    cuentas(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    cuentas(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"));
}

#[test]
fn add_without_concept_fails_before_network() {
    let dir = TempDir::new().unwrap();
    cuentas(&dir)
        .args(["--api-url", "http://127.0.0.1:9", "add", "12", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Concept is required"));

    // Nothing reached the backend, so nothing was logged
    assert!(!dir.path().join("activity.log").exists());
}

#[test]
fn add_rejects_unknown_payer() {
    let dir = TempDir::new().unwrap();
    cuentas(&dir)
        .args(["add", "12", "Pan", "--payer", "pepe"])
        .assert()
        .failure();
}

#[test]
fn log_is_empty_on_fresh_install() {
    let dir = TempDir::new().unwrap();
    cuentas(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity recorded yet."));
}

#[test]
fn stats_failure_is_logged() {
    let dir = TempDir::new().unwrap();
    // Port 9 (discard) is not listening on loopback in test environments
    cuentas(&dir)
        .args(["--api-url", "http://127.0.0.1:9", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));

    cuentas(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("FETCH FAILED"));
}
