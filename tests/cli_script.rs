mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;
use shiftbook::ledger::EntryStore;

fn shell(base: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("shiftbook_cli").unwrap();
    cmd.env("SHIFTBOOK_CLI_SCRIPT", "1")
        .env("SHIFTBOOK_HOME", base)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn script_mode_records_and_totals_shifts() {
    let (store, _, base) = common::setup_test_env();
    let output = shell(&base)
        .write_stdin("add Acme 7.5 1200\nadd \"Beta Corp\" 1.5 1200\ntotals\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total hours : 9.00"))
        .stdout(predicate::str::contains("Total income: 10800 JPY"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let recorded = Regex::new(r"Recorded Acme on \d{4}-\d{2}-\d{2}: 7\.50h x 1200 = 9000 JPY \(id [0-9a-f]{8}\)")
        .unwrap();
    assert!(recorded.is_match(&stdout), "unexpected output: {stdout}");

    let entries = store.load().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].company_name, "Beta Corp");
}

#[test]
fn script_mode_rejects_bad_numbers_without_writing() {
    let (store, _, base) = common::setup_test_env();
    shell(&base)
        .write_stdin("add Acme lots 1200\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hours: `lots` is not a number"));
    assert!(!store.path().exists());
}

#[test]
fn remove_by_index_updates_file() {
    let (store, _, base) = common::setup_test_env();
    shell(&base)
        .write_stdin("add Acme 1 100\nadd Beta 2 100\nremove #1\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Acme"))
        .stdout(predicate::str::contains("Entries (1)"));

    let entries = store.load().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].company_name, "Beta");
}

#[test]
fn totals_json_reports_camel_case_fields() {
    let (_, _, base) = common::setup_test_env();
    shell(&base)
        .write_stdin("add Acme 2 1000\ntotals --json\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalHours\": 2.0"))
        .stdout(predicate::str::contains("\"totalIncome\": 2000.0"))
        .stdout(predicate::str::contains("\"currency\": \"JPY\""));
}

#[test]
fn calendar_shows_requested_month() {
    let (_, _, base) = common::setup_test_env();
    shell(&base)
        .write_stdin("calendar 2024-02\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024"))
        .stdout(predicate::str::contains("No entries this month."));
}

#[test]
fn unknown_command_suggests_closest_match() {
    let (_, _, base) = common::setup_test_env();
    shell(&base)
        .write_stdin("totls\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command `totls`"))
        .stdout(predicate::str::contains("Suggestion: `totals`?"));
}

#[test]
fn config_changes_persist_between_runs() {
    let (_, config_manager, base) = common::setup_test_env();
    shell(&base)
        .write_stdin("config set currency EUR\n")
        .assert()
        .success();
    assert_eq!(config_manager.load().unwrap().currency, "EUR");

    shell(&base)
        .write_stdin("add Acme 1 50\ntotals\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total income: 50 EUR"));
}

#[test]
fn rust_log_off_silences_default_logging() {
    let (_, _, base) = common::setup_test_env();
    shell(&base)
        .write_stdin("add Acme 1 50\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    shell(&base)
        .env_remove("RUST_LOG")
        .write_stdin("add Acme 1 50\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Entry appended"));
}
