use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger_path(dir: &TempDir) -> PathBuf {
    dir.path().join("expenses.json")
}

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_CONFIG_DIR", dir.path().join("config"))
        .env_remove("EXPENSE_TRACKER_FILE")
        .env_remove("EXPENSE_TRACKER_LOG")
        .arg("--file")
        .arg(ledger_path(dir));
    cmd
}

fn add(dir: &TempDir, args: &[&str]) {
    expense(dir).arg("add").args(args).assert().success();
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "12.50", "-d", "Lunch", "-c", "Food", "--date", "2024-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully! (ID: 1)"));

    add(&dir, &["150", "-d", "Train ticket", "-c", "Transport", "--date", "2024-01-15"]);

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Train ticket"))
        .stdout(predicate::str::contains("$162.50"))
        .stdout(predicate::str::contains("Showing 2 of 2 expenses"));
}

#[test]
fn list_filters() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["50", "-d", "Groceries", "-c", "Food", "--date", "2024-01-10"]);
    add(&dir, &["150", "-d", "Bus pass", "-c", "Transport", "--date", "2024-01-15"]);

    expense(&dir)
        .args(["list", "-c", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Bus pass").not());

    expense(&dir)
        .args(["list", "--expensive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus pass"))
        .stdout(predicate::str::contains("Groceries").not());

    expense(&dir)
        .args(["list", "--from", "2024-01-12", "--to", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 2 expenses"));
}

#[test]
fn add_defaults_category() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["9.99", "-d", "Snack"]);

    let saved = read(&ledger_path(&dir));
    assert!(saved.contains("\"General\""));
    assert!(saved.contains("\"next_id\": 2"));
}

#[test]
fn add_rejects_bad_amount() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));

    assert!(!ledger_path(&dir).exists());
}

#[test]
fn edit_keeps_omitted_fields() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["20", "-d", "Cinema", "-c", "Fun", "--date", "2024-02-01"]);

    expense(&dir)
        .args(["edit", "1", "-c", "Entertainment", "-a", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense updated."));

    expense(&dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: Cinema"))
        .stdout(predicate::str::contains("Category:    Entertainment"))
        .stdout(predicate::str::contains("Amount:      $25.00"))
        .stdout(predicate::str::contains("Date:        2024-02-01"));
}

#[test]
fn edit_without_changes_does_not_save() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["20", "-d", "Cinema"]);
    let before = read(&ledger_path(&dir));

    expense(&dir)
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to change."));
    assert_eq!(read(&ledger_path(&dir)), before);

    expense(&dir)
        .args(["edit", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 9"));
}

#[test]
fn add_fails_once_ids_run_out() {
    let dir = TempDir::new().unwrap();
    fs::write(
        ledger_path(&dir),
        r#"{"expenses": [{"id": 4294967294, "amount": "1", "date": "2024-01-01"}], "next_id": 4294967295}"#,
    )
    .unwrap();
    let before = read(&ledger_path(&dir));

    expense(&dir)
        .args(["add", "5", "-d", "Coffee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no expense ids left"));
    assert_eq!(read(&ledger_path(&dir)), before);
}

#[test]
fn list_with_open_ended_dates() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["5", "-d", "Early", "--date", "2024-01-05"]);
    add(&dir, &["7", "-d", "Late", "--date", "2024-03-05"]);

    expense(&dir)
        .args(["list", "--from", "2024-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Late"))
        .stdout(predicate::str::contains("Early").not());

    expense(&dir)
        .args(["list", "--to", "2024-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Early"))
        .stdout(predicate::str::contains("Late").not());
}

#[test]
fn delete_then_show_fails() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["5", "-d", "Coffee"]);

    expense(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense 1 deleted."));

    expense(&dir)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 1"));

    expense(&dir).args(["delete", "1"]).assert().failure();
}

#[test]
fn ids_are_not_reused_after_delete() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["1", "-d", "first"]);
    add(&dir, &["2", "-d", "second"]);
    expense(&dir).args(["delete", "2"]).assert().success();

    expense(&dir)
        .args(["add", "3", "-d", "third"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 3)"));
}

#[test]
fn budget_set_and_status() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No monthly budget set."));

    expense(&dir)
        .args(["budget", "set", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget set to $100.00"));

    add(&dir, &["150", "-d", "Concert"]);

    expense(&dir)
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spent:"))
        .stdout(predicate::str::contains("150.0%"))
        .stdout(predicate::str::contains("Over budget by $50.00"));
}

#[test]
fn summary_newest_month_first() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["10", "--date", "2024-01-05"]);
    add(&dir, &["30", "--date", "2024-03-02"]);
    add(&dir, &["5", "--date", "2024-03-20"]);

    let output = expense(&dir).arg("summary").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let march = stdout.find("March 2024").unwrap();
    let january = stdout.find("January 2024").unwrap();
    assert!(march < january);
    assert!(stdout.contains("$35.00"));
}

#[test]
fn categories_and_top() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["75", "-d", "Taxi", "-c", "Transport"]);
    add(&dir, &["25", "-d", "Bagel", "-c", "Food"]);

    expense(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("75.0%"))
        .stdout(predicate::str::contains("25.0%"));

    expense(&dir)
        .args(["top", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Taxi"))
        .stdout(predicate::str::contains("Bagel").not());
}

#[test]
fn export_formats() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["12.5", "-d", "Lunch", "-c", "Food", "--date", "2024-01-10"]);

    let csv = dir.path().join("out.csv");
    expense(&dir).arg("export").arg(&csv).assert().success();
    assert_eq!(
        read(&csv),
        "ID,Date,Category,Description,Amount\n1,2024-01-10,Food,Lunch,12.50\n"
    );

    let json = dir.path().join("out.json");
    expense(&dir)
        .arg("export")
        .arg(&json)
        .args(["-f", "json"])
        .assert()
        .success();
    assert!(read(&json).contains("\"expense_count\": 1"));

    let yaml = dir.path().join("out.yaml");
    expense(&dir)
        .arg("export")
        .arg(&yaml)
        .args(["-f", "yaml"])
        .assert()
        .success();
    assert!(read(&yaml).starts_with("# Expense Tracker Export"));
}

#[test]
fn malformed_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    fs::write(ledger_path(&dir), "{ this is not json").unwrap();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting fresh."))
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn case_insensitive_fields_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        ledger_path(&dir),
        r#"{"Expenses": [{"Id": 4, "Description": "Book", "Amount": 18.5,
            "Category": "Reading", "Date": "2024-05-01T00:00:00"}], "NextId": 5}"#,
    )
    .unwrap();

    expense(&dir)
        .args(["show", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount:      $18.50"))
        .stdout(predicate::str::contains("Date:        2024-05-01"));
}

#[test]
fn menu_save_and_exit() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .write_stdin("1\nLunch\nFood\n12.50\n2024-01-10\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved successfully."));

    assert!(read(&ledger_path(&dir)).contains("Lunch"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data file:"))
        .stdout(predicate::str::contains("Currency symbol:     $"));

    assert!(dir.path().join("config").join("config.json").exists());
}
