use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SEED: &str = r#"[
  {"id": "1704067200000", "description": "Coffee", "amount": 3.5, "category": "Food & Dining", "date": "2024-01-01", "paymentMethod": "Cash"},
  {"id": "1704153600000", "description": "Train ticket", "amount": 45.0, "category": "Travel", "date": "2024-01-02", "paymentMethod": "Credit"},
  {"id": "1704240000000", "description": "Textbook", "amount": 20.0, "category": "Education", "date": "2024-01-03", "paymentMethod": "Debit"}
]"#;

fn expenses_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("data").join("expenses.json")
}

fn seeded() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(data_file(&dir), SEED).unwrap();
    dir
}

fn stored(dir: &TempDir) -> Vec<serde_json::Value> {
    let contents = fs::read_to_string(data_file(dir)).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn test_add_persists_expense() {
    let dir = TempDir::new().unwrap();

    expenses_cmd(&dir)
        .args(["add", "Coffee", "3.50", "-c", "Food & Dining", "-d", "2024-01-01", "-p", "cash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"))
        .stdout(predicate::str::contains("₹3.50"));

    let expenses = stored(&dir);
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0]["description"], "Coffee");
    assert_eq!(expenses[0]["amount"], 3.5);
    assert_eq!(expenses[0]["category"], "Food & Dining");
    assert_eq!(expenses[0]["date"], "2024-01-01");
    assert_eq!(expenses[0]["paymentMethod"], "Cash");
}

#[test]
fn test_add_uses_defaults() {
    let dir = TempDir::new().unwrap();

    expenses_cmd(&dir).args(["add", "Lunch", "12"]).assert().success();

    let expenses = stored(&dir);
    assert_eq!(expenses[0]["category"], "Food & Dining");
    assert_eq!(expenses[0]["paymentMethod"], "Credit");
}

#[test]
fn test_add_rejects_invalid_amount() {
    let dir = TempDir::new().unwrap();

    expenses_cmd(&dir)
        .args(["add", "Coffee", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    expenses_cmd(&dir)
        .args(["add", "Refund", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));

    assert!(!data_file(&dir).exists() || stored(&dir).is_empty());
}

#[test]
fn test_add_rejects_blank_description() {
    let dir = TempDir::new().unwrap();

    expenses_cmd(&dir)
        .args(["add", "   ", "3.50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description is required"));
}

#[test]
fn test_list_shows_seeded_expenses() {
    let dir = seeded();

    expenses_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Train ticket"))
        .stdout(predicate::str::contains("Textbook"))
        .stdout(predicate::str::contains("Showing 3 of 3 matching"))
        .stdout(predicate::str::contains("₹68.50"));
}

#[test]
fn test_list_filter_and_limit() {
    let dir = seeded();

    expenses_cmd(&dir)
        .args(["list", "-f", "TRAVEL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Train ticket"))
        .stdout(predicate::str::contains("Coffee").not())
        .stdout(predicate::str::contains("(3 total)"));

    expenses_cmd(&dir)
        .args(["list", "-s", "amount", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Train ticket"))
        .stdout(predicate::str::contains("Textbook").not())
        .stdout(predicate::str::contains("Use --all"));
}

#[test]
fn test_list_empty() {
    let dir = TempDir::new().unwrap();

    expenses_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn test_malformed_data_loads_empty() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(data_file(&dir), "{ not json").unwrap();

    expenses_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));

    expenses_cmd(&dir).args(["add", "Tea", "2"]).assert().success();

    let backup = dir.path().join("data").join("expenses.json.corrupt");
    assert_eq!(fs::read_to_string(backup).unwrap(), "{ not json");
    assert_eq!(stored(&dir).len(), 1);
}

#[test]
fn test_corrupt_config_uses_defaults() {
    let dir = seeded();
    fs::write(dir.path().join("config.json"), r#"{"page_size": "five""#).unwrap();

    expenses_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 3 of 3 matching"))
        .stderr(predicate::str::contains("using default settings"));

    expenses_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page size:       5"));
}

#[test]
fn test_show_expense() {
    let dir = seeded();

    expenses_cmd(&dir)
        .args(["show", "1704153600000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Train ticket"))
        .stdout(predicate::str::contains("Travel"))
        .stdout(predicate::str::contains("Credit"));

    expenses_cmd(&dir)
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_edit_keeps_id_and_position() {
    let dir = seeded();

    expenses_cmd(&dir)
        .args(["edit", "1704067200000", "--amount", "4.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated expense 1704067200000"));

    let expenses = stored(&dir);
    assert_eq!(expenses.len(), 3);
    assert_eq!(expenses[0]["id"], "1704067200000");
    assert_eq!(expenses[0]["description"], "Coffee");
    assert_eq!(expenses[0]["amount"], 4.0);
}

#[test]
fn test_edit_unknown_id_fails() {
    let dir = seeded();

    expenses_cmd(&dir)
        .args(["edit", "42", "--amount", "4.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert_eq!(stored(&dir).len(), 3);
}

#[test]
fn test_delete_twice_is_noop() {
    let dir = seeded();

    expenses_cmd(&dir)
        .args(["delete", "1704153600000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense 1704153600000"));

    expenses_cmd(&dir)
        .args(["delete", "1704153600000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to delete"));

    let ids: Vec<_> = stored(&dir).iter().map(|e| e["id"].clone()).collect();
    assert_eq!(ids, vec!["1704067200000", "1704240000000"]);
}

#[test]
fn test_history_records_changes() {
    let dir = seeded();

    expenses_cmd(&dir)
        .args(["edit", "1704067200000", "--amount", "4.00"])
        .assert()
        .success();

    expenses_cmd(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE"))
        .stdout(predicate::str::contains("amount"));
}

#[test]
fn test_export_csv_and_json() {
    let dir = seeded();
    let csv_path = dir.path().join("out.csv");
    let json_path = dir.path().join("out.json");

    expenses_cmd(&dir)
        .arg("export")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 expenses"));

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("ID,Date,Description,Category,Payment Method,Amount"));
    assert!(csv.contains("1704067200000,2024-01-01,Coffee,Food & Dining,Cash,3.50"));

    expenses_cmd(&dir)
        .args(["export", "--format", "json"])
        .arg(&json_path)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["expense_count"], 3);
    assert_eq!(json["expenses"][1]["description"], "Train ticket");
}

#[test]
fn test_categories_lists_vocabularies() {
    let dir = TempDir::new().unwrap();

    expenses_cmd(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food & Dining"))
        .stdout(predicate::str::contains("Healthcare"))
        .stdout(predicate::str::contains("Debit"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    expenses_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.json"))
        .stdout(predicate::str::contains("Page size:       5"));
}
