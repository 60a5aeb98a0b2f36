use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gofinances(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gofinances").unwrap();
    cmd.env("GOFINANCES_DATA_DIR", home).env_remove("RUST_LOG");
    cmd
}

/// Write a transaction list straight into the store, the way the app keeps it
fn seed(home: &Path, transactions: serde_json::Value) {
    let data_dir = home.join("data");
    fs::create_dir_all(&data_dir).unwrap();
    let store = serde_json::json!({
        "@gofinances:transactions": transactions.to_string(),
    });
    fs::write(data_dir.join("storage.json"), store.to_string()).unwrap();
}

fn seed_may_2021(home: &Path) {
    seed(
        home,
        serde_json::json!([
            {"id": "5e4b8a0c-1f6e-4c7e-9d3a-2b1c0d9e8f70", "type": "negative", "name": "Pizza",
             "amount": "100", "category": "food", "date": "2021-05-01T12:00:00.000Z"},
            {"id": "6f5c9b1d-2a7f-4d8f-8e4b-3c2d1e0f9a81", "type": "negative", "name": "Market",
             "amount": "300", "category": "food", "date": "2021-05-10T12:00:00.000Z"},
            {"id": "7a6d0c2e-3b8a-4e9a-9f5c-4d3e2f1a0b92", "type": "negative", "name": "Gas",
             "amount": 100, "category": "car", "date": "2021-05-20"},
            {"id": "8b7e1d3f-4c9b-4fab-a06d-5e4f3a2b1ca3", "type": "positive", "name": "Salary",
             "amount": "1000", "category": "salary", "date": "2021-05-05T09:00:00.000Z"},
            {"id": "9c8f2e4a-5dac-4abc-b17e-6f5a4b3c2db4", "type": "negative", "name": "Course",
             "amount": "999", "category": "studies", "date": "2020-05-15T12:00:00.000Z"}
        ]),
    );
}

#[test]
fn category_list_shows_all_categories() {
    let home = TempDir::new().unwrap();
    gofinances(home.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("purchases")
                .and(predicate::str::contains("Food"))
                .and(predicate::str::contains("#12A454"))
                .and(predicate::str::contains("studies")),
        );
}

#[test]
fn resume_groups_month_expenses_by_category() {
    let home = TempDir::new().unwrap();
    seed_may_2021(home.path());

    gofinances(home.path())
        .args(["resume", "--month", "2021-05"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Summary by category: May, 2021")
                .and(predicate::str::contains("Food"))
                .and(predicate::str::contains("R$ 400,00"))
                .and(predicate::str::contains("80%"))
                .and(predicate::str::contains("20%"))
                .and(predicate::str::contains("Salary").not())
                .and(predicate::str::contains("Studies").not()),
        );
}

#[test]
fn resume_empty_month() {
    let home = TempDir::new().unwrap();
    seed_may_2021(home.path());

    gofinances(home.path())
        .args(["resume", "--month", "2021-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses this month."));
}

#[test]
fn resume_rejects_bad_month() {
    let home = TempDir::new().unwrap();
    gofinances(home.path())
        .args(["resume", "--month", "May 2021"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn resume_csv_export() {
    let home = TempDir::new().unwrap();
    seed_may_2021(home.path());

    gofinances(home.path())
        .args(["resume", "--month", "2021-05", "--format", "csv"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("month,key,name,color,total,total_formatted,percent")
                .and(predicate::str::contains("2021-05,food,Food,#FF872C,"))
                .and(predicate::str::contains("2021-05,car,Car,#E83F5B,")),
        );
}

#[test]
fn resume_json_export_to_file() {
    let home = TempDir::new().unwrap();
    seed_may_2021(home.path());
    let output = home.path().join("may.json");

    gofinances(home.path())
        .args(["resume", "--month", "2021-05", "--format", "json", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary exported to"));

    let contents = fs::read_to_string(&output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["key"], "food");
    assert_eq!(rows[0]["percent"], "80%");
    assert_eq!(rows[0]["totalFormatted"], "R$ 400,00");
    assert_eq!(rows[1]["key"], "car");
    assert_eq!(rows[1]["percent"], "20%");
}

#[test]
fn add_then_list_transactions() {
    let home = TempDir::new().unwrap();

    gofinances(home.path())
        .args(["transaction", "add", "Pizza", "59,90", "--type", "outcome", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered outcome 'Pizza'"));

    gofinances(home.path())
        .args(["transaction", "add", "Paycheck", "2500", "-t", "income", "-c", "Salary"])
        .assert()
        .success();

    gofinances(home.path())
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Pizza")
                .and(predicate::str::contains("- R$ 59,90"))
                .and(predicate::str::contains("Paycheck")),
        );

    gofinances(home.path())
        .args(["transaction", "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paycheck").and(predicate::str::contains("Pizza").not()));
}

#[test]
fn add_rejects_invalid_input() {
    let home = TempDir::new().unwrap();

    gofinances(home.path())
        .args(["transaction", "add", "Pizza", "0", "--type", "outcome", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number"));

    gofinances(home.path())
        .args(["transaction", "add", "Pizza", "10", "--type", "outcome", "--category", "travel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found: travel"));

    gofinances(home.path())
        .args(["transaction", "add", " ", "10", "--type", "outcome", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name is required"));

    gofinances(home.path())
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn clear_requires_force() {
    let home = TempDir::new().unwrap();
    seed_may_2021(home.path());

    gofinances(home.path())
        .args(["transaction", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    gofinances(home.path())
        .args(["transaction", "clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 5 transaction(s)."));

    gofinances(home.path())
        .args(["resume", "--month", "2021-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses this month."));
}

#[test]
fn dashboard_with_us_locale() {
    let home = TempDir::new().unwrap();
    seed_may_2021(home.path());

    gofinances(home.path())
        .args(["config", "--locale", "en-US"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Locale:        en-US"));

    gofinances(home.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("$1,000.00")
                .and(predicate::str::contains("- $999.00"))
                .and(predicate::str::contains("Listing")),
        );
}

#[test]
fn corrupt_store_is_reported() {
    let home = TempDir::new().unwrap();
    let data_dir = home.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("storage.json"),
        r#"{"@gofinances:transactions": "not json"}"#,
    )
    .unwrap();

    gofinances(home.path())
        .args(["resume", "--month", "2021-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"));
}

#[test]
fn oversized_stored_amounts_are_reported() {
    let home = TempDir::new().unwrap();
    seed(
        home.path(),
        serde_json::json!([
            {"id": "5e4b8a0c-1f6e-4c7e-9d3a-2b1c0d9e8f70", "type": "negative", "name": "Pizza",
             "amount": "90000000000000000", "category": "food", "date": "2021-05-01T12:00:00.000Z"},
            {"id": "7a6d0c2e-3b8a-4e9a-9f5c-4d3e2f1a0b92", "type": "negative", "name": "Gas",
             "amount": "90000000000000000", "category": "car", "date": "2021-05-20T12:00:00.000Z"}
        ]),
    );

    gofinances(home.path())
        .args(["resume", "--month", "2021-05"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Storage error")
                .and(predicate::str::contains("panicked").not()),
        );

    gofinances(home.path())
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"));
}

#[test]
fn invalid_date_format_in_config_is_reported() {
    let home = TempDir::new().unwrap();
    seed_may_2021(home.path());
    fs::write(home.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    gofinances(home.path())
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Invalid date format: %Q")
                .and(predicate::str::contains("panicked").not()),
        );
}
