mod common;

use common::{bstt, sample_export, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

fn init(db: &str) {
    bstt()
        .args(["--db", db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
}

#[test]
fn init_creates_schema_that_passes_integrity_check() {
    let db = setup_test_db("cli_init");
    init(&db);

    bstt()
        .args(["--db", &db, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Total time entries:"));
}

#[test]
fn sync_year_loads_export_and_logs_it() {
    let db = setup_test_db("cli_sync_year");
    let input = sample_export("cli_sync_year");
    init(&db);

    bstt()
        .args(["--db", &db, "sync", "--year", "2025", "--input", &input])
        .assert()
        .success()
        .stdout(contains("2025-01-01 to 2025-12-31"))
        .stdout(contains("Fetched 5 records"))
        .stdout(contains("After transformations: 3 records"))
        .stdout(contains("Saved 3 records"))
        .stdout(contains("Sync complete! 3 records processed"));

    bstt()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("sync"))
        .stdout(contains("inserted 3"));
}

#[test]
fn sync_replace_is_idempotent_for_same_export() {
    let db = setup_test_db("cli_sync_replace");
    let input = sample_export("cli_sync_replace");
    init(&db);

    for _ in 0..2 {
        bstt()
            .args(["--db", &db, "sync", "--year", "2025", "--replace", "--input", &input])
            .assert()
            .success();
    }

    let out = temp_out("cli_sync_replace", "json");
    bstt()
        .args(["--db", &db, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Exported 3 time entries"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[test]
fn dry_run_leaves_store_empty() {
    let db = setup_test_db("cli_dry_run");
    let input = sample_export("cli_dry_run");
    init(&db);

    bstt()
        .args(["--db", &db, "sync", "--year", "2025", "--dry-run", "--input", &input])
        .assert()
        .success()
        .stdout(contains("DRY RUN - No data saved"))
        .stdout(contains("Would save 3 records"))
        .stdout(contains("P&G Cincinnati | 2025-06-15 | Doe, Jane | Finger"));

    let out = temp_out("cli_dry_run", "csv");
    bstt()
        .args(["--db", &db, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));
}

#[test]
fn sync_without_credentials_fails() {
    let db = setup_test_db("cli_no_creds");
    let input = sample_export("cli_no_creds");

    bstt()
        .env_remove("PROD_SQL_PASSWORD")
        .args(["--db", &db, "sync", "--input", &input])
        .assert()
        .failure()
        .stderr(contains("Production credentials not configured"));
}

#[test]
fn sync_without_source_fails() {
    let db = setup_test_db("cli_no_source");

    bstt()
        .args(["--db", &db, "sync"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn sync_rejects_zero_weeks() {
    let db = setup_test_db("cli_zero_weeks");
    let input = sample_export("cli_zero_weeks");

    bstt()
        .args(["--db", &db, "sync", "--weeks", "0", "--input", &input])
        .assert()
        .failure()
        .stderr(contains("Invalid week count 0"));
}

#[test]
fn sync_year_ignores_week_count() {
    let db = setup_test_db("cli_year_zero_weeks");
    let input = sample_export("cli_year_zero_weeks");

    bstt()
        .args([
            "--db", &db, "sync", "--year", "2025", "--weeks", "0", "--input", &input,
        ])
        .assert()
        .success()
        .stdout(contains("2025-01-01 to 2025-12-31"))
        .stdout(contains("Saved 3 records"));
}

#[test]
fn export_csv_filters_on_week_end_range() {
    let db = setup_test_db("cli_export_range");
    let input = sample_export("cli_export_range");
    init(&db);

    bstt()
        .args(["--db", &db, "sync", "--year", "2025", "--input", &input])
        .assert()
        .success();

    let out = temp_out("cli_export_range", "csv");
    bstt()
        .args([
            "--db",
            &db,
            "export",
            "--file",
            &out,
            "--range",
            "2025-06-15",
        ])
        .assert()
        .success()
        .stdout(contains("Exported 2 time entries"));

    let body = fs::read_to_string(&out).unwrap();
    assert!(body.starts_with("id,year,week_number"));
    assert!(body.contains("Write-In"));
    assert!(!body.contains("Old, Otto"));
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let db = setup_test_db("cli_export_force");
    let input = sample_export("cli_export_force");
    init(&db);

    bstt()
        .args(["--db", &db, "sync", "--year", "2025", "--input", &input])
        .assert()
        .success();

    let out = temp_out("cli_export_force", "csv");
    fs::write(&out, "keep me").unwrap();

    bstt()
        .args(["--db", &db, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    bstt()
        .args(["--db", &db, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn export_requires_absolute_path() {
    let db = setup_test_db("cli_export_relative");
    init(&db);

    bstt()
        .args(["--db", &db, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn config_print_shows_source_defaults() {
    bstt()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("source_server: FOXXSQLPROD"))
        .stdout(contains("source_database: XLCServices1"));
}
