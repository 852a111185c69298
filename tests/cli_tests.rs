mod common;

use common::{read_sheet, rtw, sheet_names, temp_out, text_source};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

/// Write a small March 2025 timesheet and return its path.
fn write_input(name: &str) -> String {
    let path = temp_out(name, "xlsx");
    let src = text_source(&[
        ["Jane", "Fix bug", "03-Mar-2025", "8"],
        ["Jane", "Write tests", "03-Mar-2025", "8"],
        ["Bob", "Review", "04-Mar-2025", "07:30"],
    ]);
    fs::write(&path, src).expect("write input workbook");
    path
}

/// Config path that does not exist: defaults apply, nothing under $HOME is touched.
fn no_config(name: &str) -> String {
    temp_out(name, "conf")
}

#[test]
fn test_convert_writes_report() {
    let input = write_input("cli_convert_in");
    let output = temp_out("cli_convert_out", "xlsx");
    let cfg = no_config("cli_convert");

    rtw()
        .args([
            "--config", &cfg, "convert", &input, "--output", &output, "--month", "3", "--year",
            "2025",
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&output).expect("read output workbook");
    assert_eq!(sheet_names(&bytes), ["Summary", "Bob", "Jane"]);
    assert_eq!(read_sheet(&bytes, "Jane")[3][3], "Fix bug, Write tests");
}

#[test]
fn test_convert_rejects_invalid_month() {
    let input = write_input("cli_bad_month_in");
    let output = temp_out("cli_bad_month_out", "xlsx");
    let cfg = no_config("cli_bad_month");

    rtw()
        .args([
            "--config", &cfg, "convert", &input, "--output", &output, "--month", "13",
        ])
        .assert()
        .failure()
        .stderr(contains("Validation error").and(contains("month")));

    assert!(!Path::new(&output).exists());
}

#[test]
fn test_convert_rejects_invalid_year() {
    let input = write_input("cli_bad_year_in");
    let output = temp_out("cli_bad_year_out", "xlsx");
    let cfg = no_config("cli_bad_year");

    rtw()
        .args([
            "--config", &cfg, "convert", &input, "--output", &output, "--year", "1999",
        ])
        .assert()
        .failure()
        .stderr(contains("validation"));

    assert!(!Path::new(&output).exists());
}

#[test]
fn test_convert_keeps_existing_output_without_force() {
    let input = write_input("cli_force_in");
    let output = temp_out("cli_force_out", "xlsx");
    let cfg = no_config("cli_force");
    fs::write(&output, b"keep me").unwrap();

    // answer "no" to the overwrite prompt
    rtw()
        .args(["--config", &cfg, "convert", &input, "--output", &output])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read(&output).unwrap(), b"keep me");

    rtw()
        .args(["--config", &cfg, "convert", &input, "--output", &output, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read(&output).unwrap(), b"keep me");
}

#[test]
fn test_convert_dedup_flag() {
    let input = temp_out("cli_dedup_in", "xlsx");
    fs::write(
        &input,
        text_source(&[
            ["Jane", "Standup", "03-Mar-2025", "8"],
            ["Jane", "Standup", "04-Mar-2025", "8"],
        ]),
    )
    .unwrap();
    let output = temp_out("cli_dedup_out", "xlsx");
    let cfg = no_config("cli_dedup");

    rtw()
        .args([
            "--config", &cfg, "convert", &input, "-o", &output, "--dedup", "day", "-f",
        ])
        .assert()
        .success();

    let jane = read_sheet(&fs::read(&output).unwrap(), "Jane");
    assert_eq!(jane[4][3], "Standup");
}

#[test]
fn test_summary_formats() {
    let input = write_input("cli_summary_in");
    let cfg = no_config("cli_summary");

    rtw()
        .args(["--config", &cfg, "summary", &input])
        .assert()
        .success()
        .stdout(contains("2025-03").and(contains("Total Hours")).and(contains("Jane")));

    rtw()
        .args(["--config", &cfg, "summary", &input, "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"period\": \"2025-03\"").and(contains("\"total_hours\": 15")));

    rtw()
        .args(["--config", &cfg, "summary", &input, "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("name,hours").and(contains("Bob,7.5")).and(contains("Jane,8.0")));
}

#[test]
fn test_init_and_print_config() {
    let cfg = no_config("cli_init");

    rtw()
        .args(["--config", &cfg, "init"])
        .assert()
        .success();
    assert!(Path::new(&cfg).exists());

    rtw()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    rtw()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Emp Name").and(contains("task_dedup: month")));
}

#[test]
fn test_config_file_changes_column_names() {
    let cfg = no_config("cli_custom_columns");
    fs::write(
        &cfg,
        "columns:\n  employee: Employee\ntask_dedup: day\n",
    )
    .unwrap();

    // default header uses "Emp Name": lookup must fail
    let input = write_input("cli_custom_columns_in");
    rtw()
        .args(["--config", &cfg, "summary", &input])
        .assert()
        .failure()
        .stderr(contains("Missing column").and(contains("Employee")));
}

#[test]
fn test_broken_config_is_reported() {
    let cfg = no_config("cli_broken_config");
    fs::write(&cfg, "date_formats: []\n").unwrap();
    let input = write_input("cli_broken_config_in");

    rtw()
        .args(["--config", &cfg, "summary", &input])
        .assert()
        .failure()
        .stderr(contains("date_formats"));
}

#[test]
fn test_init_force_repairs_broken_config() {
    let cfg = no_config("cli_init_repair");
    fs::write(&cfg, "date_formats: [\n").unwrap();

    rtw()
        .args(["--config", &cfg, "init", "--force"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    rtw()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("task_dedup: month"));
}
