use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_EXPORT, no_config, sd, write_file};

#[test]
fn test_duration_command() {
    sd().args(["duration", "1hr 3", "4m", "garbage"])
        .assert()
        .success()
        .stdout(contains("63"))
        .stdout(contains("01h 03m"))
        .stdout(contains("unparseable"));
}

#[test]
fn test_duration_requires_input() {
    sd().arg("duration").assert().failure();
}

#[test]
fn test_report_prints_key_metrics() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(dir.path(), "strong.csv", SAMPLE_EXPORT);

    sd().args(["--config", &no_config(dir.path()), "report"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(contains("Total workout days"))
        .stdout(contains("April (3 days)"))
        .stdout(contains("Bench Press (Barbell)"))
        .stdout(contains("500 kg"))
        .stdout(contains("1 with unparseable duration"));
}

#[test]
fn test_report_json() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(dir.path(), "strong.csv", SAMPLE_EXPORT);

    let output = sd()
        .args(["--config", &no_config(dir.path()), "report", "--json"])
        .arg(&csv)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_workout_days"], 5);
    assert_eq!(json["best_month"]["month"], "April");
    assert_eq!(json["longest_workout_minutes"], 120);
    assert!(json["personal_records"]["Plank"].is_null());
}

#[test]
fn test_report_missing_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(
        dir.path(),
        "broken.csv",
        "Date,Workout Name,Exercise Name\n2024-03-04 18:00:00,Push,Bench\n",
    );

    sd().args(["--config", &no_config(dir.path()), "report"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(contains("Missing required column"))
        .stderr(contains("Duration"));
}

#[test]
fn test_report_bad_date_fails() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(
        dir.path(),
        "bad_date.csv",
        "Date,Workout Name,Duration,Exercise Name,Set Order,Weight,Reps\nsoon,A,30,Squat,1,80,5\n",
    );

    sd().args(["--config", &no_config(dir.path()), "report"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(contains("Invalid date format at line 2"));
}

#[test]
fn test_report_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    sd().args(["--config", &no_config(dir.path()), "report"])
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}

#[test]
fn test_progress_filter() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(dir.path(), "strong.csv", SAMPLE_EXPORT);

    sd().args(["--config", &no_config(dir.path()), "progress", "-e", "squat (barbell)"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(contains("Squat (Barbell)"))
        .stdout(contains("2024-04-03"))
        .stdout(contains("Deadlift").not());
}

#[test]
fn test_spread_by_duration() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(dir.path(), "strong.csv", SAMPLE_EXPORT);

    sd().args(["--config", &no_config(dir.path()), "spread", "--by", "duration"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(contains("Workout durations by month"))
        .stdout(contains("Legs"))
        .stdout(contains("120"));
}

#[test]
fn test_export_csv_drops_rest_rows() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(dir.path(), "strong.csv", SAMPLE_EXPORT);
    let out = dir.path().join("sets.csv");

    sd().args(["--config", &no_config(dir.path()), "export", "--format", "csv", "--out"])
        .arg(&out)
        .arg(&csv)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,day,month,workout_name,exercise_name"));
    assert!(!content.contains("Rest Timer"));
    assert_eq!(content.lines().count(), 8);
}

#[test]
fn test_export_json_with_force() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(dir.path(), "strong.csv", SAMPLE_EXPORT);
    let out = write_file(dir.path(), "report.json", "old content");

    sd().args(["--config", &no_config(dir.path()), "export", "--format", "json", "--force", "--out"])
        .arg(&out)
        .arg(&csv)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["report"]["total_sets"], 7);
    assert_eq!(json["sets"].as_array().unwrap().len(), 7);
    assert!(json["weight_progress"].is_array());
    assert!(json["duration_spread"].is_array());
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(dir.path(), "strong.csv", SAMPLE_EXPORT);
    let out = write_file(dir.path(), "sets.csv", "keep me");

    sd().args(["--config", &no_config(dir.path()), "export", "--out"])
        .arg(&out)
        .arg(&csv)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_config_file_changes_best_month_rule() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_file(dir.path(), "sd.conf", "best_month_rule: most_sets\nweight_unit: lb\n");
    let csv = write_file(dir.path(), "strong.csv", SAMPLE_EXPORT);

    sd().args(["--config"])
        .arg(&cfg)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("most_sets"))
        .stdout(contains("Rest Timer"));

    sd().args(["--config"])
        .arg(&cfg)
        .arg("report")
        .arg(&csv)
        .assert()
        .success()
        .stdout(contains("500 lb"));
}

#[test]
fn test_config_check_reports_bad_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_file(dir.path(), "sd.conf", "delimiter: \"||\"\n");

    sd().args(["--config"])
        .arg(&cfg)
        .args(["config", "--check"])
        .assert()
        .failure()
        .stderr(contains("delimiter must be a single ASCII character"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_file(dir.path(), "sd.conf", "best_month_rule: [not, valid\n");

    sd().args(["--config"])
        .arg(&cfg)
        .args(["duration", "30"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
