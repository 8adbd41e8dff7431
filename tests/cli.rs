//! Tests for the `jornada` binary: output and exit status.

use std::process::{Command, Output};

use serde_json::Value;

// =============================================================================
// Test Helpers
// =============================================================================

fn jornada(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jornada"))
        .args(args)
        .env_remove("JORNADA_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run jornada")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Successful runs
// =============================================================================

#[test]
fn test_week_with_built_in_rules() {
    let output = jornada(&["--clock-in", "07:00"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Clock-out: 16:48"));
    assert!(text.contains("Within the weekly limit of 44h 00m."));
    assert!(text.contains("220h"));
}

#[test]
fn test_single_day_target() {
    let output = jornada(&[
        "--clock-in",
        "22:00",
        "--target-minutes",
        "60",
        "--break-minutes",
        "0",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Clock-out:  22:53"));
}

#[test]
fn test_single_day_json() {
    let output = jornada(&["--clock-in", "20:00", "--target-minutes", "528", "--json"]);

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["clock_out"], "2023-01-02T04:57:00");
    assert_eq!(json["break_minutes"], 60);
}

#[test]
fn test_week_json() {
    let output = jornada(&["--clock-in", "08:00", "--regime", "6", "--json"]);

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["weekly"]["rows"].as_array().unwrap().len(), 6);
    assert_eq!(json["weekly"]["total_target_minutes"], 2640);
    assert_eq!(json["monthly"]["working_days_per_month"], 26);
}

#[test]
fn test_config_directory_argument() {
    let output = jornada(&[
        "--clock-in",
        "08:00",
        "--regime",
        "6x1",
        "--config",
        "./config/clt-six-day-short-saturday",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Clock-out: 17:00"));
    let saturday = text.lines().find(|l| l.starts_with("Sat")).unwrap();
    assert!(saturday.contains("13:00"));
    assert!(saturday.contains("04h 00m"));
}

#[test]
fn test_config_directory_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_jornada"))
        .args(["--clock-in", "08:00", "--regime", "6"])
        .env("JORNADA_CONFIG", "./config/clt-six-day-short-saturday")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run jornada");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Clock-out: 17:00"));
}

// =============================================================================
// Rejected input
// =============================================================================

#[test]
fn test_short_break_exits_non_zero() {
    let output = jornada(&["--clock-in", "07:00", "--break-minutes", "30"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Invalid break of 30 minutes"));
}

#[test]
fn test_malformed_clock_in_exits_non_zero() {
    let output = jornada(&["--clock-in", "25:00"]);

    assert!(!output.status.success());
    assert_eq!(stderr(&output).matches("Invalid clock time '25:00'").count(), 1);
}

#[test]
fn test_unknown_regime_exits_non_zero() {
    let output = jornada(&["--clock-in", "07:00", "--regime", "7"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid regime '7'"));
}

#[test]
fn test_missing_config_directory_exits_non_zero() {
    let output = jornada(&["--clock-in", "07:00", "--config", "./config/does-not-exist"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Configuration file not found"));
}
