//! Runs the `trv-setback` binary and checks what it prints.

mod common;

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trv-setback"))
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run trv-setback binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Extract the text after `label` on the first stdout line starting with it.
fn parse_metric<'a>(stdout: &'a str, label: &str) -> Option<&'a str> {
    stdout
        .lines()
        .find(|line| line.starts_with(label))
        .map(|line| line[label.len()..].trim())
}

#[test]
fn design_hour_run_prints_full_fraction() {
    let out = run_cli(&["--preset", "reference", "--temperatures", "tests/data/design_hour.csv"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = stdout_of(&out);
    assert!(stdout.contains("--- Scenario Summary ---"));
    let raises = parse_metric(&stdout, "Setback raises demand:").expect("missing fraction line");
    assert!(raises.contains("1 hours"), "got {raises}");
    assert!(raises.contains("fraction 1.000"), "got {raises}");
    let elec = parse_metric(&stdout, "Mean HP electricity:").expect("missing electricity line");
    let no_setback_w: f64 = elec.split_whitespace().next().unwrap().parse().unwrap();
    assert!((no_setback_w - 769.0).abs() < 1.0, "got {elec}");
}

#[test]
fn reference_flag_prints_single_temperature_report() {
    let out = run_cli(&["--reference"]);
    assert!(out.status.success());
    let stdout = stdout_of(&out);
    assert!(stdout.contains("--- Reference Computation ---"));
    let verdict = parse_metric(&stdout, "Setback raises electricity:").expect("missing verdict");
    assert!(verdict.starts_with("stiff true"), "got {verdict}");
    assert!(!stdout.contains("Scenario Summary"));
}

#[test]
fn sag_table_lists_one_row_per_temperature() {
    let out = run_cli(&["--preset", "fixes_applied", "--sag-table"]);
    assert!(out.status.success());
    let stdout = stdout_of(&out);
    let header = stdout
        .lines()
        .position(|l| l.starts_with("--- Soft Regulation Sag"))
        .expect("missing sag header");
    let rows = stdout.lines().skip(header + 2).filter(|l| !l.trim().is_empty()).count();
    assert!(rows >= 5, "only {rows} rows");
}

#[test]
fn scenario_file_runs_soft_detached_on_synthetic_weather() {
    let out = run_cli(&["--scenario", "scenarios/fixes_soft_detached.toml"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = stdout_of(&out);
    assert_eq!(parse_metric(&stdout, "Archetype:"), Some("detached"));
    assert_eq!(parse_metric(&stdout, "Regulation:"), Some("soft"));
    let min_eq = parse_metric(&stdout, "Min A-room temperature:").expect("soft run reports sag");
    let value: f64 = min_eq.trim_end_matches('C').trim().parse().unwrap();
    assert!(value > 18.0 && value < 21.0, "min eq {value}");
}

#[test]
fn command_line_overrides_scenario_regulation() {
    let out = run_cli(&[
        "--preset",
        "fixes_applied",
        "--regulation",
        "soft",
        "--temperatures",
        "tests/data/ddn_fragment.csv",
    ]);
    assert!(out.status.success());
    assert_eq!(parse_metric(&stdout_of(&out), "Regulation:"), Some("soft"));
}

#[test]
fn unknown_preset_fails() {
    let out = run_cli(&["--preset", "nonexistent"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nonexistent"));
}

#[test]
fn unknown_archetype_fails() {
    let out = run_cli(&["--archetype", "terrace"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown archetype"));
}

#[test]
fn missing_temperature_file_fails() {
    let out = run_cli(&["--temperatures", "tests/data/does_not_exist.csv"]);
    assert!(!out.status.success());
}

#[test]
fn hourly_out_writes_one_row_per_heating_hour() {
    let path = std::env::temp_dir().join(format!("trv_setback_hourly_{}.csv", std::process::id()));
    let path_str = path.to_str().unwrap();
    let fixture = common::fixture_path("mixed_hours.csv");
    let out = run_cli(&[
        "--preset",
        "fixes_applied",
        "--temperatures",
        fixture.to_str().unwrap(),
        "--hourly-out",
        path_str,
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let written = std::fs::read_to_string(&path).unwrap();
    let mut lines = written.lines();
    assert!(lines.next().unwrap().starts_with("hour,timestamp,external_c"));
    assert_eq!(lines.count(), 6);
    std::fs::remove_file(&path).ok();
}

#[test]
fn summary_table_runs_every_archetype_and_layout() {
    let out = run_cli(&[
        "--preset",
        "fixes_applied",
        "--temperatures",
        "tests/data/ddn_fragment.csv",
        "--summary-table",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = stdout_of(&out);
    let stiff_at = stdout.find("--- Scenario Summary Table (stiff) ---").expect("missing stiff table");
    let soft_at = stdout.find("--- Scenario Summary Table (soft) ---").expect("missing soft table");
    assert!(stiff_at < soft_at);
    let rows: Vec<&str> = stdout.lines().filter(|l| l.starts_with("ddn_fragment.csv")).collect();
    assert_eq!(rows.len(), 8);
    assert!(rows[0].contains("bungalow") && rows[0].contains("ABAB"));
    assert!(rows[3].contains("detached") && rows[3].contains("AABB"));
    assert!(rows.iter().all(|r| !r.contains("failed")));
}

#[test]
fn stations_without_data_set_fails() {
    let out = run_cli(&["--stations", "tests/data/no_such_dir"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no_such_dir"));
}
