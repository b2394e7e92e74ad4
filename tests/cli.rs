mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("wbinfo").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("wbinfo"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn render_writes_image() {
    let dir = tempdir().unwrap();
    let input = common::write_export(dir.path());
    let out = dir.path().join("out.png");
    let mut cmd = Command::cargo_bin("wbinfo").unwrap();
    cmd.args(["render", "--dpi", "40", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&out);
    cmd.assert().success();
    assert!(fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.png");
    let mut cmd = Command::cargo_bin("wbinfo").unwrap();
    cmd.args(["render", "--dpi", "40", "--input"])
        .arg(dir.path().join("missing.csv"))
        .arg("--output")
        .arg(&out);
    cmd.assert().failure().stderr(predicate::str::contains("Error"));
    assert!(!out.exists());
}

#[test]
fn melt_exports_json() {
    let dir = tempdir().unwrap();
    let input = common::write_export(dir.path());
    let out = dir.path().join("rural.json");
    let mut cmd = Command::cargo_bin("wbinfo").unwrap();
    cmd.args(["melt", "--series", "Rural population", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out);
    cmd.assert().success();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["rows"].as_array().unwrap().len(), 40);
}

#[test]
fn stats_prints_one_line_per_group() {
    let dir = tempdir().unwrap();
    let input = common::write_export(dir.path());
    let mut cmd = Command::cargo_bin("wbinfo").unwrap();
    cmd.args(["stats", "--series", "Rural population", "--input"])
        .arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Rural population • Chad"))
        .stdout(predicate::str::contains("count=5 missing=0"));
}

#[test]
fn missing_dropped_column_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("renamed.csv");
    fs::write(
        &input,
        common::export_csv().replacen("2005 [YR2005]", "2005", 1),
    )
    .unwrap();
    let out = dir.path().join("out.png");
    let mut cmd = Command::cargo_bin("wbinfo").unwrap();
    cmd.args(["render", "--dpi", "40", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&out);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("2005 [YR2005]"));
    assert!(!out.exists());
}

#[test]
fn dpi_out_of_range_is_rejected() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.png");
    for dpi in ["0", "5000"] {
        let mut cmd = Command::cargo_bin("wbinfo").unwrap();
        cmd.args(["render", "--dpi", dpi, "--output"]).arg(&out);
        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("--dpi"));
    }
    assert!(!out.exists());
}
