//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sms_meter() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sms-meter"));
    // Keep tests independent of any config file in the repo checkout.
    cmd.current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = sms_meter();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("sms-meter"));
}

#[test]
fn test_cli_help() {
    let mut cmd = sms_meter();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Estimate SMS encoding class"))
        .stdout(predicate::str::contains("estimate"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn test_estimate_plain_ascii() {
    let mut cmd = sms_meter();
    cmd.args(["estimate", "Flash sale: 20% off everything!"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Characters: 31"))
        .stdout(predicate::str::contains("Encoding:   GSM-7"))
        .stdout(predicate::str::contains("Segments:   1"));
}

#[test]
fn test_estimate_json_output() {
    let mut cmd = sms_meter();
    cmd.args(["estimate", "--json", "Hello 🚀"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(parsed["character_count"], 7);
    assert_eq!(parsed["encoding"], "ucs2");
    assert_eq!(parsed["segment_count"], 1);
}

#[test]
fn test_estimate_from_stdin() {
    let mut cmd = sms_meter();
    cmd.arg("estimate");
    cmd.write_stdin("Hello world\n");
    cmd.assert().success().stdout(predicate::str::contains("Characters: 11"));
}

#[test]
fn test_estimate_from_file() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("message.txt");
    fs::write(&path, "Reply STOP to opt out\n").expect("write");

    let mut cmd = sms_meter();
    cmd.args(["estimate", "--file", path.to_str().expect("utf8 path")]);
    cmd.assert().success().stdout(predicate::str::contains("Characters: 21"));
}

#[test]
fn test_estimate_rejects_message_and_file() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("message.txt");
    fs::write(&path, "Hello").expect("write");

    let mut cmd = sms_meter();
    cmd.args(["estimate", "Hello", "--file", path.to_str().expect("utf8 path")]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot specify both MESSAGE and --file"));
}

#[test]
fn test_estimate_rejects_invalid_mode() {
    let mut cmd = sms_meter();
    cmd.args(["estimate", "--mode", "sextets", "Hello"]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid counting mode"));
}

#[test]
fn test_estimate_mode_changes_segment_math() {
    let msg = "€".repeat(81);

    let mut cmd = sms_meter();
    cmd.args(["estimate", "--json", &msg]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(parsed["unit_count"], 162);
    assert_eq!(parsed["segment_count"], 2);

    let mut cmd = sms_meter();
    cmd.args(["estimate", "--json", "--mode", "code-points", &msg]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(parsed["unit_count"], 81);
    assert_eq!(parsed["segment_count"], 1);
}

#[test]
fn test_estimate_honors_config_file() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("sms-meter.toml"), "format = 'json'\n").expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sms-meter"));
    cmd.current_dir(tmp.path());
    cmd.args(["estimate", "Hello"]);
    let out = cmd.assert().success().get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&out).expect("JSON per config");
    assert_eq!(parsed["character_count"], 5);
}

#[test]
fn test_estimate_explicit_config_overrides_mode() {
    let tmp = TempDir::new().expect("tmp");
    let cfg = tmp.path().join("custom.toml");
    fs::write(&cfg, "counting_mode = 'code-points'\n").expect("write");

    let msg = "€".repeat(81);
    let mut cmd = sms_meter();
    cmd.args(["estimate", "--json", "--config", cfg.to_str().expect("utf8 path"), &msg]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(parsed["segment_count"], 1);
}

#[test]
fn test_estimate_broken_explicit_config_fails() {
    let tmp = TempDir::new().expect("tmp");
    let cfg = tmp.path().join("broken.toml");
    fs::write(&cfg, "counting_mode = 'sextets'\n").expect("write");

    let mut cmd = sms_meter();
    cmd.args(["estimate", "--config", cfg.to_str().expect("utf8 path"), "Hello"]);
    cmd.assert().failure();
}

#[test]
fn test_inspect_flags_non_gsm_characters() {
    let mut cmd = sms_meter();
    cmd.args(["inspect", "a€🚀"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("U+0061"))
        .stdout(predicate::str::contains("gsm7-ext x2"))
        .stdout(predicate::str::contains("non-gsm"))
        .stdout(predicate::str::contains("force UCS-2"));
}

#[test]
fn test_inspect_all_gsm_has_no_warning() {
    let mut cmd = sms_meter();
    cmd.args(["inspect", "Hello"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Encoding:   GSM-7"))
        .stdout(predicate::str::contains("force UCS-2").not());
}

#[test]
fn test_estimate_empty_stdin_is_one_segment() {
    let mut cmd = sms_meter();
    cmd.arg("estimate");
    cmd.write_stdin("");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Characters: 0"))
        .stdout(predicate::str::contains("Segments:   1"));
}
