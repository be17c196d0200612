//! Integration tests for timestamp display options.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn prefmt() -> Command {
    Command::cargo_bin("prefmt").unwrap()
}

const INPUT: &str = r#"{"level":"info","msg":"hi","time":"2026-01-15T10:30:00Z"}"#;

#[test]
fn custom_timestamp_format_applied() {
    prefmt()
        .args(["--color=never", "-t", "%Y-%m-%dT%H:%M:%S"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("time=\"2026-01-15T10:30:00\" level=info msg=hi \n");
}

#[test]
fn colon_free_timestamp_format_stays_unquoted() {
    prefmt()
        .args(["--color=never", "-t", "%Y-%m-%d"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("time=2026-01-15 level=info msg=hi \n");
}

#[test]
fn default_stamp_format_is_quoted() {
    prefmt()
        .arg("--color=never")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("time=\"Jan 15 10:30:00\" level=info msg=hi \n");
}

#[test]
fn no_timestamp_omits_time_key() {
    prefmt()
        .args(["--color=never", "--no-timestamp"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("level=info msg=hi \n");
}

#[test]
fn short_timestamp_block_in_colored_mode() {
    let output = prefmt()
        .args(["--color=always", "--short-timestamp"])
        .write_stdin(INPUT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[0000]"), "got: {stdout:?}");
}

#[test]
fn malformed_timestamp_format_fails_with_config_error() {
    prefmt()
        .args(["--color=never", "-t", "%Y %!"])
        .write_stdin(INPUT)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid timestamp format"));
}

#[test]
fn unparseable_time_value_falls_back_to_now() {
    let input = r#"{"level":"info","msg":"hi","time":"not-a-timestamp"}"#;
    prefmt()
        .args(["--color=never", "-t", "%Y"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("time=2"));
}
