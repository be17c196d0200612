//! Integration tests for color control: `NO_COLOR`, `--color` flag, `TERM`.

use assert_cmd::Command;

#[allow(deprecated)]
fn prefmt() -> Command {
    Command::cargo_bin("prefmt").unwrap()
}

const INPUT: &str = r#"{"level":"info","msg":"hello"}"#;

#[test]
fn color_never_disables_ansi() {
    let output = prefmt()
        .arg("--color=never")
        .write_stdin(INPUT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("\x1b["),
        "should not contain ANSI escapes with --color=never"
    );
}

#[test]
fn color_always_enables_ansi() {
    let output = prefmt()
        .arg("--color=always")
        .write_stdin(INPUT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\x1b["),
        "should contain ANSI escapes with --color=always"
    );
    assert!(stdout.contains("INFO"), "colored mode uses the level badge");
}

#[test]
fn auto_without_tty_emits_logfmt() {
    let output = prefmt().write_stdin(INPUT).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\x1b["));
    assert!(stdout.contains("level=info"));
}

#[test]
fn warn_badge_is_literal_warn() {
    let output = prefmt()
        .args(["--color=always", "--no-timestamp"])
        .write_stdin(r#"{"level":"warning","msg":"careful"}"#)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WARN"), "got: {stdout:?}");
    assert!(!stdout.contains("WARNING"));
}

#[test]
fn prefix_tag_extracted_in_colored_mode() {
    let output = prefmt()
        .args(["--color=always", "--no-timestamp"])
        .write_stdin(r#"{"level":"info","msg":"[worker] started job"}"#)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("worker:"), "got: {stdout:?}");
    assert!(!stdout.contains("[worker]"));
    assert!(stdout.contains("started job"));
}

#[test]
fn explicit_prefix_field_wins() {
    let output = prefmt()
        .args(["--color=always", "--no-timestamp"])
        .write_stdin(r#"{"level":"info","msg":"[worker] go","prefix":"api"}"#)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("api:"), "got: {stdout:?}");
    assert!(stdout.contains("[worker] go"));
}

#[test]
fn debug_line_with_caller_shows_diagnostic() {
    let input =
        r#"{"level":"debug","msg":"probe","func":"db.Query","file":"db/query.go","line":88}"#;
    let output = prefmt()
        .args(["--color=always", "--no-timestamp"])
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("[db.Query][query.go][88]"),
        "got: {stdout:?}"
    );
}
