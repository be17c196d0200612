//! Integration tests for basic stdin->stdout piping.

use assert_cmd::Command;

#[allow(deprecated)]
fn prefmt() -> Command {
    Command::cargo_bin("prefmt").unwrap()
}

#[test]
fn empty_stdin_exits_zero() {
    prefmt().write_stdin("").assert().success().stdout("");
}

#[test]
fn single_json_line_outputs_logfmt() {
    let input = r#"{"level":"info","msg":"hello","port":8080}"#;
    prefmt()
        .args(["--color=never", "--no-timestamp"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("level=info msg=hello port=8080 \n");
}

#[test]
fn non_json_lines_pass_through() {
    prefmt()
        .arg("--color=never")
        .write_stdin("plain text line\n")
        .assert()
        .success()
        .stdout("plain text line\n");
}

#[test]
fn mixed_input_interleaves_correctly() {
    let input = concat!(
        "starting up\n",
        r#"{"level":"warn","msg":"low disk"}"#,
        "\n",
        "done\n"
    );
    prefmt()
        .args(["--color=never", "--no-timestamp"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("starting up\nlevel=warning msg=\"low disk\" \ndone\n");
}

#[test]
fn fields_sorted_alphabetically_by_default() {
    let input = r#"{"level":"info","msg":"test","zebra":"z","alpha":"a","middle":"m"}"#;
    prefmt()
        .args(["--color=never", "--no-timestamp"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("level=info msg=test alpha=a middle=m zebra=z \n");
}

#[test]
fn no_sort_preserves_input_order() {
    let input = r#"{"level":"info","msg":"test","zebra":"z","alpha":"a"}"#;
    prefmt()
        .args(["--color=never", "--no-timestamp", "--no-sort"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("level=info msg=test zebra=z alpha=a \n");
}

#[test]
fn nested_object_rendered_as_compact_json() {
    let input = r#"{"level":"info","msg":"real","extra":{"msg":1}}"#;
    prefmt()
        .args(["--color=never", "--no-timestamp"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("level=info msg=real extra={\"msg\":1} \n");
}

#[test]
fn warn_level_uses_full_name_in_logfmt() {
    let input = r#"{"level":"warn","msg":"real","user_level":"x"}"#;
    prefmt()
        .args(["--color=never", "--no-timestamp"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("level=warning msg=real user_level=x \n");
}

#[test]
fn quoted_values_with_spaces() {
    let input = r#"{"level":"info","msg":"ok","file":"hello-world.txt","note":"hello world"}"#;
    prefmt()
        .args(["--color=never", "--no-timestamp"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("level=info msg=ok file=hello-world.txt note=\"hello world\" \n");
}

#[test]
fn numeric_pino_level_mapped() {
    let input = r#"{"level":50,"msg":"boom"}"#;
    prefmt()
        .args(["--color=never", "--no-timestamp"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("level=error msg=boom \n");
}
