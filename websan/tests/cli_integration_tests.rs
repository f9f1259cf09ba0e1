// websan/tests/cli_integration_tests.rs
//! Command-line integration tests for the `websan` binary.
//!
//! These tests execute the real executable with `assert_cmd`, feeding input
//! via stdin or temporary files and asserting on stdout, stderr, and exit
//! codes. `tempfile` keeps the file-based tests isolated.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to run `websan` with the given stdin input and arguments.
fn run_websan(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("websan").unwrap();
    cmd.args(args);
    cmd.write_stdin(input.to_string());
    cmd.assert()
}

#[test]
fn sanitize_escapes_script_block_from_stdin() {
    run_websan("<script>alert(1)</script>", &["sanitize"])
        .success()
        .stdout(predicate::str::contains(
            "&lt;script&gt;alert[1)&lt;/script&gt;",
        ));
}

#[test]
fn sanitize_prints_summary_to_stderr() {
    run_websan("<div onclick=\"x\">", &["sanitize"])
        .success()
        .stdout(predicate::str::contains("&lt;div oncl1ck=&quot;x&quot;&gt;"))
        .stderr(predicate::str::contains("filter summary"))
        .stderr(predicate::str::contains("on_click"));
}

#[test]
fn sanitize_no_summary_flag_suppresses_summary() {
    run_websan("<div onclick=\"x\">", &["sanitize", "--no-summary"])
        .success()
        .stderr(predicate::str::contains("filter summary").not());
}

#[test]
fn sanitize_reports_when_nothing_matched() {
    run_websan("plain text", &["sanitize"])
        .success()
        .stdout(predicate::str::contains("plain text"))
        .stderr(predicate::str::contains("no rules matched"));
}

#[test]
fn sanitize_writes_output_file() -> Result<()> {
    let input_file = NamedTempFile::new()?;
    fs::write(input_file.path(), "eval (x)")?;
    let output_file = NamedTempFile::new()?;

    let mut cmd = Command::cargo_bin("websan").unwrap();
    cmd.args([
        "sanitize",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
    ]);
    cmd.assert().success();

    let written = fs::read_to_string(output_file.path())?;
    assert_eq!(written, "eval[x)\n");
    Ok(())
}

#[test]
fn sanitize_accepts_custom_rule_file() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: single_quote
    category: quotes
    pattern: "'"
    replace_with: "&#x27;"
"#;
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(yaml_content.as_bytes())?;

    let mut cmd = Command::cargo_bin("websan").unwrap();
    cmd.args(["sanitize", "--config", config_file.path().to_str().unwrap()]);
    cmd.write_stdin("it's".to_string());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("it&#x27;s"));
    Ok(())
}

#[test]
fn sanitize_disable_flag_skips_named_rule() {
    run_websan("<div onclick=x>", &["sanitize", "-x", "on_click"])
        .success()
        .stdout(predicate::str::contains("&lt;div onclick=x&gt;"));
}

#[test]
fn check_email_accepts_valid_address() {
    run_websan("", &["check-email", "a@b.com"])
        .success()
        .stdout(predicate::str::contains("a@b.com: valid"));
}

#[test]
fn check_email_rejects_invalid_address_with_exit_code() {
    run_websan("", &["check-email", "foo[]#plop.com"])
        .failure()
        .code(1)
        .stdout(predicate::str::contains("foo[]#plop.com: invalid"));
}

#[test]
fn check_email_accepts_ip_literal_domain() {
    run_websan("", &["check-email", "user@[192.168.0.1]"])
        .success()
        .stdout(predicate::str::contains("user@[192.168.0.1]: valid"));
}

#[test]
fn check_email_reads_addresses_from_stdin() {
    run_websan("a@b.com\nnot an address\n", &["check-email"])
        .failure()
        .code(1)
        .stdout(predicate::str::contains("a@b.com: valid"))
        .stdout(predicate::str::contains("not an address: invalid"));
}
