//! End-to-end runs of the object-oriented template binary.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;

fn script_class_tpl() -> Command {
    let mut cmd = Command::cargo_bin("script_class_tpl").unwrap();
    cmd.env_remove("NO_COLOR");
    cmd
}

#[test]
fn hi_prints_one_info_line() {
    script_class_tpl()
        .arg("--hi")
        .assert()
        .success()
        .stdout("Hi~ this is a custom method example\n");
}

#[test]
fn quiet_hides_the_greeting() {
    script_class_tpl().args(["-q", "--hi"]).assert().success().stdout("");
}

#[test]
fn version_prints_name_and_version() {
    script_class_tpl().arg("--version").assert().success().stdout("script_class_tpl 1.0.0\n");
    script_class_tpl().args(["-d", "-q", "-V"]).assert().success().stdout("script_class_tpl 1.0.0\n");
}

#[test]
fn no_action_prints_help() {
    script_class_tpl()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--print_tests"))
        .stdout(predicate::str::contains("Update log:"));
}

#[test]
fn exclusive_groups_reject_pairs() {
    for pair in [
        ["-q", "-v"],
        ["--quiet", "--verbose"],
        ["-V", "--hi"],
        ["--hi", "--print_tests"],
        ["--print_tests", "-V"],
    ] {
        script_class_tpl()
            .args(pair)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("cannot be used with"));
    }
}

#[test]
fn unknown_flag_fails() {
    script_class_tpl().arg("--nope").assert().failure().code(2);
}

#[cfg(unix)]
#[test]
fn print_tests_ends_with_pwd_output() {
    let output = script_class_tpl()
        .arg("--print_tests")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert!(lines[0].contains(" Log demo "));
    assert!(stdout.contains("[error] This is script_class_tpl (1.0.0)"));
    assert!(lines[lines.len() - 2].starts_with("[fatal]"), "{stdout}");
    assert!(lines[lines.len() - 1].starts_with('/'), "{stdout}");
    assert!(!stdout.contains("[debug]"));
    assert!(!stdout.contains("[verbose]"));
}

#[test]
fn debug_lines_carry_timestamps() {
    let output = script_class_tpl().args(["-d", "--hi"]).output().unwrap();
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stamped = Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] ").unwrap();
    assert!(stdout.lines().all(|line| stamped.is_match(line)), "{stdout}");
    assert!(stdout.contains("[FUNC] script.rs:"));
    assert!(stdout.contains("Hi~ this is a custom method example"));
}
