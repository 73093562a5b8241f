//! Integration tests for the `tint` CLI binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn tint() -> Command {
    let mut cmd = Command::cargo_bin("tint").unwrap();
    cmd.env_remove("NO_COLOR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_paint_red_hello() {
    tint()
        .args(["paint", "red", "hello"])
        .assert()
        .success()
        .stdout("\x1b[1;31mhello\x1b[0m\n");
}

#[test]
fn test_paint_joins_text_with_spaces() {
    tint()
        .args(["paint", "lgreen", "all", "good"])
        .assert()
        .success()
        .stdout("\x1b[1;92mall good\x1b[0m\n");
}

#[test]
fn test_paint_without_text_prints_nothing() {
    tint().args(["paint", "red"]).assert().success().stdout("");
}

#[test]
fn test_paint_unknown_color_is_soft() {
    tint()
        .args(["paint", "mauve", "hi"])
        .assert()
        .success()
        .stdout("Invalid color: mauve\n");
}

#[test]
fn test_format_has_no_newline() {
    tint()
        .args(["format", "green", "3 items"])
        .assert()
        .success()
        .stdout("\x1b[1;32m3 items\x1b[0m");
}

#[test]
fn test_format_unknown_color() {
    tint()
        .args(["format", "mauve", "hi"])
        .assert()
        .success()
        .stdout("Invalid color: mauve");
}

#[test]
fn test_level_warning() {
    tint()
        .args(["level", "warning", "disk", "low"])
        .assert()
        .success()
        .stdout("\x1b[1;33m[Warning] disk low\x1b[0m\n");
}

#[test]
fn test_compact_err_prefix_only() {
    tint()
        .args(["level", "--compact", "err"])
        .assert()
        .success()
        .stdout("\x1b[1;31merr: \x1b[0m\n");
}

#[test]
fn test_unknown_level_is_soft() {
    tint()
        .args(["level", "ok", "done"])
        .assert()
        .success()
        .stdout("Invalid level: ok\n");
}

#[test]
fn test_no_color_flag() {
    tint()
        .args(["--no-color", "paint", "blue", "x=7"])
        .assert()
        .success()
        .stdout("x=7\n");
}

#[test]
fn test_respects_no_color_env() {
    tint()
        .env("NO_COLOR", "1")
        .args(["level", "info", "ready"])
        .assert()
        .success()
        .stdout("[Info] ready\n");
}

#[test]
fn test_no_color_skips_name_lookup() {
    tint()
        .args(["--no-color", "paint", "mauve", "hi"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn test_colors_lists_every_color() {
    tint()
        .arg("colors")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 31  \x1b[1;31mred\x1b[0m\n"))
        .stdout(predicate::str::contains(" 97  \x1b[1;97mlwhite\x1b[0m\n"));
}

#[test]
fn test_colors_json_is_valid() {
    let output = tint()
        .args(["colors", "--json"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let colors = json.as_array().unwrap();
    assert_eq!(colors.len(), 16);
    assert_eq!(colors[8]["name"], "gray");
    assert_eq!(colors[8]["code"], 90);
}

#[test]
fn test_levels_compact_json() {
    let output = tint()
        .args(["levels", "--compact", "--json"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[3]["name"], "inf");
    assert_eq!(json[3]["label"], "info: ");
    assert_eq!(json[3]["color"], "blue");
}

#[test]
fn test_levels_listing_without_color() {
    tint()
        .args(["--no-color", "levels"])
        .assert()
        .success()
        .stdout(predicate::str::contains("success  [Success] green\n"));
}

#[test]
fn test_strip_removes_color_codes() {
    tint()
        .arg("strip")
        .write_stdin("\x1b[1;31mhello\x1b[0m\n")
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_demo_runs_every_helper() {
    tint()
        .args(["--no-color", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("black\nred\n"))
        .stdout(predicate::str::contains("[Error] it broke\n[Error] \n"))
        .stdout(predicate::str::contains("[Warning] disk 93% full\n"))
        .stdout(predicate::str::contains("[Info] 12 files\n"))
        .stdout(predicate::str::contains("[Debug] \n"))
        .stdout(predicate::str::contains("err: it broke\nerr: \nwarn: disk 93% full\n"))
        .stdout(predicate::str::ends_with("debug: \n"));
}

#[test]
fn test_demo_colored_output() {
    tint()
        .arg("demo")
        .assert()
        .success()
        // the empty red(&[]) between black and red writes nothing
        .stdout(predicate::str::starts_with(
            "\x1b[1;30mblack\x1b[0m\n\x1b[1;31mred\x1b[0m\n\x1b[1;32mgreen\x1b[0m\n",
        ))
        .stdout(predicate::str::contains(
            "\x1b[1;31m[Error] it broke\x1b[0m\n\x1b[1;31m[Error] \x1b[0m\n",
        ))
        .stdout(predicate::str::contains(
            "\x1b[1;33m[Warning] disk 93% full\x1b[0m\n",
        ))
        .stdout(predicate::str::contains(
            "\x1b[1;31merr: it broke\x1b[0m\n\x1b[1;31merr: \x1b[0m\n",
        ))
        .stdout(predicate::str::ends_with("\x1b[1;35mdebug: \x1b[0m\n"));
}

#[test]
fn test_help_flag() {
    tint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("colored and level-prefixed"));
}

#[test]
fn test_completions_bash() {
    tint()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tint"));
}
