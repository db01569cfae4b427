//! Help surface tests.
//!
//! Keeps the advertised command tree honest without snapshotting the
//! full clap output.

use assert_cmd::Command;
use predicates::prelude::*;

fn da6() -> Command {
    Command::cargo_bin("da6").expect("binary should build")
}

#[test]
fn test_main_help_lists_every_command() {
    da6()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("home"))
        .stdout(predicate::str::contains("blog"))
        .stdout(predicate::str::contains("gallery"))
        .stdout(predicate::str::contains("night"))
        .stdout(predicate::str::contains("tags"))
        .stdout(predicate::str::contains("content"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_main_help_names_the_global_flags() {
    da6()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--data-dir"))
        .stdout(predicate::str::contains("--content"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_blog_list_help_shows_filters() {
    da6()
        .args(["blog", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--tag"))
        .stdout(predicate::str::contains("--quiet"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_unknown_command_fails_with_usage() {
    da6()
        .arg("teleport")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    da6()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3.1"));
}
