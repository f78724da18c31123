//! Integration tests for the mk binary
//!
//! Only paths that stop before a locator is dispatched are exercised here;
//! dispatching itself is covered by the dispatcher's unit tests.

mod common;

use common::{display_path, mk_command, write_file};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_version_flag() {
    let temp_dir = TempDir::new().unwrap();
    mk_command(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mk version "));
}

#[test]
fn test_short_version_beats_help() {
    let temp_dir = TempDir::new().unwrap();
    mk_command(&temp_dir)
        .args(["-h", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mk version "));
}

#[test]
fn test_help_flag() {
    let temp_dir = TempDir::new().unwrap();
    mk_command(&temp_dir)
        .args(["--refresh", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mk [options] [file|-]"))
        .stdout(predicate::str::contains("--add-style"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_missing_file_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    // current_dir() reports the canonical path
    let cwd = temp_dir.path().canonicalize().unwrap();
    let expected = cwd.join("nothere.md").display().to_string();

    mk_command(&temp_dir)
        .arg("nothere.md")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "Error: File does not exist: {}",
            expected
        )));
}

#[test]
fn test_missing_stylesheet_expands_tilde() {
    let temp_dir = TempDir::new().unwrap();
    let expected = display_path(&temp_dir, "Styles/none.css");

    mk_command(&temp_dir)
        .args(["--add-style", "~/Styles/none.css"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "Error: CSS file does not exist: {}",
            expected
        )));
}

#[test]
fn test_malformed_defaults_warns_once() {
    let temp_dir = TempDir::new().unwrap();
    mk_command(&temp_dir)
        .args(["--defaults", "good=1", "bad", "--version"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning: Invalid defaults format 'bad', expected KEY=VALUE",
        ))
        .stderr(predicate::function(|err: &str| {
            err.lines().filter(|l| l.contains("Invalid defaults format")).count() == 1
        }));
}

#[test]
fn test_invalid_scheme_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    mk_command(&temp_dir)
        .env("MK_URL_SCHEME", "not a scheme")
        .arg("--dingus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not build URL scheme"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_file(&temp_dir, "mk.yml", "url_scheme: [unterminated\n");

    mk_command(&temp_dir)
        .env("MK_CONFIG", &config)
        .arg("--dingus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    mk_command(&temp_dir)
        .env("MK_CONFIG", temp_dir.path().join("absent.yml"))
        .arg("--paste")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_scheme_is_validated() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_file(&temp_dir, "mk.yml", "url_scheme: \"9bad\"\n");

    mk_command(&temp_dir)
        .env("MK_CONFIG", &config)
        .args(["--preview", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid URL scheme '9bad'"));
}

#[test]
fn test_broken_config_does_not_block_version() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_file(&temp_dir, "mk.yml", "url_scheme: [oops\n");

    mk_command(&temp_dir)
        .env("MK_CONFIG", &config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mk version "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_config_key_does_not_block_help() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_file(&temp_dir, "mk.yml", "bogus: 1\n");

    mk_command(&temp_dir)
        .env("MK_CONFIG", &config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mk [options] [file|-]"));
}

#[test]
fn test_missing_config_target_does_not_block_version() {
    let temp_dir = TempDir::new().unwrap();
    mk_command(&temp_dir)
        .env("MK_CONFIG", temp_dir.path().join("absent.yml"))
        .arg("-v")
        .assert()
        .success();
}

#[test]
fn test_missing_file_reported_despite_broken_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_file(&temp_dir, "mk.yml", "bogus: 1\n");

    mk_command(&temp_dir)
        .env("MK_CONFIG", &config)
        .arg("nothere.md")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File does not exist"))
        .stderr(predicate::str::contains("Configuration error").not());
}
