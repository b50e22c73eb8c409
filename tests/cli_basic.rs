//! Integration tests for basic CLI behavior.
//!
//! Tests that the binary exists, accepts standard flags, and the handler
//! inspection subcommands report the registry.

#![allow(deprecated)] // cargo_bin deprecation: replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `linkclip` binary with an isolated config.
fn linkclip() -> Command {
    let mut cmd = Command::cargo_bin("linkclip").expect("binary 'linkclip' should be built");
    cmd.arg("--config")
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/config.toml"));
    cmd
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    linkclip()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: linkclip"))
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("handlers"))
        .stdout(predicate::str::contains("resolve"));
}

#[test]
fn version_flag_shows_semver() {
    Command::cargo_bin("linkclip")
        .expect("binary 'linkclip' should be built")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^linkclip \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn no_args_shows_error_and_usage() {
    Command::cargo_bin("linkclip")
        .expect("binary 'linkclip' should be built")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: linkclip"));
}

#[test]
fn invalid_subcommand_fails() {
    linkclip()
        .arg("this-is-not-a-real-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ─── Subcommand help ─────────────────────────────────────────────────────────

#[test]
fn copy_help() {
    linkclip()
        .args(["copy", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<URL>"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--html"))
        .stdout(predicate::str::contains("--bridge"))
        .stdout(predicate::str::contains("--print"));
}

// ─── Registry inspection ─────────────────────────────────────────────────────

#[test]
fn handlers_lists_youtube_then_default() {
    linkclip()
        .arg("handlers")
        .assert()
        .success()
        .stdout(predicate::str::contains("youtube"))
        .stdout(predicate::str::contains(r"youtube\.com/watch|youtu\.be/"))
        .stdout(predicate::str::is_match(r"(?s)youtube.*opengraph\s+\(default\)").unwrap());
}

#[test]
fn resolve_youtube_urls() {
    for url in [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://youtu.be/dQw4w9WgXcQ",
        "https://YOUTUBE.COM/WATCH?v=abc",
    ] {
        linkclip()
            .args(["resolve", url])
            .assert()
            .success()
            .stdout("youtube\n");
    }
}

#[test]
fn resolve_other_urls_to_default() {
    for url in ["https://example.com/", "https://www.youtube.com/@channel", "not even a url"] {
        linkclip()
            .args(["resolve", url])
            .assert()
            .success()
            .stdout("opengraph\n");
    }
}

#[test]
fn invalid_config_file_fails() {
    Command::cargo_bin("linkclip")
        .expect("binary 'linkclip' should be built")
        .args(["--config", "/nonexistent/linkclip.toml", "handlers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
