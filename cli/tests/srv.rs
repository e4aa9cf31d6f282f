//! # CampusBot CLI Srv Integration Tests
//!
//! File: cli/tests/srv.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for `campusbot srv`. Request handling is covered by the
//! router tests in `server_logic.rs`; these check argument parsing and
//! configuration failures, which exit before the server starts.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_srv_help_lists_flags() {
    campusbot_cmd()
        .args(["srv", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--no-cors"));
}

#[test]
fn test_srv_rejects_invalid_host_flag() {
    campusbot_cmd()
        .args(["srv", "--host", "not-an-ip"])
        .assert()
        .failure();
}

#[test]
fn test_srv_rejects_invalid_configured_host() {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("campus.toml"),
        "[server]\nhost = \"campus.local\"\n",
    )
    .expect("Failed to write config");

    isolated_cmd(dir.path())
        .args(["--config", "campus.toml", "srv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
