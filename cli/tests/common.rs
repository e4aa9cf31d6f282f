//! # CampusBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and drives the compiled `campusbot` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get CampusBot Command (`campusbot_cmd`)
///
/// Creates an `assert_cmd::Command` pointing to the compiled `campusbot` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn campusbot_cmd() -> Command {
    Command::cargo_bin("campusbot").expect("Failed to find campusbot binary for testing")
}

/// # Isolated CampusBot Command (`isolated_cmd`)
///
/// Like `campusbot_cmd`, but runs inside `dir` with `HOME` and
/// `XDG_CONFIG_HOME` pointing there too, so neither a user configuration
/// file nor a project file outside `dir` is picked up.
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = campusbot_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}
