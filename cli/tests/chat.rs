//! # CampusBot CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Feeds scripted input to `campusbot chat` through stdin.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_chat_session_until_exit() {
    let dir = tempdir().expect("Failed to create temp dir");
    isolated_cmd(dir.path())
        .arg("chat")
        .write_stdin("solve 7 - 10\ncontact\nexit\nhello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat with CampusBot! Type 'bye' to quit."))
        .stdout(predicate::str::contains("CampusBot: 🧮 Solution: 7 - 10 = -3"))
        .stdout(predicate::str::contains("CampusBot: 📞 Contact Us:"))
        .stdout(predicate::str::contains("CampusBot: Goodbye!"))
        .stdout(predicate::str::contains("Welcome to").not());
}

#[test]
fn test_chat_custom_name_and_end_of_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    isolated_cmd(dir.path())
        .args(["chat", "--name", "Helper"])
        .write_stdin("list all courses\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Helper: 📚 Available Courses:"))
        .stdout(predicate::str::contains("Goodbye").not());
}
