//! # CampusBot Input Boundary
//!
//! File: cli/src/assistant/boundary.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every front end (`ask`, `chat`, `srv`) passes raw user text through
//! `respond` instead of calling `Assistant::handle_query` directly. The
//! boundary:
//! - rejects blank messages,
//! - rejects messages longer than the configured cap (counted in characters),
//! - converts any unexpected failure inside the assistant into a generic
//!   apology, so callers always receive a message and never a raw failure.
//!
use super::Assistant;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, warn};

/// Default maximum message length, in characters.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 200;

pub const EMPTY_MESSAGE: &str = "❗ Please enter a message.";
pub const GENERIC_FAILURE: &str = "⚠️ An error occurred. Please try again.";

/// The message returned for input longer than `max_len` characters.
pub fn too_long_message(max_len: usize) -> String {
    format!("⚠️ Message exceeds {} characters.", max_len)
}

/// Guards and answers one raw message.
pub fn respond(assistant: &Assistant, raw: &str, max_len: usize) -> String {
    let message = raw.trim();
    if message.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let length = message.chars().count();
    if length > max_len {
        warn!(
            "Rejected message of {} characters (limit {})",
            length, max_len
        );
        return too_long_message(max_len);
    }

    match panic::catch_unwind(AssertUnwindSafe(|| assistant.handle_query(message))) {
        Ok(response) => response,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!("Error processing query '{}': {}", message, reason);
            GENERIC_FAILURE.to_string()
        }
    }
}
