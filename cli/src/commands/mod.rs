//! # CampusBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the CampusBot CLI. Every
//! command builds one `Assistant` from the effective configuration and sends
//! user text through `assistant::boundary::respond`.
//!
//! ## Command Groups
//!
//! - `ask`: Answer a single message given on the command line
//! - `chat`: Interactive read-eval loop on stdin
//! - `srv`: HTTP front end (`/get_response`, `/health`)
//!
use crate::assistant::Assistant;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;

/// One-shot question answering.
pub mod ask;
/// Interactive terminal session.
pub mod chat;
/// HTTP server. Includes configuration and server logic.
pub mod srv;

/// Loads the effective configuration and builds the assistant from it.
///
/// `config_path` is the global `--config` flag; when absent the project and
/// user configuration files are merged over the built-in defaults.
pub fn load_assistant(config_path: Option<&Path>) -> Result<(Config, Assistant)> {
    let config = config::load_config(config_path)?;
    let assistant =
        Assistant::from_config(&config).context("Failed to build assistant from configuration")?;
    Ok((config, assistant))
}
