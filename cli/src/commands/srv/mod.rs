//! # CampusBot HTTP Front End
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Serves the assistant over HTTP for browser or script clients, with
//! configurable options for:
//! - CORS (Cross-Origin Resource Sharing)
//! - Port binding (with automatic fallback if port is in use)
//! - Host interface binding
//!
//! ## Architecture
//!
//! - `config.rs`: Merging command-line flags with the `[server]` configuration
//! - `server_logic.rs`: Routes, handlers and the Axum server loop
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the default 127.0.0.1:8000
//! campusbot srv
//!
//! # Specify a port and host interface, without CORS headers
//! campusbot srv --port 9000 --host 0.0.0.0 --no-cors
//!
//! # Ask a question
//! curl 'http://127.0.0.1:8000/get_response?message=tell+me+about+cse'
//! ```
//!
use crate::core::error::Result;
use std::path::Path;
use tracing::info;

pub use config::SrvArgs;

/// Merges command-line flags with the loaded server settings.
pub mod config;

/// Contains the Axum-based HTTP server implementation.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// Loads the configuration, builds the assistant, resolves the effective
/// server settings and runs the server until shutdown.
pub async fn handle_srv(args: SrvArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let (config, assistant) = super::load_assistant(config_path)?;
    let server_config = config::ServerConfig::resolve(&args, &config)?;
    info!("Effective server config: {:?}", server_config);

    server_logic::run_server(server_config, assistant).await
}
