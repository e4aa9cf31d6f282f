//! # CampusBot Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module turns the `campusbot srv` command-line arguments and the
//! `[server]` section of the loaded configuration into the single
//! `ServerConfig` the server logic runs with.
//!
//! ## Architecture
//!
//! Precedence, highest first:
//! 1. Explicit command-line flags (`--port`, `--host`, `--no-cors`)
//! 2. The `[server]` table from `--config FILE`, the project file or the user file
//! 3. Built-in defaults (`127.0.0.1:8000`, CORS on, 200 character cap)
//!
//! ## Examples
//!
//! ```rust,ignore
//! let config = core::config::load_config(None)?;
//! let server = ServerConfig::resolve(&args, &config)?;
//! println!("Listening on: {}:{}", server.host, server.port);
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use std::net::IpAddr;
use tracing::debug;

/// # Server Command Arguments (`SrvArgs`)
///
/// Flags left unset fall back to the configuration file and then to the
/// built-in defaults.
#[derive(Parser, Debug, Default)]
pub struct SrvArgs {
    /// Sets the network port the server will listen on (default 8000).
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Sets the network IP address the server will bind to.
    /// Use `0.0.0.0` to bind to all available network interfaces, or `127.0.0.1`
    /// (the default) to only accept connections from the local machine.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The network port the server will try first.
    pub port: u16,

    /// The network IP address the server will bind to.
    pub host: IpAddr,

    /// Indicates whether permissive CORS headers are sent.
    pub enable_cors: bool,

    /// Messages longer than this many characters are rejected by the boundary.
    pub max_input_length: usize,
}

impl ServerConfig {
    /// Merges command-line flags over the loaded configuration.
    pub fn resolve(args: &SrvArgs, config: &Config) -> Result<Self> {
        let file_host = config.host_addr()?;

        let resolved = Self {
            port: args.port.unwrap_or(config.server.port),
            host: args.host.unwrap_or(file_host),
            enable_cors: !args.no_cors && config.server.enable_cors,
            max_input_length: config.server.max_input_length,
        };
        debug!("Resolved server config: {:?}", resolved);
        Ok(resolved)
    }
}
