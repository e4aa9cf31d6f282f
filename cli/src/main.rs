//! # CampusBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the CampusBot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`ask`, `chat`, `srv`) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in `campusbot::commands`
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # One question, one answer
//! campusbot ask "tell me about cse"
//!
//! # Interactive session with debug logging
//! campusbot -vv chat
//!
//! # HTTP front end using a specific configuration file
//! campusbot --config ./campus.toml srv --port 9000
//! ```
//!
use campusbot::commands;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "campusbot",
    about = "🎓 CampusBot 🤖: Rule-based campus information assistant",
    long_about = "Answers questions about courses, professors, admissions and contacts.\n\
                  Also tells the time, tells jokes, builds search links and solves arithmetic.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Read configuration from this file instead of the project/user files.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args, config_path).await,
        Commands::Chat(args) => commands::chat::handle_chat(args, config_path).await,
        Commands::Srv(args) => commands::srv::handle_srv(args, config_path).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
