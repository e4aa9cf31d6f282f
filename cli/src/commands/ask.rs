//! # CampusBot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Answers a single message and exits. All remaining command-line words are
//! joined with single spaces to form the message, so quoting is optional.
//!
//! ## Examples
//!
//! ```bash
//! campusbot ask tell me a joke
//! campusbot ask "solve (3 + 5) * 2"
//! ```
//!
use crate::assistant::boundary;
use crate::core::error::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to answer. Multiple words are joined with spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub message: Vec<String>,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Builds the assistant from the effective configuration, passes the joined
/// message through the boundary and prints the response on stdout. Empty and
/// over-long messages still produce a response; only configuration problems
/// are errors.
pub async fn handle_ask(args: AskArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);

    let (config, assistant) = super::load_assistant(config_path)?;
    let message = args.message.join(" ");
    let response = boundary::respond(&assistant, &message, config.server.max_input_length);

    println!("{}", response);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_args_join_words() {
        let args = AskArgs::parse_from(["ask", "details", "about", "cse"]);
        assert_eq!(args.message.join(" "), "details about cse");
    }

    #[test]
    fn test_ask_args_accept_leading_hyphen() {
        let args = AskArgs::parse_from(["ask", "solve", "-3", "+", "5"]);
        assert_eq!(args.message, vec!["solve", "-3", "+", "5"]);
    }

    #[test]
    fn test_ask_args_allow_empty_message() {
        let args = AskArgs::parse_from(["ask"]);
        assert!(args.message.is_empty());
    }
}
