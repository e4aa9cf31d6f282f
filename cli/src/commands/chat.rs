//! # CampusBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A read-eval-print loop on stdin. Each line is one independent message;
//! no state is carried between turns. `bye`, `exit` or `quit` (any case)
//! ends the session, as does end of input.
//!
//! ## Examples
//!
//! ```bash
//! campusbot chat
//! printf 'hello\ntell me a joke\nbye\n' | campusbot chat
//! ```
//!
use crate::assistant::{boundary, Assistant};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

const EXIT_WORDS: [&str; 3] = ["bye", "exit", "quit"];

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Name shown in front of each reply.
    #[arg(long, default_value = "CampusBot")]
    pub name: String,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds the assistant and runs the session against the process's stdin
/// and stdout.
pub async fn handle_chat(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let (config, assistant) = super::load_assistant(config_path)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &assistant,
        &args.name,
        config.server.max_input_length,
        stdin.lock(),
        stdout.lock(),
    )
}

/// Runs the loop until an exit word or end of input.
pub fn run_session<R: BufRead, W: Write>(
    assistant: &Assistant,
    name: &str,
    max_len: usize,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "Chat with {}! Type 'bye' to quit.", name)?;

    let mut turns = 0usize;
    loop {
        write!(output, "You: ")?;
        output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            writeln!(output)?;
            break;
        }

        let trimmed = line.trim();
        if EXIT_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w)) {
            writeln!(output, "{}: Goodbye!", name)?;
            break;
        }

        let reply = boundary::respond(assistant, trimmed, max_len);
        writeln!(output, "{}: {}", name, reply)?;
        turns += 1;
    }

    debug!("Chat session ended after {} turns", turns);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::capabilities::FixedRandom;
    use std::io::Cursor;

    fn transcript(lines: &str) -> String {
        let assistant = Assistant::builtin()
            .expect("Failed to build assistant")
            .with_random(FixedRandom(0));
        let mut out = Vec::new();
        run_session(&assistant, "Bot", 200, Cursor::new(lines), &mut out)
            .expect("Session failed");
        String::from_utf8(out).expect("Output was not UTF-8")
    }

    #[test]
    fn test_session_answers_each_line_until_bye() {
        let out = transcript("hello\nsolve 2 * 3\nBYE\ncontact\n");
        assert!(out.starts_with("Chat with Bot! Type 'bye' to quit."));
        assert!(out.contains("Bot: Hello! Welcome to ABC College. How can I assist you today?"));
        assert!(out.contains("Bot: 🧮 Solution: 2 * 3 = 6"));
        assert!(out.contains("Bot: Goodbye!"));
        // Nothing after the exit word is answered.
        assert!(!out.contains("📞"));
    }

    #[test]
    fn test_session_ends_at_end_of_input() {
        let out = transcript("tell me a joke\n");
        assert!(out.contains("Bot: 😂 "));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn test_blank_line_gets_empty_message() {
        let out = transcript("   \nquit\n");
        assert!(out.contains(&format!("Bot: {}", boundary::EMPTY_MESSAGE)));
    }
}
