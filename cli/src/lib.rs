//! # CampusBot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Library half of the `campusbot` package. The binary in `main.rs` is a thin
//! Clap front end over these modules; integration tests and the HTTP handlers
//! use the same entry points.
//!
//! ## Architecture
//!
//! - `assistant`: Query classification, dispatch, knowledge store and the input boundary
//! - `eval`: Arithmetic expression evaluator used by the math handler
//! - `core`: Configuration, error types and response templating
//! - `commands`: The `ask`, `chat` and `srv` command handlers
//!
pub mod assistant;
pub mod commands;
pub mod core;
pub mod eval;
