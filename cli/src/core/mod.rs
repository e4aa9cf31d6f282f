//! # CampusBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that the
//! assistant and the command front ends are built on.
//!
//! ## Architecture
//!
//! The core infrastructure consists of three key components:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Rendering of the keyword response templates
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{CampusError, Result}; // For error handling
//! use crate::core::templating; // For keyword template rendering
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
