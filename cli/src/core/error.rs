//! # CampusBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used while *building* the responder:
//! loading configuration, validating the knowledge tables, rendering the
//! keyword templates and compiling the intent patterns.
//!
//! Answering a query never produces one of these errors. Every query-time
//! condition (empty input, no match, a malformed math expression) is an
//! ordinary response string. Errors only exist up to the point where an
//! `Assistant` has been constructed.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CampusError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! if course.key.is_empty() {
//!     return Err(CampusError::Knowledge("Course key cannot be empty.".into()))?;
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the CampusBot application.
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Knowledge store error: {0}")]
    Knowledge(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Invalid intent pattern: {source}")]
    Pattern {
        #[from]
        source: regex::Error,
    },

    #[error("Invalid search endpoint: {source}")]
    SearchEndpoint {
        #[from]
        source: url::ParseError,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = CampusError::Config("Missing setting 'foo'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'foo'"
        );

        let knowledge_err = CampusError::Knowledge("Duplicate course key 'cse'.".into());
        assert_eq!(
            knowledge_err.to_string(),
            "Knowledge store error: Duplicate course key 'cse'."
        );
    }

    #[test]
    fn test_url_error_converts() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: CampusError = parse_err.into();
        assert!(err.to_string().starts_with("Invalid search endpoint:"));
    }
}
