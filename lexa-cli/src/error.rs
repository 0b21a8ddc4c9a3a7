//! Error handling module for the lexa CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use lexa_lex::LexError;
use thiserror::Error;

/// Main error type for the lexa CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when configuration cannot be found, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
