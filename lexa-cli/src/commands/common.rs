//! Common types and utilities for lexa commands.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// ============================================================================
// Output Format
// ============================================================================

/// How a token stream is written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `(KIND, lexeme)` pair per line
    #[default]
    Text,
    /// A JSON array of `{"kind", "lexeme"}` objects
    Json,
}

impl OutputFormat {
    /// Returns the name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Default prompt written before reading the expression from standard input.
pub const DEFAULT_PROMPT: &str = "Enter an expression: ";

/// Header line written before tokens in text output.
pub const TOKENS_HEADER: &str = "Tokens:";

/// Strips one trailing line terminator (`\n` or `\r\n`).
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
