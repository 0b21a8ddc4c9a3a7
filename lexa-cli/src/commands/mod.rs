//! Command modules for the lexa CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod init;
pub mod tokenize;

// Re-export command types and functions
pub use init::{run_init, InitArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};
