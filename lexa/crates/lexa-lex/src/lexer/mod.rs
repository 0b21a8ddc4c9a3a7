//! Lexer module.
//!
//! The tokenizer is split by scan state:
//! - `core` - Tokenizer struct, driver loop and finalization
//! - `start` - Start state dispatch
//! - `identifier` - Identifier accumulation
//! - `number` - Number accumulation

mod core;
mod identifier;
mod number;
mod start;

pub use self::core::{tokenize, transition, ScanState, Step, Tokenizer};
