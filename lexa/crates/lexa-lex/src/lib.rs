//! lexa-lex - Three-state character tokenizer
//!
//! This crate turns a line of text such as `x = 10 + 20;` into a sequence of
//! classified tokens. It is the first stage in front of a parser and does
//! nothing beyond classification.
//!
//! # Example Usage
//!
//! ```
//! use lexa_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("total = (a1 + 42);").unwrap();
//!
//! for token in &tokens {
//!     println!("{}", token);
//! }
//!
//! assert_eq!(tokens[0].kind(), TokenKind::Identifier);
//! assert_eq!(tokens[0].lexeme(), "total");
//! assert_eq!(tokens.len(), 8);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token stream types
//! - [`lexer`] - Scan states, transition function and tokenizer
//! - [`cursor`] - Character cursor over the input
//! - [`class`] - Character classification
//! - [`error`] - Error type
//!
//! # Token Kinds
//!
//! | Kind | Lexemes |
//! |---|---|
//! | `IDENTIFIER` | a letter followed by letters and digits |
//! | `NUMBER` | one or more decimal digits |
//! | `OPERATOR` | `+` `-` `*` `/` |
//! | `ASSIGNMENT` | `=` |
//! | `PARENTHESIS` | `(` `)` |
//! | `SEMICOLON` | `;` |
//!
//! Whitespace separates tokens and is otherwise ignored. Any other
//! character stops the scan with [`LexError::InvalidCharacter`].
//!
//! # Scan Model
//!
//! The tokenizer is a three-state machine (`Start`, `InIdentifier`,
//! `InNumber`). Identifiers and numbers are extended greedily; the first
//! character that does not fit closes the token and is then evaluated
//! again from `Start`. Single-character tokens are emitted directly from
//! `Start`. Whatever is still buffered at end of input becomes the last
//! token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod class;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use class::{classify, CharClass};
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{tokenize, transition, ScanState, Step, Tokenizer};
pub use token::{Token, TokenKind, TokenStream};
