//! Core tokenizer implementation.
//!
//! This module contains the scan states, the transition function that
//! combines the per-state rules, and the [`Tokenizer`] that drives it over
//! an input string.

use tracing::{debug, trace};

use super::{identifier, number, start};
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind, TokenStream};

/// The mode the tokenizer is in between characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Between tokens. The buffer is empty.
    #[default]
    Start,
    /// Accumulating an identifier.
    InIdentifier,
    /// Accumulating a number.
    InNumber,
}

/// The effect of one character on the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Push the character onto the buffer and move to the given state.
    Append(ScanState),
    /// Emit the character as a single-character token of this kind.
    Emit(TokenKind),
    /// Ignore the character.
    Skip,
    /// Close the buffered token as this kind, then evaluate the same
    /// character again from [`ScanState::Start`].
    Finalize(TokenKind),
    /// The character is not part of the language.
    Reject,
}

/// Computes what `state` does with `c`.
///
/// This is the whole transition table. It is pure: applying the returned
/// [`Step`] to a buffer and token list is up to the caller.
///
/// ```
/// use lexa_lex::{transition, ScanState, Step, TokenKind};
///
/// assert_eq!(transition(ScanState::Start, 'a'), Step::Append(ScanState::InIdentifier));
/// assert_eq!(transition(ScanState::InNumber, 'a'), Step::Finalize(TokenKind::Number));
/// ```
pub fn transition(state: ScanState, c: char) -> Step {
    match state {
        ScanState::Start => start::transition(c),
        ScanState::InIdentifier => identifier::transition(c),
        ScanState::InNumber => number::transition(c),
    }
}

/// Tokenizer for arithmetic assignment expressions.
///
/// Holds the scan context (state, buffer, finished tokens) for one scan at a
/// time. Every call to [`Tokenizer::tokenize`] starts from a clean context,
/// so an instance can be reused for any number of inputs.
#[derive(Debug, Default)]
pub struct Tokenizer {
    /// Current scan state.
    state: ScanState,

    /// Lexeme of the token being built.
    buffer: String,

    /// Tokens finalized so far in this scan.
    tokens: TokenStream,
}

impl Tokenizer {
    /// Creates a tokenizer in the start state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scan state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Returns the lexeme accumulated for the token being built.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Splits `input` into tokens.
    ///
    /// Characters are consumed left to right. A character that closes an
    /// identifier or number is not consumed by the closing step; the loop
    /// evaluates it again from the start state.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::InvalidCharacter`] for the first character that
    /// belongs to no token class. Tokens built before the failure are
    /// discarded.
    pub fn tokenize(&mut self, input: &str) -> LexResult<TokenStream> {
        self.reset();
        let mut cursor = Cursor::new(input);

        while let Some(c) = cursor.current_char() {
            match transition(self.state, c) {
                Step::Append(next) => {
                    self.buffer.push(c);
                    self.state = next;
                    cursor.advance();
                },
                Step::Emit(kind) => {
                    self.tokens.push(Token::from_char(kind, c));
                    cursor.advance();
                },
                Step::Skip => cursor.advance(),
                Step::Finalize(kind) => {
                    self.finalize(kind);
                    debug_assert!(!matches!(
                        transition(self.state, c),
                        Step::Finalize(_)
                    ));
                },
                Step::Reject => {
                    let err = LexError::InvalidCharacter {
                        ch: c,
                        position: cursor.position(),
                    };
                    debug!(
                        target: "lexa_lex",
                        ch = ?c,
                        position = cursor.position(),
                        discarded = self.tokens.len(),
                        "scan aborted"
                    );
                    self.reset();
                    return Err(err);
                },
            }
        }

        debug_assert!(cursor.is_at_end());
        self.flush();
        debug!(target: "lexa_lex", tokens = self.tokens.len(), "scan complete");
        Ok(std::mem::take(&mut self.tokens))
    }

    /// Closes any token still open at end of input.
    fn flush(&mut self) {
        match self.state {
            ScanState::InIdentifier => self.finalize(TokenKind::Identifier),
            ScanState::InNumber => self.finalize(TokenKind::Number),
            ScanState::Start => {},
        }
    }

    /// Moves the buffer into a new token and returns to the start state.
    fn finalize(&mut self, kind: TokenKind) {
        debug_assert!(kind.is_buffered());
        debug_assert!(!self.buffer.is_empty());
        let lexeme = std::mem::take(&mut self.buffer);
        trace!(target: "lexa_lex", kind = %kind, lexeme = %lexeme, "finalized token");
        self.tokens.push(Token::new(kind, lexeme));
        self.state = ScanState::Start;
    }

    fn reset(&mut self) {
        self.state = ScanState::Start;
        self.buffer.clear();
        self.tokens = TokenStream::new();
    }
}

/// Tokenizes `input` with a fresh [`Tokenizer`].
///
/// ```
/// use lexa_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x=10+20;").unwrap();
/// assert_eq!(tokens.lexemes(), vec!["x", "=", "10", "+", "20", ";"]);
/// assert_eq!(tokens[2].kind(), TokenKind::Number);
/// ```
pub fn tokenize(input: &str) -> LexResult<TokenStream> {
    Tokenizer::new().tokenize(input)
}
