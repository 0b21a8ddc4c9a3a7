//! Start state dispatch.
//!
//! In the start state a character either opens a buffered token, is
//! emitted as a single-character token, is skipped, or is rejected.

use super::{ScanState, Step};
use crate::class::{classify, CharClass};
use crate::token::TokenKind;

/// Decides what the start state does with `c`.
pub(super) fn transition(c: char) -> Step {
    match classify(c) {
        CharClass::Alphabetic => Step::Append(ScanState::InIdentifier),
        CharClass::Digit => Step::Append(ScanState::InNumber),
        CharClass::Operator => Step::Emit(TokenKind::Operator),
        CharClass::Assignment => Step::Emit(TokenKind::Assignment),
        CharClass::Parenthesis => Step::Emit(TokenKind::Parenthesis),
        CharClass::Semicolon => Step::Emit(TokenKind::Semicolon),
        CharClass::Whitespace => Step::Skip,
        CharClass::Invalid => Step::Reject,
    }
}
