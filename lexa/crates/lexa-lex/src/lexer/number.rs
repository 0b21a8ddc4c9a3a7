//! Number accumulation.
//!
//! Numbers are unsigned runs of decimal digits. There is no fraction,
//! exponent, or base prefix: `12x` is the number `12` followed by the
//! identifier `x`.

use super::{ScanState, Step};
use crate::class::is_digit;
use crate::token::TokenKind;

/// Decides what the number state does with `c`.
pub(super) fn transition(c: char) -> Step {
    if is_digit(c) {
        Step::Append(ScanState::InNumber)
    } else {
        Step::Finalize(TokenKind::Number)
    }
}
