//! Identifier accumulation.
//!
//! Identifiers begin with a letter (handled by the start state) and
//! continue through any run of letters and digits.

use super::{ScanState, Step};
use crate::class::is_identifier_continue;
use crate::token::TokenKind;

/// Decides what the identifier state does with `c`.
///
/// Any alphanumeric character extends the identifier. Anything else closes
/// it, and `c` is dispatched again from the start state.
pub(super) fn transition(c: char) -> Step {
    if is_identifier_continue(c) {
        Step::Append(ScanState::InIdentifier)
    } else {
        Step::Finalize(TokenKind::Identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits_extend() {
        assert_eq!(transition('a'), Step::Append(ScanState::InIdentifier));
        assert_eq!(transition('1'), Step::Append(ScanState::InIdentifier));
        assert_eq!(transition('ü'), Step::Append(ScanState::InIdentifier));
    }

    #[test]
    fn test_other_characters_close() {
        for c in [' ', '+', '=', '(', ';', '@', '_'] {
            assert_eq!(transition(c), Step::Finalize(TokenKind::Identifier), "{:?}", c);
        }
    }
}
