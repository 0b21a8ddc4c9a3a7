//! Error types for lexa-lex.

use thiserror::Error;

/// Error produced when a scan cannot continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character in the start state matched none of the recognized classes.
    #[error("unexpected character '{ch}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// 0-based character index of `ch` in the input.
        position: usize,
    },
}

impl LexError {
    /// Returns the character that aborted the scan.
    pub fn character(&self) -> char {
        match self {
            LexError::InvalidCharacter { ch, .. } => *ch,
        }
    }

    /// Returns the 0-based character index of the offending character.
    pub fn position(&self) -> usize {
        match self {
            LexError::InvalidCharacter { position, .. } => *position,
        }
    }
}

/// Result type alias for tokenizer operations
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_character_display() {
        let err = LexError::InvalidCharacter { ch: '@', position: 1 };
        assert_eq!(err.to_string(), "unexpected character '@' at position 1");
    }

    #[test]
    fn test_accessors() {
        let err = LexError::InvalidCharacter { ch: '#', position: 7 };
        assert_eq!(err.character(), '#');
        assert_eq!(err.position(), 7);
    }
}
