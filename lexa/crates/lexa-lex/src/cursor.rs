//! Character cursor for traversing the input.
//!
//! The tokenizer never indexes the input directly; it asks the cursor for
//! the current character and decides whether to advance. Not advancing is
//! how a character gets evaluated a second time after a token boundary.

use std::str::Chars;

/// A cursor over the characters of an input string.
///
/// # Example
///
/// ```
/// use lexa_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x=1");
///
/// assert_eq!(cursor.current_char(), Some('x'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('='));
/// assert_eq!(cursor.position(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// Remaining characters, starting at the current one.
    chars: Chars<'a>,

    /// The character under the cursor, `None` at end of input.
    current: Option<char>,

    /// 0-based character index of `current`.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut chars = source.chars();
        let current = chars.next();
        Self {
            chars,
            current,
            position: 0,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.current
    }

    /// Moves to the next character. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.chars.next();
            self.position += 1;
        }
    }

    /// Returns the 0-based character index of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }
}
