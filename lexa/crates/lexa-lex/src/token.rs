//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the literal text it was built from.
//! A finished scan is returned as a [`TokenStream`], which preserves
//! left-to-right scan order.

use std::fmt;
use std::ops::{Deref, Index};

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A letter followed by letters or digits: `x`, `a1`, `total`
    Identifier,
    /// A run of decimal digits: `0`, `42`
    Number,
    /// One of `+`, `-`, `*`, `/`
    Operator,
    /// `=`
    Assignment,
    /// `(` or `)`
    Parenthesis,
    /// `;`
    Semicolon,
}

impl TokenKind {
    /// Returns the upper-case name of this kind, e.g. `"IDENTIFIER"`.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Parenthesis => "PARENTHESIS",
            TokenKind::Semicolon => "SEMICOLON",
        }
    }

    /// Returns true for kinds whose lexeme is accumulated over several
    /// characters rather than emitted on sight.
    pub fn is_buffered(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Number)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme.
///
/// Tokens are created once, when the tokenizer finalizes them, and are
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    /// Creates a token of `kind` with the given lexeme.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Creates a single-character token, as emitted directly from the
    /// start state.
    pub fn from_char(kind: TokenKind, c: char) -> Self {
        Self {
            kind,
            lexeme: c.to_string(),
        }
    }

    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the literal text of this token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Consumes the token, returning its parts.
    pub fn into_parts(self) -> (TokenKind, String) {
        (self.kind, self.lexeme)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.kind, self.lexeme)
    }
}

/// Ordered sequence of tokens produced by one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token. Streams only ever grow.
    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the scan produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the kinds of all tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(Token::kind).collect()
    }

    /// Returns the lexemes of all tokens, in order.
    pub fn lexemes(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::lexeme).collect()
    }

    /// Consumes the stream, returning the underlying vector.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{}", token)?;
        }
        Ok(())
    }
}
