//! Character classification.
//!
//! Every character seen in the start state falls into exactly one
//! [`CharClass`]. Classes are tested in a fixed order and the first match
//! wins:
//!
//! alphabetic → digit → operator → assignment → parenthesis → semicolon →
//! whitespace → invalid

/// The class of a character as seen from the start state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Begins an identifier.
    Alphabetic,
    /// Begins a number.
    Digit,
    /// One of `+ - * /`.
    Operator,
    /// `=`
    Assignment,
    /// `(` or `)`
    Parenthesis,
    /// `;`
    Semicolon,
    /// Skipped between tokens.
    Whitespace,
    /// Anything else.
    Invalid,
}

/// Classifies `c` according to the start-state precedence order.
///
/// # Example
///
/// ```
/// use lexa_lex::class::{classify, CharClass};
///
/// assert_eq!(classify('a'), CharClass::Alphabetic);
/// assert_eq!(classify('7'), CharClass::Digit);
/// assert_eq!(classify('/'), CharClass::Operator);
/// assert_eq!(classify('@'), CharClass::Invalid);
/// ```
pub fn classify(c: char) -> CharClass {
    if is_identifier_start(c) {
        CharClass::Alphabetic
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_operator(c) {
        CharClass::Operator
    } else if c == '=' {
        CharClass::Assignment
    } else if c == '(' || c == ')' {
        CharClass::Parenthesis
    } else if c == ';' {
        CharClass::Semicolon
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Invalid
    }
}

/// Checks if a character can start an identifier.
///
/// Any alphabetic character qualifies, including non-ASCII letters.
/// Underscore does not.
///
/// ```
/// use lexa_lex::class::is_identifier_start;
///
/// assert!(is_identifier_start('a'));
/// assert!(is_identifier_start('λ'));
/// assert!(!is_identifier_start('_'));
/// assert!(!is_identifier_start('1'));
/// ```
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// ```
/// use lexa_lex::class::is_identifier_continue;
///
/// assert!(is_identifier_continue('b'));
/// assert!(is_identifier_continue('2'));
/// assert!(!is_identifier_continue('+'));
/// ```
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric()
}

/// First code point of every run of ten decimal digits (general category
/// `Nd`) outside ASCII. Unicode keeps each decimal digit set contiguous and
/// ordered 0 through 9.
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810,
    0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0,
    0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730,
    0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50,
    0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950,
    0x1FBF0,
];

/// Checks if a character is a decimal digit in any script.
///
/// ```
/// use lexa_lex::class::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('٣')); // Arabic-Indic three
/// assert!(is_digit('９')); // fullwidth nine
/// assert!(!is_digit('²'));
/// assert!(!is_digit('½'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let code = c as u32;
    let run = DECIMAL_DIGIT_ZEROS.partition_point(|&zero| zero <= code);
    run > 0 && code - DECIMAL_DIGIT_ZEROS[run - 1] < 10
}

/// Checks if a character is an arithmetic operator.
#[inline]
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}
