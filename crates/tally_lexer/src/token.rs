//! Token classification for sum expressions.

use std::fmt;

/// One classified input token.
///
/// Digits are emitted one at a time with their numeric value (not the ASCII
/// byte); the evaluator accumulates them into a number itself. Whitespace is
/// never emitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A single decimal digit, value `0..=9`.
    Digit(u8),
    /// `+`
    Plus,
    /// `-` (binary subtraction or unary minus; the scanner does not
    /// distinguish — the evaluator's sign handling covers both).
    Minus,
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Token {
    /// Classify a raw input byte, or `None` if the byte is not part of the
    /// accepted alphabet. Space is not a token and classifies as `None`.
    pub fn classify(byte: u8) -> Option<Self> {
        match byte {
            b'0'..=b'9' => Some(Token::Digit(byte - b'0')),
            b'+' => Some(Token::Plus),
            b'-' => Some(Token::Minus),
            b'(' => Some(Token::Open),
            b')' => Some(Token::Close),
            _ => None,
        }
    }

    /// The source character this token was scanned from.
    pub fn lexeme(self) -> char {
        match self {
            Token::Digit(d) => char::from(b'0' + d),
            Token::Plus => '+',
            Token::Minus => '-',
            Token::Open => '(',
            Token::Close => ')',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}
