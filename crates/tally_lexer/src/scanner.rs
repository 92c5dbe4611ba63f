//! Hand-written scanner producing classified tokens lazily.
//!
//! The scanner walks a [`Cursor`] left to right with no lookahead beyond the
//! current byte and no pushback. Spaces are consumed between tokens and
//! never emitted. Every emitted token carries its byte offset so downstream
//! errors can point at the input.
//!
//! A byte outside the accepted alphabet is a fatal [`ScanError`], never
//! silently folded into a neighboring number.

use thiserror::Error;

use crate::cursor::Cursor;
use crate::token::Token;

/// Scan failure: the input stepped outside the `0-9 + - ( )` alphabet.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A byte that is neither a digit, an operator, a parenthesis, nor a
    /// space.
    #[error("malformed character '{}' at byte {pos}", char::from(*.byte).escape_default())]
    MalformedCharacter {
        /// The offending raw byte.
        byte: u8,
        /// Byte offset of the character in the input.
        pos: usize,
    },
}

/// Lazy token stream over one expression string.
///
/// Iteration yields `(token, byte_offset)` pairs and stops at end of input.
/// After yielding an error the scanner has advanced past the offending byte,
/// so the stream stays finite even if a caller keeps iterating.
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    fn next_token(&mut self) -> Option<Result<(Token, usize), ScanError>> {
        self.cursor.eat_spaces();
        if self.cursor.is_eof() {
            return None;
        }
        let pos = self.cursor.pos();
        let byte = self.cursor.current();
        self.cursor.advance();
        match Token::classify(byte) {
            Some(token) => Some(Ok((token, pos))),
            None => Some(Err(ScanError::MalformedCharacter { byte, pos })),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<(Token, usize), ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests;
