//! Byte cursor over expression text.
//!
//! The cursor advances through the input byte-by-byte. [`Cursor::current`]
//! returns `0` once the end of input is reached, so a caller can dispatch on
//! a single byte without a separate bounds check.
//!
//! # Interior Null Bytes
//!
//! If the input contains an interior null byte (U+0000), the cursor
//! distinguishes it from EOF by comparing `pos` against the input length.
//! A null at `pos < len` is an interior null (reported upstream as a
//! malformed character); a null at `pos >= len` means the input is exhausted.

/// Byte-by-byte cursor with `0` as the end-of-input value.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            buf: source.as_bytes(),
            pos: 0,
        }
    }

    /// The byte at the current position, or `0` past the end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.get(self.pos).copied().unwrap_or(0)
    }

    /// Advance one byte. Has no effect past the end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
    }

    /// Current byte offset from the start of the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// `true` once every byte of the input has been consumed.
    ///
    /// This is the authoritative EOF check: `current() == 0` alone cannot
    /// distinguish exhaustion from an interior null byte.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Advance past consecutive space bytes (`0x20`).
    ///
    /// Space is the only whitespace form the expression grammar recognizes.
    pub fn eat_spaces(&mut self) {
        while self.current() == b' ' {
            self.advance();
        }
    }
}
