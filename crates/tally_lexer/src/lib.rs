//! Low-level scanner for sum expressions.
//!
//! Classifies expression text over the alphabet `0-9 + - ( )` (plus the
//! space character) into a lazy token stream. Spaces are consumed and never
//! emitted; any other byte is a fatal [`ScanError`] rather than being
//! silently absorbed into a number.
//!
//! # Layers
//!
//! - [`Cursor`]: byte-by-byte navigation, `0` at end of input.
//! - [`Token`]: the five-token classification (`Digit`, `Plus`, `Minus`,
//!   `Open`, `Close`).
//! - [`Scanner`]: the lazy iterator tying the two together.
//!
//! This crate is standalone so external tools (highlighters, linters) can
//! classify expressions without pulling in the evaluator.

mod cursor;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use scanner::{ScanError, Scanner};
pub use token::Token;
