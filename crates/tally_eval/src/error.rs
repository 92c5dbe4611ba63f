//! Error types for expression evaluation.

use tally_lexer::ScanError;
use thiserror::Error;

/// Result of one evaluation.
pub type EvalResult = Result<i64, EvalError>;

/// Evaluation failure.
///
/// There are no partial results: a failing call produces one of these and
/// nothing else.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The scanner met a byte outside the accepted alphabet.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A `)` with no matching `(`, under the strict policy.
    #[error("unmatched ')' at byte {pos}")]
    UnmatchedClose {
        /// Byte offset of the stray `)` in the input.
        pos: usize,
    },
}

#[cfg(test)]
mod tests;
