//! Single-pass evaluator for sum expressions.
//!
//! Evaluates addition, subtraction, parenthetical grouping, and unary minus
//! over integers in one left-to-right pass: scanning and folding are fused,
//! so no parse tree is built and no recursion tracks nesting depth. Nesting
//! costs one suspended frame on an explicit stack, which makes arbitrarily
//! deep input safe for the call stack.
//!
//! Unterminated groups are not an error: every `(` still open at end of
//! input is resolved as if its `)` were appended there, innermost first.
//! A `)` with no matching `(` is an error by default; see
//! [`UnmatchedClosePolicy`] for the permissive alternative.
//!
//! ```
//! use tally_eval::calculate;
//!
//! assert_eq!(calculate("(1+(4+5+2)-3)+(6+8)"), Ok(23));
//! assert_eq!(calculate("1 - (-2)"), Ok(3));
//! assert_eq!(calculate("- (3 + (4 + 5)"), Ok(-12)); // implicit close
//! ```
//!
//! Every call owns its entire evaluation state, so concurrent callers need
//! no synchronization.

mod engine;
mod error;

pub use engine::{calculate, calculate_with, UnmatchedClosePolicy};
pub use error::{EvalError, EvalResult};
