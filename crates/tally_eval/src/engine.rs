//! Accumulator engine: fused scan-and-fold evaluation.
//!
//! The engine consumes the token stream once, left to right. `result` holds
//! the combined value of every complete term at the current nesting depth;
//! `pending` holds a number still being read digit-by-digit; `sign` applies
//! multiplicatively to the next completed term. Entering a group suspends
//! `(result, sign)` on an explicit frame stack and starts a fresh scope, so
//! nesting depth costs one `Frame`, not one call-stack frame.
//!
//! At end of input the pending number is folded, then every still-open
//! frame is resolved with the same step a `)` would have run, innermost
//! first. An unterminated group therefore evaluates as if its `)` had been
//! appended at the end of the string.

use smallvec::SmallVec;
use tally_lexer::{Scanner, Token};

use crate::error::{EvalError, EvalResult};

/// Sign applied multiplicatively to the next completed term.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Sign {
    Pos,
    Neg,
}

impl Sign {
    fn factor(self) -> i64 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
        }
    }
}

/// Enclosing scope suspended while a parenthesized group evaluates.
#[derive(Copy, Clone, Debug)]
struct Frame {
    result: i64,
    sign: Sign,
}

/// How to treat a `)` that has no matching `(`.
///
/// The grammar never produces one, so this is purely a malformed-input
/// posture. `Strict` keeps the contract obvious; `Lenient` matches the
/// forgiving treatment unterminated groups already get.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UnmatchedClosePolicy {
    /// Fail with [`EvalError::UnmatchedClose`]. The default.
    #[default]
    Strict,
    /// Ignore the stray `)` and continue.
    Lenient,
}

/// Per-call evaluation state. Created fresh for every `calculate` and
/// discarded on return; nothing is shared across calls.
struct Engine {
    result: i64,
    pending: Option<i64>,
    sign: Sign,
    frames: SmallVec<[Frame; 8]>,
    policy: UnmatchedClosePolicy,
}

impl Engine {
    fn new(policy: UnmatchedClosePolicy) -> Self {
        Self {
            result: 0,
            pending: None,
            sign: Sign::Pos,
            frames: SmallVec::new(),
            policy,
        }
    }

    /// Fold the pending number (if any) into `result` under the current
    /// sign. An absent pending number folds as zero, which makes the step
    /// safe to run at operators, closes, and end of input alike.
    fn fold_pending(&mut self) {
        self.result += self.sign.factor() * self.pending.take().unwrap_or(0);
    }

    /// Resolve one group against its suspended frame.
    fn close_with(&mut self, frame: Frame) {
        self.fold_pending();
        self.result = frame.result + frame.sign.factor() * self.result;
    }

    fn step(&mut self, token: Token, pos: usize) -> Result<(), EvalError> {
        match token {
            Token::Digit(d) => {
                self.pending = Some(self.pending.unwrap_or(0) * 10 + i64::from(d));
            }
            Token::Plus => {
                self.fold_pending();
                self.sign = Sign::Pos;
            }
            Token::Minus => {
                self.fold_pending();
                self.sign = Sign::Neg;
            }
            Token::Open => {
                // No pending fold needed: a valid `(` only follows an
                // operator or start of input, where pending is empty.
                self.frames.push(Frame {
                    result: self.result,
                    sign: self.sign,
                });
                self.result = 0;
                self.sign = Sign::Pos;
            }
            Token::Close => match self.frames.pop() {
                Some(frame) => self.close_with(frame),
                None => match self.policy {
                    UnmatchedClosePolicy::Strict => {
                        return Err(EvalError::UnmatchedClose { pos });
                    }
                    // Popping before folding keeps the stray `)` truly
                    // inert: pending digits stay pending.
                    UnmatchedClosePolicy::Lenient => {}
                },
            },
        }
        Ok(())
    }

    /// End-of-input finalization: fold the pending number, then unwind any
    /// still-open frames innermost-first (the implicit-close policy).
    fn finish(mut self) -> i64 {
        self.fold_pending();
        if !self.frames.is_empty() {
            tracing::trace!(open_groups = self.frames.len(), "implicit close at eof");
        }
        while let Some(frame) = self.frames.pop() {
            self.close_with(frame);
        }
        self.result
    }
}

/// Evaluate one sum expression under the default strict policy.
///
/// Returns the fully reduced value, treating every `(` still open at end of
/// input as implicitly closed there. Empty (or all-space) input evaluates
/// to `0`.
pub fn calculate(input: &str) -> EvalResult {
    calculate_with(input, UnmatchedClosePolicy::default())
}

/// Evaluate one sum expression under an explicit [`UnmatchedClosePolicy`].
#[tracing::instrument(level = "trace", ret)]
pub fn calculate_with(input: &str, policy: UnmatchedClosePolicy) -> EvalResult {
    let mut engine = Engine::new(policy);
    for item in Scanner::new(input) {
        let (token, pos) = item?;
        engine.step(token, pos)?;
    }
    Ok(engine.finish())
}
