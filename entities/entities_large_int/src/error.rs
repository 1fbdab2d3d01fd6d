//! LargeInt Errors

use thiserror::Error;

/// Reasons decimal text can fail to become a `LargeInt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text is empty or only whitespace
    #[error("empty integer literal")]
    Empty,
    /// Text is not an optionally signed run of decimal digits
    #[error("malformed integer literal")]
    Malformed,
    /// Digits are valid but the value lies outside the 64-bit signed range
    #[error("integer literal out of 64-bit range")]
    Overflow,
}

/// Errors raised by `LargeInt` operations
///
/// When an operation returns one of these, the value it was called on is
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LargeIntError {
    /// Text could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// Quotient or remainder with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
    /// Result has no 64-bit signed representation
    #[error("arithmetic overflow")]
    Overflow,
    /// Result is not a real number (e.g. even root of a negative value)
    #[error("result outside the real domain")]
    Domain,
    /// Output buffer cannot hold the rendered text and its terminator
    #[error("buffer too small: need {needed} units, have {capacity}")]
    BufferTooSmall {
        /// Units required, terminator included
        needed: usize,
        /// Units available
        capacity: usize,
    },
}
