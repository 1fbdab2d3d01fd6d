//! Decimal Text Conversion
//!
//! Parses base-10 literals into `LargeInt` and renders values into
//! zero-terminated buffers supplied by the host.
//!
//! Accepted input is an optional `+` or `-` followed by one or more ASCII
//! digits, optionally surrounded by ASCII whitespace. Anything else is
//! malformed; there is no prefix parsing of `"12abc"`.

use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{LargeIntError, ParseError};
use crate::large_int::LargeInt;

impl LargeInt {
    /// Parse a base-10 literal
    ///
    /// # Errors
    /// - [`ParseError::Empty`] for empty or whitespace-only text
    /// - [`ParseError::Malformed`] for anything that is not a signed digit run
    /// - [`ParseError::Overflow`] for digits outside the 64-bit signed range
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }
        trimmed
            .parse::<i64>()
            .map(LargeInt::new)
            .map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::Overflow,
                _ => ParseError::Malformed,
            })
    }

    /// Render the value as decimal text into `out`, followed by a zero terminator
    ///
    /// The whole slice is the capacity. One unit is always reserved for the
    /// terminator, so `"-12"` needs a buffer of at least 4 units. On failure
    /// `out` is left untouched.
    ///
    /// # Returns
    /// The number of text units written, terminator excluded.
    ///
    /// # Errors
    /// [`LargeIntError::BufferTooSmall`] when the text and terminator do not fit.
    pub fn write_text<T: From<u8>>(&self, out: &mut [T]) -> Result<usize, LargeIntError> {
        let text = self.to_string();
        let needed = text.len() + 1;
        if out.len() < needed {
            return Err(LargeIntError::BufferTooSmall {
                needed,
                capacity: out.len(),
            });
        }
        for (slot, byte) in out.iter_mut().zip(text.bytes()) {
            *slot = T::from(byte);
        }
        out[text.len()] = T::from(0);
        Ok(text.len())
    }
}

impl FromStr for LargeInt {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LargeInt::parse(s)
    }
}
