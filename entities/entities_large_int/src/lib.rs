//! Entities Layer: LargeInt
//!
//! Provides the value type held behind every host handle:
//! - `LargeInt`: a mutable 64-bit signed integer with in-place arithmetic
//! - Cell types describing the host's fixed-width integer cell
//! - Decimal text parsing and rendering
//!
//! Every operation either mutates the value completely or reports an error and
//! leaves it as it was.
//!
//! ## Modules
//!
//! - **[`cell`](cell/index.html)**: Host cell width (`Cell`, `UCell`)
//! - **[`large_int`](large_int/index.html)**: The `LargeInt` value and its arithmetic
//! - **[`text`](text/index.html)**: Base-10 parsing and terminated-buffer rendering
//! - **[`error`](error/index.html)**: `ParseError` and `LargeIntError`

pub mod cell;
pub mod error;
pub mod large_int;
pub mod text;

pub use cell::{Cell, UCell};
pub use error::{LargeIntError, ParseError};
pub use large_int::LargeInt;
