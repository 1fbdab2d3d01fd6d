//! Native Call Errors

use entities_large_int::Cell;
use infrastructure_value_store::StoreError;
use thiserror::Error;

/// Errors raised while servicing a native call
///
/// None of these reach the script; dispatch logs them and returns the falsy
/// result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeError {
    /// No native is registered under this name
    #[error("unknown native `{0}`")]
    UnknownNative(String),
    /// Script passed the wrong number of parameters
    #[error("expected {expected} arguments, got {found}")]
    ArgumentCount {
        /// Declared parameter count
        expected: usize,
        /// Parameters actually passed
        found: usize,
    },
    /// Cell passed as a handle is the sentinel or not a handle at all
    #[error("cell {0} is not a handle")]
    NotAHandle(Cell),
    /// Script memory address is outside the data segment or misaligned
    #[error("bad script address {0}")]
    BadAddress(Cell),
    /// Script string holds a cell that is not an unpacked ASCII character
    #[error("script string at {0} is not unpacked ASCII")]
    BadString(Cell),
    /// The store or the value operation failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
