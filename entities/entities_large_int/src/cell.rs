//! Host Cell Types
//!
//! The scripting host stores every scalar in a fixed-width cell. Values read
//! out of a `LargeInt` are truncated to this width; handles must fit in it.
//! The default cell is 32 bits wide; enable the `cell64` feature for hosts
//! built with 64-bit cells.

/// Signed host cell
#[cfg(not(feature = "cell64"))]
pub type Cell = i32;

/// Unsigned host cell
#[cfg(not(feature = "cell64"))]
pub type UCell = u32;

/// Signed host cell
#[cfg(feature = "cell64")]
pub type Cell = i64;

/// Unsigned host cell
#[cfg(feature = "cell64")]
pub type UCell = u64;

/// Cell value the host reads as `false`
pub const CELL_FALSE: Cell = 0;

/// Cell value the host reads as `true`
pub const CELL_TRUE: Cell = 1;

/// Convert a boolean into a host cell (`1` or `0`)
pub fn cell_from_bool(value: bool) -> Cell {
    if value {
        CELL_TRUE
    } else {
        CELL_FALSE
    }
}
