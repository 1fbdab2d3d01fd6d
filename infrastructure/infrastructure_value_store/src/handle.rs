//! Handle Encoding
//!
//! A handle packs a slot index and that slot's generation into 31 bits:
//!
//! ```text
//!  30          20 19                 0
//! +--------------+--------------------+
//! |  generation  |   slot index + 1   |
//! +--------------+--------------------+
//! ```
//!
//! The top bit is always clear, so a handle survives a round trip through a
//! signed 32-bit cell. The index is stored off by one, which keeps raw `0`
//! free for [`INVALID_HANDLE`].

use std::fmt;

use entities_large_int::Cell;

/// Bits used for the slot index
pub const INDEX_BITS: u32 = 20;

/// Bits used for the slot generation
pub const GENERATION_BITS: u32 = 11;

/// Number of addressable slots
pub const MAX_SLOTS: usize = (1 << INDEX_BITS) - 1;

const INDEX_MASK: u32 = (1 << INDEX_BITS) - 1;
pub(crate) const GENERATION_MASK: u32 = (1 << GENERATION_BITS) - 1;

/// Sentinel cell meaning "no handle"; never produced for a live value
pub const INVALID_HANDLE: Cell = 0;

/// Opaque reference to a `LargeInt` owned by a `ValueStore`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        debug_assert!((index as usize) < MAX_SLOTS);
        Self {
            index,
            generation: generation & GENERATION_MASK,
        }
    }

    /// Slot index inside the store
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Generation of the slot when the handle was issued
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Encode as a raw 31-bit value; never `0`
    pub fn to_raw(self) -> u32 {
        (self.generation << INDEX_BITS) | (self.index + 1)
    }

    /// Decode a raw value
    ///
    /// Returns `None` for the sentinel `0` and for values with bits above
    /// the handle layout set.
    pub fn from_raw(raw: u32) -> Option<Self> {
        if raw >> (INDEX_BITS + GENERATION_BITS) != 0 {
            return None;
        }
        let slot = raw & INDEX_MASK;
        if slot == 0 {
            return None;
        }
        Some(Self {
            index: slot - 1,
            generation: raw >> INDEX_BITS,
        })
    }

    /// Encode for the host
    pub fn to_cell(self) -> Cell {
        self.to_raw() as Cell
    }

    /// Decode a host cell; `None` for `INVALID_HANDLE`, negative or out-of-layout values
    pub fn from_cell(cell: Cell) -> Option<Self> {
        u32::try_from(cell).ok().and_then(Self::from_raw)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.generation)
    }
}
