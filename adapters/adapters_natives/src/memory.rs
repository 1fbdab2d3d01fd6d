//! Script Memory
//!
//! Natives that take strings or output buffers receive script addresses, not
//! Rust slices. [`ScriptMemory`] is the view of the script's data segment a
//! native needs to resolve them.
//!
//! Addresses are byte offsets into the data segment and must be cell aligned.
//! Strings are unpacked: one ASCII character per cell, terminated by a zero
//! cell. A cell holding anything else makes the whole string unreadable rather
//! than being cut down to its low byte.

use std::mem::size_of;

use entities_large_int::Cell;

use crate::error::NativeError;

/// Bytes per cell in the script address space
pub const CELL_BYTES: usize = size_of::<Cell>();

/// Access to a script's data segment
pub trait ScriptMemory {
    /// Read the zero-terminated string starting at `addr`
    ///
    /// A string running to the end of the segment without a terminator ends
    /// there. A cell outside the ASCII range is [`NativeError::BadString`].
    fn read_string(&self, addr: Cell) -> Result<String, NativeError>;

    /// Borrow `len` cells starting at `addr` for writing
    fn cells_mut(&mut self, addr: Cell, len: usize) -> Result<&mut [Cell], NativeError>;
}

/// Growable data segment held in process memory
///
/// Used by embedders that marshal their own data and by tests.
#[derive(Debug, Default, Clone)]
pub struct CellHeap {
    cells: Vec<Cell>,
}

impl CellHeap {
    /// Create an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `len` zeroed cells, returning the address of the first
    pub fn alloc(&mut self, len: usize) -> Cell {
        let addr = self.next_addr();
        self.cells.resize(self.cells.len() + len, 0);
        addr
    }

    /// Store `text` as an unpacked zero-terminated string
    pub fn alloc_string(&mut self, text: &str) -> Cell {
        let addr = self.next_addr();
        self.cells.extend(text.bytes().map(Cell::from));
        self.cells.push(0);
        addr
    }

    /// Borrow `len` cells starting at `addr`
    pub fn cells(&self, addr: Cell, len: usize) -> Result<&[Cell], NativeError> {
        let range = self.range(addr, len)?;
        Ok(&self.cells[range])
    }

    /// Size of the segment in cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing has been allocated
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn next_addr(&self) -> Cell {
        (self.cells.len() * CELL_BYTES) as Cell
    }

    fn range(&self, addr: Cell, len: usize) -> Result<std::ops::Range<usize>, NativeError> {
        let start = cell_index(addr)?;
        let end = start.checked_add(len).ok_or(NativeError::BadAddress(addr))?;
        if end > self.cells.len() {
            return Err(NativeError::BadAddress(addr));
        }
        Ok(start..end)
    }
}

impl ScriptMemory for CellHeap {
    fn read_string(&self, addr: Cell) -> Result<String, NativeError> {
        let start = cell_index(addr)?;
        let tail = self.cells.get(start..).ok_or(NativeError::BadAddress(addr))?;
        tail.iter()
            .take_while(|&&c| c != 0)
            .map(|&c| {
                u8::try_from(c)
                    .ok()
                    .filter(u8::is_ascii)
                    .map(char::from)
                    .ok_or(NativeError::BadString(addr))
            })
            .collect()
    }

    fn cells_mut(&mut self, addr: Cell, len: usize) -> Result<&mut [Cell], NativeError> {
        let range = self.range(addr, len)?;
        Ok(&mut self.cells[range])
    }
}

/// Translate a byte address into a cell index
fn cell_index(addr: Cell) -> Result<usize, NativeError> {
    usize::try_from(addr)
        .ok()
        .filter(|offset| offset % CELL_BYTES == 0)
        .map(|offset| offset / CELL_BYTES)
        .ok_or(NativeError::BadAddress(addr))
}
