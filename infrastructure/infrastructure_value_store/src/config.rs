//! Value Store Configuration
//!
//! Limits for a `ValueStore`. Configuration only states the limits;
//! enforcement happens in the store.

use crate::handle::MAX_SLOTS;

/// Value store limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of live cells; never above the handle index space
    pub max_cells: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            max_cells: MAX_SLOTS,
        }
    }
}

impl StoreConfig {
    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of live cells, clamped to what a handle can address
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells.min(MAX_SLOTS);
        self
    }
}
