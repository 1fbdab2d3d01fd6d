//! Reading and Export Operations
//!
//! Reads never mutate. `get_cell` narrows silently to the host cell width;
//! use `fits_cell` / `fits_ucell` first when that matters.

use entities_large_int::Cell;
use infrastructure_value_store::{Handle, ValueStore};

use crate::{LargeIntOps, OpResult};

impl LargeIntOps {
    /// Full 64-bit value of `primary`
    pub fn get(store: &ValueStore, primary: Handle) -> OpResult<i64> {
        Ok(store.get(primary)?.value())
    }

    /// Value of `primary` truncated to the host cell width
    pub fn get_cell(store: &ValueStore, primary: Handle) -> OpResult<Cell> {
        Ok(store.get(primary)?.to_cell())
    }

    /// Render `primary` as zero-terminated decimal text into `out`
    ///
    /// `out.len()` is the capacity; one unit is reserved for the terminator.
    /// On failure `out` is untouched.
    ///
    /// # Returns
    /// Number of text units written, terminator excluded.
    pub fn get_text<T: From<u8>>(store: &ValueStore, primary: Handle, out: &mut [T]) -> OpResult<usize> {
        let value = store.get(primary)?;
        Ok(value.write_text(out)?)
    }

    /// Whether `primary` fits a signed host cell
    pub fn fits_cell(store: &ValueStore, primary: Handle) -> OpResult<bool> {
        Ok(store.get(primary)?.fits_cell())
    }

    /// Whether `primary` fits an unsigned host cell; negative values never do
    pub fn fits_ucell(store: &ValueStore, primary: Handle) -> OpResult<bool> {
        Ok(store.get(primary)?.fits_ucell())
    }

    /// Whether `primary` is odd (remainder by two is non-zero)
    pub fn is_odd(store: &ValueStore, primary: Handle) -> OpResult<bool> {
        Ok(store.get(primary)?.is_odd())
    }

    /// Whether `primary` is even
    pub fn is_even(store: &ValueStore, primary: Handle) -> OpResult<bool> {
        Ok(store.get(primary)?.is_even())
    }
}
