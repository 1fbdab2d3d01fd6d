//! Assignment Operations

use entities_large_int::LargeInt;
use infrastructure_value_store::{Handle, StoreError, ValueStore};

use crate::{LargeIntOps, OpResult};

impl LargeIntOps {
    /// Overwrite `primary` with a literal
    pub fn set(store: &ValueStore, primary: Handle, value: i64) -> OpResult<()> {
        store.update::<_, StoreError, _>(primary, |cell| {
            cell.set(value);
            Ok(())
        })
    }

    /// Overwrite `primary` with the current value of `other`
    pub fn set_from(store: &ValueStore, primary: Handle, other: Handle) -> OpResult<()> {
        store.update_with::<_, StoreError, _>(primary, other, |cell, source| {
            cell.set(source.value());
            Ok(())
        })
    }

    /// Overwrite `primary` with parsed base-10 text
    ///
    /// # Errors
    /// The parse error when `text` is empty, malformed or out of range;
    /// `primary` keeps its value.
    pub fn set_from_text(store: &ValueStore, primary: Handle, text: &str) -> OpResult<()> {
        store.update::<_, StoreError, _>(primary, |cell| {
            *cell = LargeInt::parse(text).map_err(StoreError::from)?;
            Ok(())
        })
    }
}
