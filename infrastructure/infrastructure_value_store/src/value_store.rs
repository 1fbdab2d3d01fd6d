//! Value Store Module
//!
//! Slot table mapping handles to owned `LargeInt` cells.
//!
//! Each slot remembers a generation that is bumped whenever its cell is
//! destroyed. A handle is only honoured while its generation matches the
//! slot's, so use-after-destroy and double destroy are reported as
//! [`StoreError::InvalidHandle`]. Freed slots are reused oldest-first to
//! spread generation churn across the table. A slot whose generation is
//! exhausted is retired for good instead of wrapping back to a generation an
//! old handle may still carry.
//!
//! All mutation goes through [`ValueStore::update`] and
//! [`ValueStore::update_with`], which apply the caller's function to a copy of
//! the cell and write it back only on success.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use entities_large_int::{LargeInt, LargeIntError, ParseError};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::config::StoreConfig;
use crate::handle::{Handle, GENERATION_MASK, MAX_SLOTS};

/// Errors reported by the value store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Handle was destroyed, never issued, or belongs to an older generation
    #[error("invalid handle {0}")]
    InvalidHandle(Handle),
    /// No free slot within the configured limit
    #[error("value store is full ({max_cells} cells)")]
    CapacityExhausted {
        /// Configured limit
        max_cells: usize,
    },
    /// The value operation itself failed
    #[error(transparent)]
    Value(#[from] LargeIntError),
}

impl From<ParseError> for StoreError {
    fn from(err: ParseError) -> Self {
        StoreError::Value(LargeIntError::Parse(err))
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    value: Option<LargeInt>,
}

/// Advance an emptied slot to its next generation
///
/// Returns `false` when the slot has used its last generation; it then stays
/// empty forever so no earlier handle can match it again.
fn release(slot: &mut Slot) -> bool {
    if slot.generation == GENERATION_MASK {
        trace!("retired slot after its last generation");
        return false;
    }
    slot.generation += 1;
    true
}

#[derive(Debug, Default)]
struct SlotTable {
    slots: Vec<Slot>,
    free: VecDeque<u32>,
    live: usize,
}

impl SlotTable {
    fn insert(&mut self, value: LargeInt, max_cells: usize) -> Result<Handle, StoreError> {
        if self.live >= max_cells {
            warn!(max_cells, "value store exhausted");
            return Err(StoreError::CapacityExhausted { max_cells });
        }

        let index = match self.free.pop_front() {
            Some(index) => index,
            None => {
                if self.slots.len() >= MAX_SLOTS {
                    warn!(max_cells, "handle index space exhausted by retired slots");
                    return Err(StoreError::CapacityExhausted { max_cells });
                }
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    value: None,
                });
                index
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.value = Some(value);
        self.live += 1;
        Ok(Handle::new(index, slot.generation))
    }

    fn get(&self, handle: Handle) -> Result<&LargeInt, StoreError> {
        self.slots
            .get(handle.index())
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.value.as_ref())
            .ok_or(StoreError::InvalidHandle(handle))
    }

    fn get_mut(&mut self, handle: Handle) -> Result<&mut LargeInt, StoreError> {
        self.slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.value.as_mut())
            .ok_or(StoreError::InvalidHandle(handle))
    }

    fn remove(&mut self, handle: Handle) -> Result<LargeInt, StoreError> {
        let slot = self
            .slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation())
            .ok_or(StoreError::InvalidHandle(handle))?;
        let value = slot.value.take().ok_or(StoreError::InvalidHandle(handle))?;
        if release(slot) {
            self.free.push_back(handle.index() as u32);
        }
        self.live -= 1;
        Ok(value)
    }

    fn clear(&mut self) -> usize {
        let released = self.live;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() && release(slot) {
                self.free.push_back(index as u32);
            }
        }
        self.live = 0;
        released
    }
}

/// Handle-indexed store of `LargeInt` cells
///
/// Thread-safe; every operation holds the table lock from handle resolution
/// to write-back.
#[derive(Debug)]
pub struct ValueStore {
    table: Mutex<SlotTable>,
    config: StoreConfig,
}

impl ValueStore {
    /// Create an empty store with default limits
    ///
    /// # Examples
    /// ```
    /// use infrastructure_value_store::ValueStore;
    ///
    /// let store = ValueStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given limits
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            table: Mutex::new(SlotTable::default()),
            config,
        }
    }

    /// Limits this store enforces
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, SlotTable> {
        // Every cell is always fully formed, so a poisoned table is still consistent
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocate a new cell holding `initial`
    ///
    /// # Errors
    /// [`StoreError::CapacityExhausted`] when the configured limit is reached.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_value_store::ValueStore;
    ///
    /// let store = ValueStore::new();
    /// let handle = store.create(-5).unwrap();
    /// assert_eq!(store.get(handle).unwrap().value(), -5);
    /// ```
    pub fn create(&self, initial: i64) -> Result<Handle, StoreError> {
        self.insert(LargeInt::new(initial))
    }

    /// Allocate a new cell holding `value`
    pub fn insert(&self, value: LargeInt) -> Result<Handle, StoreError> {
        let handle = self.lock().insert(value, self.config.max_cells)?;
        trace!(%handle, value = value.value(), "created cell");
        Ok(handle)
    }

    /// Allocate a new cell holding a copy of `other`'s current value
    ///
    /// # Errors
    /// [`StoreError::InvalidHandle`] when `other` is not live.
    pub fn create_from(&self, other: Handle) -> Result<Handle, StoreError> {
        let mut table = self.lock();
        let value = *table.get(other)?;
        let handle = table.insert(value, self.config.max_cells)?;
        trace!(%handle, source = %other, "copied cell");
        Ok(handle)
    }

    /// Allocate a new cell from base-10 text
    ///
    /// # Errors
    /// [`StoreError::Value`] wrapping the [`ParseError`] when the text is
    /// empty, malformed, or out of range; nothing is allocated in that case.
    pub fn create_from_text(&self, text: &str) -> Result<Handle, StoreError> {
        let value = LargeInt::parse(text)?;
        self.insert(value)
    }

    /// Release a cell, returning its last value
    ///
    /// The handle and every copy of it become permanently invalid.
    ///
    /// # Errors
    /// [`StoreError::InvalidHandle`] when the cell is already destroyed or
    /// was never issued.
    pub fn destroy(&self, handle: Handle) -> Result<LargeInt, StoreError> {
        let value = self.lock().remove(handle).map_err(|err| {
            debug!(%handle, "destroy of a dead handle");
            err
        })?;
        trace!(%handle, "destroyed cell");
        Ok(value)
    }

    /// Current value of a cell
    pub fn get(&self, handle: Handle) -> Result<LargeInt, StoreError> {
        self.lock().get(handle).copied()
    }

    /// Whether `handle` refers to a live cell
    pub fn contains(&self, handle: Handle) -> bool {
        self.lock().get(handle).is_ok()
    }

    /// Mutate one cell in place
    ///
    /// `f` receives a scratch copy; the cell is overwritten only if `f`
    /// returns `Ok`, so a failed operation leaves it untouched.
    ///
    /// # Errors
    /// [`StoreError::InvalidHandle`] (converted into `E`) when the handle is
    /// not live, or whatever `f` returns.
    pub fn update<T, E, F>(&self, handle: Handle, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut LargeInt) -> Result<T, E>,
    {
        let mut table = self.lock();
        let cell = table.get_mut(handle)?;
        let mut scratch = *cell;
        let output = f(&mut scratch)?;
        *cell = scratch;
        Ok(output)
    }

    /// Mutate `primary` using the current value of `secondary` as operand
    ///
    /// Both handles are resolved under the same lock. `primary` and
    /// `secondary` may be the same handle; `f` then sees the value before
    /// mutation as its operand.
    pub fn update_with<T, E, F>(&self, primary: Handle, secondary: Handle, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut LargeInt, LargeInt) -> Result<T, E>,
    {
        let mut table = self.lock();
        let operand = *table.get(secondary)?;
        let cell = table.get_mut(primary)?;
        let mut scratch = *cell;
        let output = f(&mut scratch, operand)?;
        *cell = scratch;
        Ok(output)
    }

    /// Read `primary` and `secondary` together under one lock
    pub fn read_with<T, F>(&self, primary: Handle, secondary: Handle, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&LargeInt, &LargeInt) -> T,
    {
        let table = self.lock();
        let left = table.get(primary)?;
        let right = table.get(secondary)?;
        Ok(f(left, right))
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.lock().live
    }

    /// Whether the store holds no live cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Destroy every live cell, returning how many were released
    ///
    /// All outstanding handles become invalid.
    pub fn clear(&self) -> usize {
        let released = self.lock().clear();
        trace!(released, "cleared value store");
        released
    }
}

impl Default for ValueStore {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    static ref GLOBAL_VALUE_STORE: ValueStore = ValueStore::new();
}

/// Process-wide value store used by the host boundary
pub fn global_store() -> &'static ValueStore {
    &GLOBAL_VALUE_STORE
}
