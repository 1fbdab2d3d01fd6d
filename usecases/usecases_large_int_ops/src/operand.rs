//! Second Operand
//!
//! Binary operations take either a literal machine integer or the current
//! value of another handle.

use entities_large_int::{Cell, LargeInt};
use infrastructure_value_store::{Handle, ValueStore};

use crate::OpResult;

/// Literal or handle operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Literal integer
    Literal(i64),
    /// Current value of another stored cell
    Handle(Handle),
}

impl Operand {
    /// Literal operand from a host cell
    pub fn from_cell(cell: Cell) -> Self {
        Operand::Literal(i64::from(cell))
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Literal(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Literal(i64::from(value))
    }
}

impl From<Handle> for Operand {
    fn from(handle: Handle) -> Self {
        Operand::Handle(handle)
    }
}

/// Mutate `primary` with the operand's value under a single store lock
pub(crate) fn apply<T, F>(store: &ValueStore, primary: Handle, operand: Operand, f: F) -> OpResult<T>
where
    F: FnOnce(&mut LargeInt, i64) -> OpResult<T>,
{
    match operand {
        Operand::Literal(value) => store.update(primary, |cell| f(cell, value)),
        Operand::Handle(other) => store.update_with(primary, other, |cell, rhs| f(cell, rhs.value())),
    }
}

/// Read `primary` together with the operand's value
pub(crate) fn inspect<T, F>(store: &ValueStore, primary: Handle, operand: Operand, f: F) -> OpResult<T>
where
    F: FnOnce(&LargeInt, i64) -> T,
{
    match operand {
        Operand::Literal(value) => store.get(primary).map(|cell| f(&cell, value)),
        Operand::Handle(other) => store.read_with(primary, other, |cell, rhs| f(cell, rhs.value())),
    }
}
