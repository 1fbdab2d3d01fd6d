//! Comparison Operations

use std::cmp::Ordering;

use infrastructure_value_store::{Handle, ValueStore};

use crate::operand::inspect;
use crate::{LargeIntOps, OpResult, Operand};

impl LargeIntOps {
    /// Signed three-way comparison of `primary` against `operand`
    pub fn compare(store: &ValueStore, primary: Handle, operand: impl Into<Operand>) -> OpResult<Ordering> {
        inspect(store, primary, operand.into(), |cell, rhs| cell.compare(rhs))
    }

    /// Three-way comparison of absolute values
    pub fn compare_abs(store: &ValueStore, primary: Handle, operand: impl Into<Operand>) -> OpResult<Ordering> {
        inspect(store, primary, operand.into(), |cell, rhs| cell.compare_abs(rhs))
    }
}
