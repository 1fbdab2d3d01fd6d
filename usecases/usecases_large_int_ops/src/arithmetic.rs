//! Arithmetic Operations
//!
//! Every operation mutates `primary` in place. Binary operations accept an
//! [`Operand`] so the same entry point serves both the literal and the
//! handle-to-handle form. On any error `primary` keeps its previous value.

use infrastructure_value_store::{Handle, StoreError, ValueStore};

use crate::operand::apply;
use crate::{LargeIntOps, OpResult, Operand};

impl LargeIntOps {
    /// `primary += operand`, wrapping on overflow
    pub fn add(store: &ValueStore, primary: Handle, operand: impl Into<Operand>) -> OpResult<()> {
        apply(store, primary, operand.into(), |cell, rhs| {
            cell.add(rhs);
            Ok(())
        })
    }

    /// `primary -= operand`, wrapping on overflow
    pub fn sub(store: &ValueStore, primary: Handle, operand: impl Into<Operand>) -> OpResult<()> {
        apply(store, primary, operand.into(), |cell, rhs| {
            cell.sub(rhs);
            Ok(())
        })
    }

    /// `primary *= operand`, wrapping on overflow
    pub fn mul(store: &ValueStore, primary: Handle, operand: impl Into<Operand>) -> OpResult<()> {
        apply(store, primary, operand.into(), |cell, rhs| {
            cell.mul(rhs);
            Ok(())
        })
    }

    /// `primary /= operand`, truncating toward zero
    ///
    /// # Errors
    /// `DivisionByZero` when the operand is zero.
    pub fn div_quotient(store: &ValueStore, primary: Handle, operand: impl Into<Operand>) -> OpResult<()> {
        apply(store, primary, operand.into(), |cell, rhs| Ok(cell.div_quotient(rhs)?))
    }

    /// `primary %= operand`; the remainder takes the dividend's sign
    ///
    /// # Errors
    /// `DivisionByZero` when the operand is zero.
    pub fn div_remainder(store: &ValueStore, primary: Handle, operand: impl Into<Operand>) -> OpResult<()> {
        apply(store, primary, operand.into(), |cell, rhs| Ok(cell.div_remainder(rhs)?))
    }

    /// Replace `primary` with its absolute value
    pub fn abs(store: &ValueStore, primary: Handle) -> OpResult<()> {
        store.update(primary, |cell| cell.abs().map_err(StoreError::from))
    }

    /// Negate `primary`
    pub fn neg(store: &ValueStore, primary: Handle) -> OpResult<()> {
        store.update(primary, |cell| cell.neg().map_err(StoreError::from))
    }

    /// Truncated `degree`-th root through floating point
    pub fn root(store: &ValueStore, primary: Handle, degree: i64) -> OpResult<()> {
        store.update(primary, |cell| cell.root(degree).map_err(StoreError::from))
    }

    /// Truncated `degree`-th root computed on integers
    pub fn root_exact(store: &ValueStore, primary: Handle, degree: i64) -> OpResult<()> {
        store.update(primary, |cell| cell.root_exact(degree).map_err(StoreError::from))
    }

    /// `primary ^ exponent` through floating point, truncated
    pub fn pow(store: &ValueStore, primary: Handle, exponent: i64) -> OpResult<()> {
        store.update(primary, |cell| cell.pow(exponent).map_err(StoreError::from))
    }

    /// `primary ^ exponent` computed on integers
    pub fn pow_exact(store: &ValueStore, primary: Handle, exponent: i64) -> OpResult<()> {
        store.update(primary, |cell| cell.pow_exact(exponent).map_err(StoreError::from))
    }
}
