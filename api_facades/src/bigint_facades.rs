//! BigInt Facades
//!
//! One function per native, keeping the cell-typed signatures scripts see,
//! bound to the process-wide value store. Hosts that link calls directly use
//! these instead of dispatching by name.
//!
//! Every facade returns `0` on failure: [`INVALID_HANDLE`] for constructors,
//! `false` for everything else. The cause is logged at debug level.

use adapters_natives::NativeError;
use entities_large_int::cell::cell_from_bool;
use entities_large_int::large_int::ordering_to_cell;
use entities_large_int::{Cell, LargeInt};
use infrastructure_value_store::{global_store, Handle, INVALID_HANDLE};
use tracing::debug;
use usecases_large_int_ops::{LargeIntOps, Operand};

const SUCCESS: Cell = 1;

fn handle(cell: Cell) -> Result<Handle, NativeError> {
    Handle::from_cell(cell).ok_or(NativeError::NotAHandle(cell))
}

fn respond<F>(native: &'static str, f: F) -> Cell
where
    F: FnOnce() -> Result<Cell, NativeError>,
{
    f().unwrap_or_else(|err| {
        debug!(native, %err, "native call failed");
        INVALID_HANDLE
    })
}

/// `bigint_create(initial)`
pub fn bigint_create(initial: Cell) -> Cell {
    respond("bigint_create", || {
        Ok(global_store().insert(LargeInt::from_cell(initial))?.to_cell())
    })
}

/// `bigint_create_bi(initial)`
pub fn bigint_create_bi(initial: Cell) -> Cell {
    respond("bigint_create_bi", || {
        Ok(global_store().create_from(handle(initial)?)?.to_cell())
    })
}

/// `bigint_create_str(initial[])`
pub fn bigint_create_str(initial: &str) -> Cell {
    respond("bigint_create_str", || {
        Ok(global_store().create_from_text(initial)?.to_cell())
    })
}

/// `bigint_destroy(bigint)`
pub fn bigint_destroy(bigint: Cell) -> Cell {
    respond("bigint_destroy", || {
        global_store().destroy(handle(bigint)?)?;
        Ok(SUCCESS)
    })
}

/// `bigint_set(bigint, value)`
pub fn bigint_set(bigint: Cell, value: Cell) -> Cell {
    respond("bigint_set", || {
        LargeIntOps::set(global_store(), handle(bigint)?, i64::from(value))?;
        Ok(SUCCESS)
    })
}

/// `bigint_set_bi(bigint, value)`
pub fn bigint_set_bi(bigint: Cell, value: Cell) -> Cell {
    respond("bigint_set_bi", || {
        LargeIntOps::set_from(global_store(), handle(bigint)?, handle(value)?)?;
        Ok(SUCCESS)
    })
}

/// `bigint_set_str(bigint, value[])`
pub fn bigint_set_str(bigint: Cell, value: &str) -> Cell {
    respond("bigint_set_str", || {
        LargeIntOps::set_from_text(global_store(), handle(bigint)?, value)?;
        Ok(SUCCESS)
    })
}

/// `bigint_get(bigint)`
pub fn bigint_get(bigint: Cell) -> Cell {
    respond("bigint_get", || Ok(LargeIntOps::get_cell(global_store(), handle(bigint)?)?))
}

/// `bigint_get_str(bigint, out[], out_size)`
///
/// Writes at most `out_size` cells, terminator included, and never past the
/// end of `out`.
pub fn bigint_get_str(bigint: Cell, out: &mut [Cell], out_size: Cell) -> Cell {
    respond("bigint_get_str", || {
        let capacity = usize::try_from(out_size).unwrap_or(0).min(out.len());
        LargeIntOps::get_text(global_store(), handle(bigint)?, &mut out[..capacity])?;
        Ok(SUCCESS)
    })
}

/// `bigint_fits_cell(bigint)`
pub fn bigint_fits_cell(bigint: Cell) -> Cell {
    respond("bigint_fits_cell", || {
        Ok(cell_from_bool(LargeIntOps::fits_cell(global_store(), handle(bigint)?)?))
    })
}

/// `bigint_fits_ucell(bigint)`
pub fn bigint_fits_ucell(bigint: Cell) -> Cell {
    respond("bigint_fits_ucell", || {
        Ok(cell_from_bool(LargeIntOps::fits_ucell(global_store(), handle(bigint)?)?))
    })
}

/// `bigint_is_odd(bigint)`
pub fn bigint_is_odd(bigint: Cell) -> Cell {
    respond("bigint_is_odd", || {
        Ok(cell_from_bool(LargeIntOps::is_odd(global_store(), handle(bigint)?)?))
    })
}

/// `bigint_is_even(bigint)`
pub fn bigint_is_even(bigint: Cell) -> Cell {
    respond("bigint_is_even", || {
        Ok(cell_from_bool(LargeIntOps::is_even(global_store(), handle(bigint)?)?))
    })
}

/// Binary facades over one operation: `$literal(op1, cell)` and `$handle(op1, op2)`
macro_rules! binary_facades {
    ($($op:ident => $literal:ident, $handle:ident;)*) => {
        $(
            #[doc = concat!("`", stringify!($literal), "(op1, op2)`")]
            pub fn $literal(op1: Cell, op2: Cell) -> Cell {
                respond(stringify!($literal), || {
                    LargeIntOps::$op(global_store(), handle(op1)?, Operand::from_cell(op2))?;
                    Ok(SUCCESS)
                })
            }

            #[doc = concat!("`", stringify!($handle), "(op1, op2)`")]
            pub fn $handle(op1: Cell, op2: Cell) -> Cell {
                respond(stringify!($handle), || {
                    LargeIntOps::$op(global_store(), handle(op1)?, Operand::Handle(handle(op2)?))?;
                    Ok(SUCCESS)
                })
            }
        )*
    };
}

binary_facades! {
    add => bigint_add, bigint_add_bi;
    sub => bigint_sub, bigint_sub_bi;
    mul => bigint_mul, bigint_mul_bi;
    div_quotient => bigint_div_q, bigint_div_q_bi;
    div_remainder => bigint_div_r, bigint_div_r_bi;
}

/// `bigint_abs(op)`
pub fn bigint_abs(op: Cell) -> Cell {
    respond("bigint_abs", || {
        LargeIntOps::abs(global_store(), handle(op)?)?;
        Ok(SUCCESS)
    })
}

/// `bigint_neg(op)`
pub fn bigint_neg(op: Cell) -> Cell {
    respond("bigint_neg", || {
        LargeIntOps::neg(global_store(), handle(op)?)?;
        Ok(SUCCESS)
    })
}

/// `bigint_root(op1, op2)`: floating approximation
pub fn bigint_root(op1: Cell, op2: Cell) -> Cell {
    respond("bigint_root", || {
        LargeIntOps::root(global_store(), handle(op1)?, i64::from(op2))?;
        Ok(SUCCESS)
    })
}

/// `bigint_root_exact(op1, op2)`
pub fn bigint_root_exact(op1: Cell, op2: Cell) -> Cell {
    respond("bigint_root_exact", || {
        LargeIntOps::root_exact(global_store(), handle(op1)?, i64::from(op2))?;
        Ok(SUCCESS)
    })
}

/// `bigint_pow(op1, op2)`: floating approximation
pub fn bigint_pow(op1: Cell, op2: Cell) -> Cell {
    respond("bigint_pow", || {
        LargeIntOps::pow(global_store(), handle(op1)?, i64::from(op2))?;
        Ok(SUCCESS)
    })
}

/// `bigint_pow_exact(op1, op2)`
pub fn bigint_pow_exact(op1: Cell, op2: Cell) -> Cell {
    respond("bigint_pow_exact", || {
        LargeIntOps::pow_exact(global_store(), handle(op1)?, i64::from(op2))?;
        Ok(SUCCESS)
    })
}

/// `bigint_cmp(op1, op2)`: `-1`, `0` or `1`; `0` also on failure
pub fn bigint_cmp(op1: Cell, op2: Cell) -> Cell {
    respond("bigint_cmp", || {
        let ordering = LargeIntOps::compare(global_store(), handle(op1)?, Operand::from_cell(op2))?;
        Ok(ordering_to_cell(ordering))
    })
}

/// `bigint_cmp_bi(op1, op2)`: `-1`, `0` or `1`; `0` also on failure
///
/// A dead handle on either side is indistinguishable from equal values.
pub fn bigint_cmp_bi(op1: Cell, op2: Cell) -> Cell {
    respond("bigint_cmp_bi", || {
        let ordering = LargeIntOps::compare(global_store(), handle(op1)?, handle(op2)?)?;
        Ok(ordering_to_cell(ordering))
    })
}

/// `bigint_cmpabs(op1, op2)`: `-1`, `0` or `1` by magnitude; `0` also on failure
pub fn bigint_cmpabs(op1: Cell, op2: Cell) -> Cell {
    respond("bigint_cmpabs", || {
        let ordering = LargeIntOps::compare_abs(global_store(), handle(op1)?, Operand::from_cell(op2))?;
        Ok(ordering_to_cell(ordering))
    })
}

/// `bigint_cmpabs_bi(op1, op2)`: `-1`, `0` or `1` by magnitude; `0` also on
/// failure
///
/// A dead handle on either side is indistinguishable from equal magnitudes.
pub fn bigint_cmpabs_bi(op1: Cell, op2: Cell) -> Cell {
    respond("bigint_cmpabs_bi", || {
        let ordering = LargeIntOps::compare_abs(global_store(), handle(op1)?, handle(op2)?)?;
        Ok(ordering_to_cell(ordering))
    })
}
