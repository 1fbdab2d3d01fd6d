//! Native Registry
//!
//! Static table binding script-visible native names to their implementations.
//! The table is fixed at compile time; the name index over it is built once on
//! first lookup and never modified afterwards.

use std::collections::HashMap;

use entities_large_int::Cell;
use infrastructure_value_store::ValueStore;
use tracing::{debug, warn};

use crate::error::NativeError;
use crate::memory::ScriptMemory;
use crate::natives::{BigIntNatives, NativeResult};

/// Uniform native signature
pub type NativeFn = fn(&ValueStore, &mut dyn ScriptMemory, &[Cell]) -> NativeResult;

/// One registered native
#[derive(Clone, Copy)]
pub struct NativeEntry {
    /// Name the script calls
    pub name: &'static str,
    /// Number of cell parameters
    pub arity: usize,
    /// Implementation
    pub function: NativeFn,
}

impl std::fmt::Debug for NativeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeEntry")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

const fn native(name: &'static str, arity: usize, function: NativeFn) -> NativeEntry {
    NativeEntry { name, arity, function }
}

static NATIVES: [NativeEntry; 33] = [
    native("bigint_create", 1, BigIntNatives::create),
    native("bigint_create_bi", 1, BigIntNatives::create_bi),
    native("bigint_create_str", 1, BigIntNatives::create_str),
    native("bigint_destroy", 1, BigIntNatives::destroy),
    native("bigint_set", 2, BigIntNatives::set),
    native("bigint_set_bi", 2, BigIntNatives::set_bi),
    native("bigint_set_str", 2, BigIntNatives::set_str),
    native("bigint_get", 1, BigIntNatives::get),
    native("bigint_get_str", 3, BigIntNatives::get_str),
    native("bigint_fits_cell", 1, BigIntNatives::fits_cell),
    native("bigint_fits_ucell", 1, BigIntNatives::fits_ucell),
    native("bigint_is_odd", 1, BigIntNatives::is_odd),
    native("bigint_is_even", 1, BigIntNatives::is_even),
    native("bigint_add", 2, BigIntNatives::add),
    native("bigint_add_bi", 2, BigIntNatives::add_bi),
    native("bigint_sub", 2, BigIntNatives::sub),
    native("bigint_sub_bi", 2, BigIntNatives::sub_bi),
    native("bigint_mul", 2, BigIntNatives::mul),
    native("bigint_mul_bi", 2, BigIntNatives::mul_bi),
    native("bigint_div_q", 2, BigIntNatives::div_q),
    native("bigint_div_q_bi", 2, BigIntNatives::div_q_bi),
    native("bigint_div_r", 2, BigIntNatives::div_r),
    native("bigint_div_r_bi", 2, BigIntNatives::div_r_bi),
    native("bigint_abs", 1, BigIntNatives::abs),
    native("bigint_neg", 1, BigIntNatives::neg),
    native("bigint_root", 2, BigIntNatives::root),
    native("bigint_root_exact", 2, BigIntNatives::root_exact),
    native("bigint_pow", 2, BigIntNatives::pow),
    native("bigint_pow_exact", 2, BigIntNatives::pow_exact),
    native("bigint_cmp", 2, BigIntNatives::cmp),
    native("bigint_cmp_bi", 2, BigIntNatives::cmp_bi),
    native("bigint_cmpabs", 2, BigIntNatives::cmpabs),
    native("bigint_cmpabs_bi", 2, BigIntNatives::cmpabs_bi),
];

lazy_static::lazy_static! {
    static ref NATIVE_INDEX: HashMap<&'static str, &'static NativeEntry> =
        NATIVES.iter().map(|entry| (entry.name, entry)).collect();
}

/// Build the name index ahead of the first lookup
pub fn init() {
    lazy_static::initialize(&NATIVE_INDEX);
}

/// Every registered native, in registration order
pub fn natives() -> &'static [NativeEntry] {
    &NATIVES
}

/// Look up a native by name
pub fn lookup(name: &str) -> Option<&'static NativeEntry> {
    NATIVE_INDEX.get(name).copied()
}

/// Call a native by name
///
/// # Errors
/// [`NativeError::UnknownNative`] for an unregistered name,
/// [`NativeError::ArgumentCount`] when `args` does not match the declared
/// arity, or whatever the native itself reports.
pub fn invoke(
    store: &ValueStore,
    memory: &mut dyn ScriptMemory,
    name: &str,
    args: &[Cell],
) -> NativeResult {
    let entry = lookup(name).ok_or_else(|| NativeError::UnknownNative(name.to_string()))?;
    if args.len() != entry.arity {
        return Err(NativeError::ArgumentCount {
            expected: entry.arity,
            found: args.len(),
        });
    }
    (entry.function)(store, memory, args)
}

/// Call a native by name the way the script sees it
///
/// Failures are logged and collapse to `0`, which doubles as
/// [`INVALID_HANDLE`](infrastructure_value_store::INVALID_HANDLE) for
/// constructors and `false` for everything else.
pub fn dispatch(store: &ValueStore, memory: &mut dyn ScriptMemory, name: &str, args: &[Cell]) -> Cell {
    match invoke(store, memory, name, args) {
        Ok(result) => result,
        Err(err @ NativeError::UnknownNative(_)) => {
            warn!(native = name, %err, "native call rejected");
            0
        }
        Err(err) => {
            debug!(native = name, ?args, %err, "native call failed");
            0
        }
    }
}
