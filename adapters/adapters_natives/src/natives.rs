//! BigInt Natives
//!
//! Script-callable entry points. Each native has the uniform signature
//! [`NativeFn`](crate::registry::NativeFn): it decodes its cell parameters,
//! runs one operation on the store and encodes the result as a cell.
//!
//! Results follow the script conventions: `1` for success on mutating
//! natives, the new handle for constructors, the value or `-1 / 0 / 1` for
//! queries. Errors are returned as [`NativeError`] and turned into the falsy
//! result by the dispatcher.

use entities_large_int::cell::cell_from_bool;
use entities_large_int::large_int::ordering_to_cell;
use entities_large_int::{Cell, LargeInt};
use infrastructure_value_store::{Handle, ValueStore};
use usecases_large_int_ops::{LargeIntOps, Operand};

use crate::error::NativeError;
use crate::memory::ScriptMemory;

/// Result of a native call
pub type NativeResult = Result<Cell, NativeError>;

const SUCCESS: Cell = 1;

/// Split the parameter list into exactly `N` cells
fn params<const N: usize>(args: &[Cell]) -> Result<[Cell; N], NativeError> {
    <[Cell; N]>::try_from(args).map_err(|_| NativeError::ArgumentCount {
        expected: N,
        found: args.len(),
    })
}

fn handle(cell: Cell) -> Result<Handle, NativeError> {
    Handle::from_cell(cell).ok_or(NativeError::NotAHandle(cell))
}

/// BigInt native implementations
pub struct BigIntNatives;

impl BigIntNatives {
    /// `bigint_create(initial)`: new handle holding `initial`
    pub fn create(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [initial] = params(args)?;
        Ok(store.insert(LargeInt::from_cell(initial))?.to_cell())
    }

    /// `bigint_create_bi(other)`: new handle holding a copy of `other`
    pub fn create_bi(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [other] = params(args)?;
        Ok(store.create_from(handle(other)?)?.to_cell())
    }

    /// `bigint_create_str(const text[])`: new handle parsed from text
    pub fn create_str(store: &ValueStore, memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [text] = params(args)?;
        let text = memory.read_string(text)?;
        Ok(store.create_from_text(&text)?.to_cell())
    }

    /// `bigint_destroy(bigint)`
    pub fn destroy(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint] = params(args)?;
        store.destroy(handle(bigint)?)?;
        Ok(SUCCESS)
    }

    /// `bigint_set(bigint, value)`
    pub fn set(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint, value] = params(args)?;
        LargeIntOps::set(store, handle(bigint)?, i64::from(value))?;
        Ok(SUCCESS)
    }

    /// `bigint_set_bi(bigint, other)`
    pub fn set_bi(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint, other] = params(args)?;
        LargeIntOps::set_from(store, handle(bigint)?, handle(other)?)?;
        Ok(SUCCESS)
    }

    /// `bigint_set_str(bigint, const text[])`
    pub fn set_str(store: &ValueStore, memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint, text] = params(args)?;
        let text = memory.read_string(text)?;
        LargeIntOps::set_from_text(store, handle(bigint)?, &text)?;
        Ok(SUCCESS)
    }

    /// `bigint_get(bigint)`: value truncated to the cell width
    pub fn get(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint] = params(args)?;
        Ok(LargeIntOps::get_cell(store, handle(bigint)?)?)
    }

    /// `bigint_get_str(bigint, out[], size)`
    ///
    /// `size` counts cells including the terminator. A negative size is
    /// treated as no room at all.
    pub fn get_str(store: &ValueStore, memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint, out, size] = params(args)?;
        let bigint = handle(bigint)?;
        let capacity = usize::try_from(size).unwrap_or(0);
        let buffer = memory.cells_mut(out, capacity)?;
        LargeIntOps::get_text(store, bigint, buffer)?;
        Ok(SUCCESS)
    }

    /// `bigint_fits_cell(bigint)`
    pub fn fits_cell(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint] = params(args)?;
        Ok(cell_from_bool(LargeIntOps::fits_cell(store, handle(bigint)?)?))
    }

    /// `bigint_fits_ucell(bigint)`
    pub fn fits_ucell(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint] = params(args)?;
        Ok(cell_from_bool(LargeIntOps::fits_ucell(store, handle(bigint)?)?))
    }

    /// `bigint_is_odd(bigint)`
    pub fn is_odd(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint] = params(args)?;
        Ok(cell_from_bool(LargeIntOps::is_odd(store, handle(bigint)?)?))
    }

    /// `bigint_is_even(bigint)`
    pub fn is_even(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint] = params(args)?;
        Ok(cell_from_bool(LargeIntOps::is_even(store, handle(bigint)?)?))
    }

    /// `bigint_add(bigint, value)`
    pub fn add(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = literal_operand(args)?;
        LargeIntOps::add(store, bigint, operand)?;
        Ok(SUCCESS)
    }

    /// `bigint_add_bi(bigint, other)`
    pub fn add_bi(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = handle_operand(args)?;
        LargeIntOps::add(store, bigint, operand)?;
        Ok(SUCCESS)
    }

    /// `bigint_sub(bigint, value)`
    pub fn sub(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = literal_operand(args)?;
        LargeIntOps::sub(store, bigint, operand)?;
        Ok(SUCCESS)
    }

    /// `bigint_sub_bi(bigint, other)`
    pub fn sub_bi(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = handle_operand(args)?;
        LargeIntOps::sub(store, bigint, operand)?;
        Ok(SUCCESS)
    }

    /// `bigint_mul(bigint, value)`
    pub fn mul(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = literal_operand(args)?;
        LargeIntOps::mul(store, bigint, operand)?;
        Ok(SUCCESS)
    }

    /// `bigint_mul_bi(bigint, other)`
    pub fn mul_bi(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = handle_operand(args)?;
        LargeIntOps::mul(store, bigint, operand)?;
        Ok(SUCCESS)
    }

    /// `bigint_div_q(bigint, value)`
    pub fn div_q(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = literal_operand(args)?;
        LargeIntOps::div_quotient(store, bigint, operand)?;
        Ok(SUCCESS)
    }

    /// `bigint_div_q_bi(bigint, other)`
    pub fn div_q_bi(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = handle_operand(args)?;
        LargeIntOps::div_quotient(store, bigint, operand)?;
        Ok(SUCCESS)
    }

    /// `bigint_div_r(bigint, value)`
    pub fn div_r(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = literal_operand(args)?;
        LargeIntOps::div_remainder(store, bigint, operand)?;
        Ok(SUCCESS)
    }

    /// `bigint_div_r_bi(bigint, other)`
    pub fn div_r_bi(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = handle_operand(args)?;
        LargeIntOps::div_remainder(store, bigint, operand)?;
        Ok(SUCCESS)
    }

    /// `bigint_abs(bigint)`
    pub fn abs(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint] = params(args)?;
        LargeIntOps::abs(store, handle(bigint)?)?;
        Ok(SUCCESS)
    }

    /// `bigint_neg(bigint)`
    pub fn neg(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint] = params(args)?;
        LargeIntOps::neg(store, handle(bigint)?)?;
        Ok(SUCCESS)
    }

    /// `bigint_root(bigint, degree)`
    pub fn root(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint, degree] = params(args)?;
        LargeIntOps::root(store, handle(bigint)?, i64::from(degree))?;
        Ok(SUCCESS)
    }

    /// `bigint_root_exact(bigint, degree)`
    pub fn root_exact(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint, degree] = params(args)?;
        LargeIntOps::root_exact(store, handle(bigint)?, i64::from(degree))?;
        Ok(SUCCESS)
    }

    /// `bigint_pow(bigint, exponent)`
    pub fn pow(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint, exponent] = params(args)?;
        LargeIntOps::pow(store, handle(bigint)?, i64::from(exponent))?;
        Ok(SUCCESS)
    }

    /// `bigint_pow_exact(bigint, exponent)`
    pub fn pow_exact(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let [bigint, exponent] = params(args)?;
        LargeIntOps::pow_exact(store, handle(bigint)?, i64::from(exponent))?;
        Ok(SUCCESS)
    }

    /// `bigint_cmp(bigint, value)`: `-1`, `0` or `1`
    ///
    /// Through [`dispatch`](crate::registry::dispatch) a failed comparison
    /// also yields `0`, which the script cannot tell apart from equal.
    pub fn cmp(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = literal_operand(args)?;
        Ok(ordering_to_cell(LargeIntOps::compare(store, bigint, operand)?))
    }

    /// `bigint_cmp_bi(bigint, other)`: `-1`, `0` or `1`
    ///
    /// A dead handle on either side dispatches to `0`, same as equal.
    pub fn cmp_bi(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = handle_operand(args)?;
        Ok(ordering_to_cell(LargeIntOps::compare(store, bigint, operand)?))
    }

    /// `bigint_cmpabs(bigint, value)`: magnitude comparison
    ///
    /// A dead handle dispatches to `0`, same as equal magnitudes.
    pub fn cmpabs(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = literal_operand(args)?;
        Ok(ordering_to_cell(LargeIntOps::compare_abs(store, bigint, operand)?))
    }

    /// `bigint_cmpabs_bi(bigint, other)`: magnitude comparison
    ///
    /// A dead handle on either side dispatches to `0`, same as equal
    /// magnitudes.
    pub fn cmpabs_bi(store: &ValueStore, _memory: &mut dyn ScriptMemory, args: &[Cell]) -> NativeResult {
        let (bigint, operand) = handle_operand(args)?;
        Ok(ordering_to_cell(LargeIntOps::compare_abs(store, bigint, operand)?))
    }
}

/// `(bigint, value)` parameters
fn literal_operand(args: &[Cell]) -> Result<(Handle, Operand), NativeError> {
    let [bigint, value] = params(args)?;
    Ok((handle(bigint)?, Operand::from_cell(value)))
}

/// `(bigint, other)` parameters
fn handle_operand(args: &[Cell]) -> Result<(Handle, Operand), NativeError> {
    let [bigint, other] = params(args)?;
    Ok((handle(bigint)?, Operand::Handle(handle(other)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::CellHeap;
    use entities_large_int::LargeIntError;
    use infrastructure_value_store::{StoreError, INVALID_HANDLE};

    fn setup() -> (ValueStore, CellHeap) {
        (ValueStore::new(), CellHeap::new())
    }

    #[test]
    fn test_create_and_get() {
        let (store, mut heap) = setup();
        let h = BigIntNatives::create(&store, &mut heap, &[-17]).unwrap();
        assert_ne!(h, INVALID_HANDLE);
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[h]).unwrap(), -17);
    }

    #[test]
    fn test_create_str() {
        let (store, mut heap) = setup();
        let text = heap.alloc_string("123456789012");
        let h = BigIntNatives::create_str(&store, &mut heap, &[text]).unwrap();
        assert_eq!(store.get(handle(h).unwrap()).unwrap().value(), 123_456_789_012);

        let bad = heap.alloc_string("12abc");
        assert!(matches!(
            BigIntNatives::create_str(&store, &mut heap, &[bad]),
            Err(NativeError::Store(StoreError::Value(LargeIntError::Parse(_))))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_string_natives_reject_wide_cells() {
        let (store, mut heap) = setup();
        let text = heap.alloc(3);
        heap.cells_mut(text, 3).unwrap().copy_from_slice(&[0x131, 0x232, 0]);

        assert_eq!(
            BigIntNatives::create_str(&store, &mut heap, &[text]),
            Err(NativeError::BadString(text))
        );
        assert!(store.is_empty());

        let h = BigIntNatives::create(&store, &mut heap, &[99]).unwrap();
        assert_eq!(
            BigIntNatives::set_str(&store, &mut heap, &[h, text]),
            Err(NativeError::BadString(text))
        );
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[h]).unwrap(), 99);
    }

    #[test]
    fn test_destroy_sentinel_and_stale() {
        let (store, mut heap) = setup();
        assert_eq!(
            BigIntNatives::destroy(&store, &mut heap, &[INVALID_HANDLE]),
            Err(NativeError::NotAHandle(INVALID_HANDLE))
        );
        let h = BigIntNatives::create(&store, &mut heap, &[1]).unwrap();
        assert_eq!(BigIntNatives::destroy(&store, &mut heap, &[h]), Ok(SUCCESS));
        assert!(matches!(
            BigIntNatives::destroy(&store, &mut heap, &[h]),
            Err(NativeError::Store(StoreError::InvalidHandle(_)))
        ));
    }

    #[test]
    fn test_get_str() {
        let (store, mut heap) = setup();
        let h = BigIntNatives::create(&store, &mut heap, &[-250]).unwrap();

        let small = heap.alloc(4);
        assert!(BigIntNatives::get_str(&store, &mut heap, &[h, small, 4]).is_err());
        assert_eq!(heap.cells(small, 4).unwrap(), &[0, 0, 0, 0]);

        let exact = heap.alloc(5);
        assert_eq!(BigIntNatives::get_str(&store, &mut heap, &[h, exact, 5]), Ok(SUCCESS));
        assert_eq!(heap.read_string(exact).unwrap(), "-250");

        assert!(BigIntNatives::get_str(&store, &mut heap, &[h, exact, -1]).is_err());
    }

    #[test]
    fn test_arithmetic_variants() {
        let (store, mut heap) = setup();
        let a = BigIntNatives::create(&store, &mut heap, &[100]).unwrap();
        let b = BigIntNatives::create(&store, &mut heap, &[7]).unwrap();

        BigIntNatives::add(&store, &mut heap, &[a, 5]).unwrap();
        BigIntNatives::sub_bi(&store, &mut heap, &[a, b]).unwrap();
        BigIntNatives::mul(&store, &mut heap, &[a, -2]).unwrap();
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[a]).unwrap(), -196);

        BigIntNatives::div_q_bi(&store, &mut heap, &[a, b]).unwrap();
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[a]).unwrap(), -28);
        BigIntNatives::div_r(&store, &mut heap, &[a, 5]).unwrap();
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[a]).unwrap(), -3);

        assert!(BigIntNatives::div_q(&store, &mut heap, &[a, 0]).is_err());
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[a]).unwrap(), -3);
    }

    #[test]
    fn test_compare_natives() {
        let (store, mut heap) = setup();
        let a = BigIntNatives::create(&store, &mut heap, &[-9]).unwrap();
        let b = BigIntNatives::create(&store, &mut heap, &[4]).unwrap();
        assert_eq!(BigIntNatives::cmp(&store, &mut heap, &[a, 0]), Ok(-1));
        assert_eq!(BigIntNatives::cmp_bi(&store, &mut heap, &[b, a]), Ok(1));
        assert_eq!(BigIntNatives::cmpabs(&store, &mut heap, &[a, 9]), Ok(0));
        assert_eq!(BigIntNatives::cmpabs_bi(&store, &mut heap, &[a, b]), Ok(1));
    }

    #[test]
    fn test_compare_dead_handle_is_an_error() {
        let (store, mut heap) = setup();
        let a = BigIntNatives::create(&store, &mut heap, &[3]).unwrap();
        let b = BigIntNatives::create(&store, &mut heap, &[3]).unwrap();
        BigIntNatives::destroy(&store, &mut heap, &[b]).unwrap();

        let stale = Err(NativeError::Store(StoreError::InvalidHandle(handle(b).unwrap())));
        assert_eq!(BigIntNatives::cmp(&store, &mut heap, &[b, 3]), stale);
        assert_eq!(BigIntNatives::cmp_bi(&store, &mut heap, &[a, b]), stale);
        assert_eq!(BigIntNatives::cmpabs(&store, &mut heap, &[b, -3]), stale);
        assert_eq!(BigIntNatives::cmpabs_bi(&store, &mut heap, &[b, a]), stale);
    }

    #[test]
    fn test_predicates() {
        let (store, mut heap) = setup();
        let h = BigIntNatives::create(&store, &mut heap, &[-3]).unwrap();
        assert_eq!(BigIntNatives::is_odd(&store, &mut heap, &[h]), Ok(1));
        assert_eq!(BigIntNatives::is_even(&store, &mut heap, &[h]), Ok(0));
        assert_eq!(BigIntNatives::fits_cell(&store, &mut heap, &[h]), Ok(1));
        assert_eq!(BigIntNatives::fits_ucell(&store, &mut heap, &[h]), Ok(0));
    }

    #[test]
    fn test_roots_and_powers() {
        let (store, mut heap) = setup();
        let h = BigIntNatives::create(&store, &mut heap, &[144]).unwrap();
        BigIntNatives::root(&store, &mut heap, &[h, 2]).unwrap();
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[h]).unwrap(), 12);
        BigIntNatives::pow_exact(&store, &mut heap, &[h, 3]).unwrap();
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[h]).unwrap(), 1728);
        BigIntNatives::root_exact(&store, &mut heap, &[h, 3]).unwrap();
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[h]).unwrap(), 12);
        BigIntNatives::pow(&store, &mut heap, &[h, 2]).unwrap();
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[h]).unwrap(), 144);
    }

    #[test]
    fn test_set_variants() {
        let (store, mut heap) = setup();
        let a = BigIntNatives::create(&store, &mut heap, &[0]).unwrap();
        let b = BigIntNatives::create(&store, &mut heap, &[31]).unwrap();
        BigIntNatives::set(&store, &mut heap, &[a, 8]).unwrap();
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[a]).unwrap(), 8);
        BigIntNatives::set_bi(&store, &mut heap, &[a, b]).unwrap();
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[a]).unwrap(), 31);

        let text = heap.alloc_string("");
        assert!(BigIntNatives::set_str(&store, &mut heap, &[a, text]).is_err());
        assert_eq!(BigIntNatives::get(&store, &mut heap, &[a]).unwrap(), 31);
    }

    #[test]
    fn test_wrong_parameter_count() {
        let (store, mut heap) = setup();
        assert_eq!(
            BigIntNatives::add(&store, &mut heap, &[1]),
            Err(NativeError::ArgumentCount { expected: 2, found: 1 })
        );
    }
}
