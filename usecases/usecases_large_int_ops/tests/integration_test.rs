//! Integration tests for usecases_large_int_ops crate
//!
//! These tests drive the operation set the way a host script would: allocate,
//! compute through several operations, read the result back as text.

use std::cmp::Ordering;

use entities_large_int::LargeIntError;
use infrastructure_value_store::{StoreError, ValueStore};
use usecases_large_int_ops::{LargeIntOps, Operand};

#[test]
fn test_factorial_chain() {
    let store = ValueStore::new();
    let acc = store.create(1).unwrap();
    for i in 1..=20 {
        LargeIntOps::mul(&store, acc, i).unwrap();
    }

    let mut text = [0u8; 32];
    let written = LargeIntOps::get_text(&store, acc, &mut text).unwrap();
    assert_eq!(&text[..written], b"2432902008176640000");
    assert_eq!(text[written], 0);
}

#[test]
fn test_mixed_operands() {
    let store = ValueStore::new();
    let a = store.create_from_text("9000000000").unwrap();
    let b = store.create(3).unwrap();

    LargeIntOps::div_quotient(&store, a, Operand::Handle(b)).unwrap();
    assert_eq!(LargeIntOps::get(&store, a).unwrap(), 3_000_000_000);

    LargeIntOps::sub(&store, a, Operand::Literal(3_000_000_001)).unwrap();
    assert_eq!(LargeIntOps::get(&store, a).unwrap(), -1);
    assert_eq!(LargeIntOps::compare(&store, a, b).unwrap(), Ordering::Less);
    assert_eq!(LargeIntOps::compare_abs(&store, a, 1).unwrap(), Ordering::Equal);
}

#[test]
fn test_text_assignment_round_trip() {
    let store = ValueStore::new();
    let h = store.create(0).unwrap();
    LargeIntOps::set_from_text(&store, h, "  -4611686018427387904 ").unwrap();
    LargeIntOps::mul(&store, h, 2).unwrap();
    assert_eq!(LargeIntOps::get(&store, h).unwrap(), i64::MIN);

    let mut wide = [0u32; 21];
    let written = LargeIntOps::get_text(&store, h, &mut wide).unwrap();
    assert_eq!(written, 20);
    let rendered: String = wide[..written].iter().map(|&c| char::from(c as u8)).collect();
    assert_eq!(rendered, "-9223372036854775808");
}

#[test]
fn test_errors_leave_state_intact() {
    let store = ValueStore::new();
    let h = store.create(i64::MIN).unwrap();

    assert_eq!(
        LargeIntOps::neg(&store, h),
        Err(StoreError::Value(LargeIntError::Overflow))
    );
    assert_eq!(
        LargeIntOps::div_remainder(&store, h, 0),
        Err(StoreError::Value(LargeIntError::DivisionByZero))
    );
    assert_eq!(
        LargeIntOps::root_exact(&store, h, 2),
        Err(StoreError::Value(LargeIntError::Domain))
    );
    assert_eq!(LargeIntOps::get(&store, h).unwrap(), i64::MIN);
}

#[test]
fn test_operations_after_destroy() {
    let store = ValueStore::new();
    let h = store.create(4).unwrap();
    store.destroy(h).unwrap();

    assert_eq!(LargeIntOps::get(&store, h), Err(StoreError::InvalidHandle(h)));
    assert_eq!(LargeIntOps::add(&store, h, 1), Err(StoreError::InvalidHandle(h)));
    assert_eq!(LargeIntOps::is_odd(&store, h), Err(StoreError::InvalidHandle(h)));
    assert_eq!(LargeIntOps::set(&store, h, 1), Err(StoreError::InvalidHandle(h)));
}
