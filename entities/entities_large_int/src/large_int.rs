//! LargeInt Value
//!
//! Provides the fixed-width integer held behind every host handle.
//!
//! All arithmetic follows 64-bit two's complement rules: `add`, `sub` and
//! `mul` wrap silently, division truncates toward zero and the remainder takes
//! the sign of the dividend. The cases that would be undefined in a C-style
//! implementation are reported explicitly instead:
//!
//! - a zero divisor fails with [`LargeIntError::DivisionByZero`]
//! - `abs`/`neg` of `i64::MIN` fail with [`LargeIntError::Overflow`]
//! - floating root/power results that are NaN fail with [`LargeIntError::Domain`],
//!   results outside the 64-bit range with [`LargeIntError::Overflow`]
//!
//! A failing operation never modifies the value.
//!
//! ## Floating Approximation
//!
//! `root` and `pow` go through `f64`. Integers above 2^53 are not exactly
//! representable there, so results for large magnitudes are approximations.
//! `root_exact` and `pow_exact` are integer-exact alternatives.

use std::cmp::Ordering;
use std::fmt;

use malachite::base::num::arithmetic::traits::FloorRoot;

use crate::cell::{Cell, UCell};
use crate::error::LargeIntError;

/// 2^63, the first float past `i64::MAX`; `-2^63` is exactly `i64::MIN`
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Mutable 64-bit signed integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LargeInt {
    value: i64,
}

impl LargeInt {
    /// Create a new value
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Create a new value from a host cell (sign-extending)
    pub fn from_cell(value: Cell) -> Self {
        Self::new(i64::from(value))
    }

    /// Full 64-bit value
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Overwrite the value
    pub fn set(&mut self, value: i64) {
        self.value = value;
    }

    /// Value truncated to the host cell width
    ///
    /// Keeps the low bits only; this is a silent narrowing when the value does
    /// not fit (see [`fits_cell`](Self::fits_cell)).
    pub fn to_cell(&self) -> Cell {
        self.value as Cell
    }

    /// Whether the value lies within the signed host cell range
    pub fn fits_cell(&self) -> bool {
        (i128::from(Cell::MIN)..=i128::from(Cell::MAX)).contains(&i128::from(self.value))
    }

    /// Whether the value lies within the unsigned host cell range
    ///
    /// The comparison is numeric, not a bit reinterpretation: a negative value
    /// never fits.
    pub fn fits_ucell(&self) -> bool {
        (i128::from(UCell::MIN)..=i128::from(UCell::MAX)).contains(&i128::from(self.value))
    }

    /// Whether the value is odd
    ///
    /// Uses the truncating remainder, so `-3 % 2 == -1` counts as odd.
    pub fn is_odd(&self) -> bool {
        self.value % 2 != 0
    }

    /// Whether the value is even
    pub fn is_even(&self) -> bool {
        self.value % 2 == 0
    }

    /// `self += rhs`, wrapping on overflow
    pub fn add(&mut self, rhs: i64) {
        self.value = self.value.wrapping_add(rhs);
    }

    /// `self -= rhs`, wrapping on overflow
    pub fn sub(&mut self, rhs: i64) {
        self.value = self.value.wrapping_sub(rhs);
    }

    /// `self *= rhs`, wrapping on overflow
    pub fn mul(&mut self, rhs: i64) {
        self.value = self.value.wrapping_mul(rhs);
    }

    /// Replace the value with the truncated quotient `self / divisor`
    ///
    /// `i64::MIN / -1` wraps back to `i64::MIN`.
    ///
    /// # Errors
    /// [`LargeIntError::DivisionByZero`] when `divisor` is zero.
    pub fn div_quotient(&mut self, divisor: i64) -> Result<(), LargeIntError> {
        if divisor == 0 {
            return Err(LargeIntError::DivisionByZero);
        }
        self.value = self.value.wrapping_div(divisor);
        Ok(())
    }

    /// Replace the value with the remainder of `self / divisor`
    ///
    /// The remainder has the sign of the dividend: `-7 % 2 == -1`.
    ///
    /// # Errors
    /// [`LargeIntError::DivisionByZero`] when `divisor` is zero.
    pub fn div_remainder(&mut self, divisor: i64) -> Result<(), LargeIntError> {
        if divisor == 0 {
            return Err(LargeIntError::DivisionByZero);
        }
        self.value = self.value.wrapping_rem(divisor);
        Ok(())
    }

    /// Replace the value with its absolute value
    ///
    /// # Errors
    /// [`LargeIntError::Overflow`] for `i64::MIN`, which has no positive counterpart.
    pub fn abs(&mut self) -> Result<(), LargeIntError> {
        self.value = self.value.checked_abs().ok_or(LargeIntError::Overflow)?;
        Ok(())
    }

    /// Replace the value with its negation
    ///
    /// # Errors
    /// [`LargeIntError::Overflow`] for `i64::MIN`.
    pub fn neg(&mut self) -> Result<(), LargeIntError> {
        self.value = self.value.checked_neg().ok_or(LargeIntError::Overflow)?;
        Ok(())
    }

    /// Replace the value with its truncated `degree`-th root (floating approximation)
    ///
    /// - degree 0 or 1: unchanged
    /// - degree 2: `sqrt`
    /// - degree 3: `cbrt` (defined for negative values)
    /// - any other degree: `value.powf(1 / degree)`
    ///
    /// # Errors
    /// [`LargeIntError::Domain`] when the root is not real (even root of a
    /// negative value), [`LargeIntError::Overflow`] when it is infinite.
    pub fn root(&mut self, degree: i64) -> Result<(), LargeIntError> {
        let radicand = self.value as f64;
        let root = match degree {
            0 | 1 => return Ok(()),
            2 => radicand.sqrt(),
            3 => radicand.cbrt(),
            _ => radicand.powf(1.0 / degree as f64),
        };
        self.value = truncate_float(root)?;
        Ok(())
    }

    /// Replace the value with its exact truncated `degree`-th root
    ///
    /// Computed on integers, so it stays exact across the whole 64-bit range.
    /// Odd roots of negative values are negative (`root_exact(-30, 3) == -3`).
    ///
    /// # Errors
    /// [`LargeIntError::Domain`] for a negative degree or an even root of a
    /// negative value.
    pub fn root_exact(&mut self, degree: i64) -> Result<(), LargeIntError> {
        let degree = match degree {
            0 | 1 => return Ok(()),
            d if d < 0 => return Err(LargeIntError::Domain),
            d => d.unsigned_abs(),
        };
        if self.value < 0 && degree % 2 == 0 {
            return Err(LargeIntError::Domain);
        }

        let magnitude = self.value.unsigned_abs().floor_root(degree);
        let magnitude = i64::try_from(magnitude).map_err(|_| LargeIntError::Overflow)?;
        self.value = if self.value < 0 { -magnitude } else { magnitude };
        Ok(())
    }

    /// Replace the value with `value^exponent`, truncated (floating approximation)
    ///
    /// # Errors
    /// [`LargeIntError::Domain`] when the power is NaN, [`LargeIntError::Overflow`]
    /// when it lies outside the 64-bit range (including `0^-n`, which is infinite).
    pub fn pow(&mut self, exponent: i64) -> Result<(), LargeIntError> {
        let power = (self.value as f64).powf(exponent as f64);
        self.value = truncate_float(power)?;
        Ok(())
    }

    /// Replace the value with the exact `value^exponent`
    ///
    /// A negative exponent yields the reciprocal truncated toward zero, which
    /// is `0` for every base except `1` and `-1`.
    ///
    /// # Errors
    /// [`LargeIntError::Overflow`] when the power does not fit in 64 bits,
    /// [`LargeIntError::DivisionByZero`] for `0` raised to a negative exponent.
    pub fn pow_exact(&mut self, exponent: i64) -> Result<(), LargeIntError> {
        let odd_exponent = exponent % 2 != 0;
        let power = match self.value {
            1 => 1,
            -1 if odd_exponent => -1,
            -1 => 1,
            0 if exponent < 0 => return Err(LargeIntError::DivisionByZero),
            0 if exponent == 0 => 1,
            0 => 0,
            _ if exponent < 0 => 0,
            base => {
                let exponent = u32::try_from(exponent).map_err(|_| LargeIntError::Overflow)?;
                base.checked_pow(exponent).ok_or(LargeIntError::Overflow)?
            }
        };
        self.value = power;
        Ok(())
    }

    /// Three-way signed comparison against `other`
    pub fn compare(&self, other: i64) -> Ordering {
        self.value.cmp(&other)
    }

    /// Three-way comparison of absolute values
    ///
    /// Magnitudes are compared unsigned, so `i64::MIN` has the largest magnitude
    /// instead of overflowing.
    pub fn compare_abs(&self, other: i64) -> Ordering {
        self.value.unsigned_abs().cmp(&other.unsigned_abs())
    }
}

impl From<i64> for LargeInt {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<LargeInt> for i64 {
    fn from(value: LargeInt) -> Self {
        value.value
    }
}

impl fmt::Display for LargeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Truncate a floating result toward zero and bring it back into `i64`
fn truncate_float(result: f64) -> Result<i64, LargeIntError> {
    if result.is_nan() {
        return Err(LargeIntError::Domain);
    }
    let truncated = result.trunc();
    if truncated < -TWO_POW_63 || truncated >= TWO_POW_63 {
        return Err(LargeIntError::Overflow);
    }
    Ok(truncated as i64)
}

/// Map an `Ordering` onto the host's `-1 / 0 / 1` convention
pub fn ordering_to_cell(ordering: Ordering) -> Cell {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_value() {
        assert_eq!(LargeInt::new(i64::MAX).value(), i64::MAX);
        assert_eq!(LargeInt::from_cell(-5).value(), -5);
        assert_eq!(LargeInt::default().value(), 0);
    }

    #[test]
    fn test_to_cell_truncates() {
        assert_eq!(LargeInt::new(42).to_cell(), 42);
        #[cfg(not(feature = "cell64"))]
        {
            assert_eq!(LargeInt::new(1 << 32).to_cell(), 0);
            assert_eq!(LargeInt::new((1 << 32) + 7).to_cell(), 7);
            assert_eq!(LargeInt::new(u32::MAX as i64).to_cell(), -1);
        }
    }

    #[cfg(not(feature = "cell64"))]
    #[test]
    fn test_fits_cell_bounds() {
        assert!(LargeInt::new(i32::MAX as i64).fits_cell());
        assert!(LargeInt::new(i32::MIN as i64).fits_cell());
        assert!(!LargeInt::new(i32::MAX as i64 + 1).fits_cell());
        assert!(!LargeInt::new(i32::MIN as i64 - 1).fits_cell());
    }

    #[cfg(not(feature = "cell64"))]
    #[test]
    fn test_fits_ucell_bounds() {
        assert!(LargeInt::new(0).fits_ucell());
        assert!(LargeInt::new(u32::MAX as i64).fits_ucell());
        assert!(!LargeInt::new(u32::MAX as i64 + 1).fits_ucell());
        assert!(!LargeInt::new(-1).fits_ucell());
    }

    #[test]
    fn test_negative_never_fits_ucell() {
        for value in [-1, -2, i64::MIN] {
            assert!(!LargeInt::new(value).fits_ucell());
        }
    }

    #[test]
    fn test_parity_of_negatives() {
        assert!(LargeInt::new(-3).is_odd());
        assert!(!LargeInt::new(-3).is_even());
        assert!(LargeInt::new(-4).is_even());
        assert!(!LargeInt::new(-4).is_odd());
        assert!(LargeInt::new(i64::MIN).is_even());
        assert!(LargeInt::new(i64::MAX).is_odd());
    }

    #[test]
    fn test_wrapping_arithmetic() {
        let mut x = LargeInt::new(i64::MAX);
        x.add(1);
        assert_eq!(x.value(), i64::MIN);
        x.sub(1);
        assert_eq!(x.value(), i64::MAX);
        x.mul(2);
        assert_eq!(x.value(), -2);
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        let mut q = LargeInt::new(-7);
        q.div_quotient(2).unwrap();
        assert_eq!(q.value(), -3);

        let mut r = LargeInt::new(-7);
        r.div_remainder(2).unwrap();
        assert_eq!(r.value(), -1);

        let mut r = LargeInt::new(7);
        r.div_remainder(-2).unwrap();
        assert_eq!(r.value(), 1);
    }

    #[test]
    fn test_div_by_zero_leaves_value() {
        let mut x = LargeInt::new(10);
        assert_eq!(x.div_quotient(0), Err(LargeIntError::DivisionByZero));
        assert_eq!(x.div_remainder(0), Err(LargeIntError::DivisionByZero));
        assert_eq!(x.value(), 10);
    }

    #[test]
    fn test_div_min_by_minus_one_wraps() {
        let mut q = LargeInt::new(i64::MIN);
        q.div_quotient(-1).unwrap();
        assert_eq!(q.value(), i64::MIN);

        let mut r = LargeInt::new(i64::MIN);
        r.div_remainder(-1).unwrap();
        assert_eq!(r.value(), 0);
    }

    #[test]
    fn test_abs_and_neg() {
        let mut x = LargeInt::new(-9);
        x.abs().unwrap();
        assert_eq!(x.value(), 9);
        x.neg().unwrap();
        assert_eq!(x.value(), -9);
        x.neg().unwrap();
        assert_eq!(x.value(), 9);
    }

    #[test]
    fn test_abs_neg_of_min_overflow() {
        let mut x = LargeInt::new(i64::MIN);
        assert_eq!(x.abs(), Err(LargeIntError::Overflow));
        assert_eq!(x.neg(), Err(LargeIntError::Overflow));
        assert_eq!(x.value(), i64::MIN);
    }

    #[test]
    fn test_root_degrees() {
        let mut x = LargeInt::new(144);
        x.root(2).unwrap();
        assert_eq!(x.value(), 12);

        let mut x = LargeInt::new(10);
        x.root(2).unwrap();
        assert_eq!(x.value(), 3);

        let mut x = LargeInt::new(-30);
        x.root(3).unwrap();
        assert_eq!(x.value(), -3);

        let mut x = LargeInt::new(100);
        x.root(4).unwrap();
        assert_eq!(x.value(), 3);
    }

    #[test]
    fn test_root_degree_zero_and_one_unchanged() {
        for degree in [0, 1] {
            let mut x = LargeInt::new(-77);
            x.root(degree).unwrap();
            assert_eq!(x.value(), -77);
        }
    }

    #[test]
    fn test_root_of_negative_even_degree() {
        let mut x = LargeInt::new(-16);
        assert_eq!(x.root(2), Err(LargeIntError::Domain));
        assert_eq!(x.root(4), Err(LargeIntError::Domain));
        assert_eq!(x.value(), -16);
    }

    #[test]
    fn test_root_negative_degree_truncates_fraction() {
        let mut x = LargeInt::new(4);
        x.root(-2).unwrap();
        assert_eq!(x.value(), 0);

        let mut zero = LargeInt::new(0);
        assert_eq!(zero.root(-2), Err(LargeIntError::Overflow));
    }

    #[test]
    fn test_root_exact() {
        let mut x = LargeInt::new(i64::MAX);
        x.root_exact(2).unwrap();
        assert_eq!(x.value(), 3_037_000_499);

        let mut x = LargeInt::new(-30);
        x.root_exact(3).unwrap();
        assert_eq!(x.value(), -3);

        let mut x = LargeInt::new(i64::MIN);
        x.root_exact(3).unwrap();
        assert_eq!(x.value(), -2_097_152);

        let mut x = LargeInt::new(-4);
        assert_eq!(x.root_exact(2), Err(LargeIntError::Domain));
        assert_eq!(x.root_exact(-3), Err(LargeIntError::Domain));
        assert_eq!(x.value(), -4);
    }

    #[test]
    fn test_pow() {
        let mut x = LargeInt::new(2);
        x.pow(10).unwrap();
        assert_eq!(x.value(), 1024);

        let mut x = LargeInt::new(-3);
        x.pow(3).unwrap();
        assert_eq!(x.value(), -27);

        let mut x = LargeInt::new(2);
        x.pow(-1).unwrap();
        assert_eq!(x.value(), 0);

        let mut x = LargeInt::new(5);
        x.pow(0).unwrap();
        assert_eq!(x.value(), 1);
    }

    #[test]
    fn test_pow_out_of_range() {
        let mut x = LargeInt::new(10);
        assert_eq!(x.pow(30), Err(LargeIntError::Overflow));
        assert_eq!(x.value(), 10);

        let mut zero = LargeInt::new(0);
        assert_eq!(zero.pow(-1), Err(LargeIntError::Overflow));
    }

    #[test]
    fn test_pow_exact() {
        let mut x = LargeInt::new(3);
        x.pow_exact(39).unwrap();
        assert_eq!(x.value(), 4_052_555_153_018_976_267);

        let mut x = LargeInt::new(3);
        assert_eq!(x.pow_exact(40), Err(LargeIntError::Overflow));
        assert_eq!(x.value(), 3);

        let mut x = LargeInt::new(-1);
        x.pow_exact(i64::MAX).unwrap();
        assert_eq!(x.value(), -1);

        let mut x = LargeInt::new(7);
        x.pow_exact(-2).unwrap();
        assert_eq!(x.value(), 0);

        let mut zero = LargeInt::new(0);
        assert_eq!(zero.pow_exact(-1), Err(LargeIntError::DivisionByZero));
        zero.pow_exact(0).unwrap();
        assert_eq!(zero.value(), 1);
    }

    #[test]
    fn test_compare() {
        let x = LargeInt::new(5);
        assert_eq!(x.compare(3), Ordering::Greater);
        assert_eq!(x.compare(5), Ordering::Equal);
        assert_eq!(x.compare(8), Ordering::Less);
    }

    #[test]
    fn test_compare_abs() {
        let x = LargeInt::new(-5);
        assert_eq!(x.compare_abs(3), Ordering::Greater);
        assert_eq!(x.compare_abs(5), Ordering::Equal);
        assert_eq!(x.compare_abs(-8), Ordering::Less);
        assert_eq!(LargeInt::new(i64::MIN).compare_abs(i64::MAX), Ordering::Greater);
    }

    #[test]
    fn test_ordering_to_cell() {
        assert_eq!(ordering_to_cell(Ordering::Less), -1);
        assert_eq!(ordering_to_cell(Ordering::Equal), 0);
        assert_eq!(ordering_to_cell(Ordering::Greater), 1);
    }
}
