//! Division of Decimals
//!
//! Quotients are computed as big-integer divisions after shifting the
//! dividend (or divisor) so the integer quotient lands at the requested
//! scale. Callers check for a zero divisor.

use crate::*;
use super::multiply_by_ten_to_the;


/// Integers (num, den) such that num / den == (a / b) × 10^scale
fn scaled_fraction(a: &Decimal, b: &Decimal, scale: u64) -> (BigInt, BigInt) {
    debug_assert!(!b.is_zero());

    let mut num = a.int_val.clone();
    let mut den = b.int_val.clone();

    // a/b × 10^scale = (ia × 10^(sb + scale)) / (ib × 10^sa)
    let num_shift = b.scale + scale;
    match num_shift.cmp(&a.scale) {
        Ordering::Greater => multiply_by_ten_to_the(&mut num, num_shift - a.scale),
        Ordering::Less => multiply_by_ten_to_the(&mut den, a.scale - num_shift),
        Ordering::Equal => {}
    }

    (num, den)
}

/// Quotient a / b with `scale` fractional digits, truncated toward zero
pub(crate) fn divide_to_scale(a: &Decimal, b: &Decimal, scale: u64) -> Decimal {
    let (num, den) = scaled_fraction(a, b, scale);
    Decimal::new(num / den, scale)
}

/// Quotient a / b with `scale` fractional digits, rounded toward -∞
pub(crate) fn divide_floor_to_scale(a: &Decimal, b: &Decimal, scale: u64) -> Decimal {
    let (num, den) = scaled_fraction(a, b, scale);
    Decimal::new(num.div_floor(&den), scale)
}
