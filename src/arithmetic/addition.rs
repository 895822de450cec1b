//!
//! Addition algorithms for Decimals
//!
//! The result carries the larger of the two scales, so addition
//! never loses or rounds digits.
//!

use crate::*;
use super::{multiply_by_ten_to_the, rescale};


/// Add two decimals, reusing the storage of whichever has the larger scale
pub(crate) fn add_decimals(mut a: Decimal, mut b: Decimal) -> Decimal {
    if b.is_zero() {
        if b.scale > a.scale {
            multiply_by_ten_to_the(&mut a.int_val, b.scale - a.scale);
            a.scale = b.scale;
        }
        return a;
    }
    if a.is_zero() {
        if a.scale > b.scale {
            multiply_by_ten_to_the(&mut b.int_val, a.scale - b.scale);
            b.scale = a.scale;
        }
        return b;
    }

    match a.scale.cmp(&b.scale) {
        Ordering::Equal => {
            a.int_val += b.int_val;
            a
        }
        Ordering::Less => {
            multiply_by_ten_to_the(&mut a.int_val, b.scale - a.scale);
            b.int_val += a.int_val;
            b
        }
        Ordering::Greater => {
            multiply_by_ten_to_the(&mut b.int_val, a.scale - b.scale);
            a.int_val += b.int_val;
            a
        }
    }
}

/// Add b to a, reusing the storage of a
pub(crate) fn add_decimal_ref_into(mut a: Decimal, b: &Decimal) -> Decimal {
    match a.scale.cmp(&b.scale) {
        Ordering::Equal => {
            a.int_val += &b.int_val;
        }
        Ordering::Less => {
            multiply_by_ten_to_the(&mut a.int_val, b.scale - a.scale);
            a.int_val += &b.int_val;
            a.scale = b.scale;
        }
        Ordering::Greater => {
            a.int_val += rescale(&b.int_val, b.scale, a.scale);
        }
    }
    a
}

/// Add two decimals by reference
pub(crate) fn add_decimal_refs(a: &Decimal, b: &Decimal) -> Decimal {
    match a.scale.cmp(&b.scale) {
        Ordering::Equal => Decimal::new(&a.int_val + &b.int_val, a.scale),
        Ordering::Less => {
            let lhs = rescale(&a.int_val, a.scale, b.scale);
            Decimal::new(lhs + &b.int_val, b.scale)
        }
        Ordering::Greater => {
            let rhs = rescale(&b.int_val, b.scale, a.scale);
            Decimal::new(&a.int_val + rhs, a.scale)
        }
    }
}
