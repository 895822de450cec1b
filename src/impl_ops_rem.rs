//! Remainder implementations
//!
//! `%` follows the integer convention: the remainder of truncated
//! division, with the sign of the dividend. [`Decimal::mod_floor`]
//! gives the floor-division remainder instead.

use crate::*;

impl<'a, 'b> Rem<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn rem(self, other: &'b Decimal) -> Decimal {
        if other.is_zero() {
            panic!("Division by zero");
        }
        arithmetic::modulo::rem_trunc(self, other)
    }
}

forward_all_binop_to_ref_ref!(impl Rem for Decimal, rem);
