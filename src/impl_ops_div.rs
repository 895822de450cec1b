//! Implement division
//!
//! The `/` operator keeps `DEFAULT_DIVISION_SCALE` fractional digits of
//! the quotient, truncating the rest. Use [`Decimal::div_to_scale`] to
//! choose the scale or to handle a zero divisor without panicking.

use crate::*;

impl<'a, 'b> Div<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn div(self, other: &'b Decimal) -> Decimal {
        if other.is_zero() {
            panic!("Division by zero");
        }
        arithmetic::division::divide_to_scale(self, other, DEFAULT_DIVISION_SCALE)
    }
}

forward_all_binop_to_ref_ref!(impl Div for Decimal, div);
