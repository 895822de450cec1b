//! Multiplication operator trait implementation
//!

use crate::*;


impl<'a> Mul<&'a Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(mut self, rhs: &'a Decimal) -> Decimal {
        arithmetic::multiplication::multiply_decimals_into(&mut self, rhs);
        self
    }
}

impl<'a, 'b> Mul<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, rhs: &'b Decimal) -> Decimal {
        arithmetic::multiplication::multiply_decimal_refs(self, rhs)
    }
}

forward_val_val_binop!(impl Mul for Decimal, mul);
forward_ref_val_binop!(impl Mul for Decimal, mul);

forward_op_assign!(impl MulAssign for Decimal, mul_assign => Mul::mul);


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal * $b:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let a: Decimal = $a.parse().unwrap();
                let b: Decimal = $b.parse().unwrap();

                assert_eq!((a.clone() * b.clone()).to_string(), $c);
                assert_eq!((a.clone() * &b).to_string(), $c);
                assert_eq!((&a * b.clone()).to_string(), $c);
                assert_eq!((&a * &b).to_string(), $c);
                assert_eq!((&b * &a).to_string(), $c);

                let mut a = a;
                a *= b;
                assert_eq!(a.to_string(), $c);
            }
        };
    }

    impl_case!(case_2d50_4: "2.50" * "4" = "10.00");
    impl_case!(case_n0d2_0d3: "-0.2" * "0.3" = "-0.06");
    impl_case!(case_1_n7d125: "1" * "-7.125" = "-7.125");
    impl_case!(case_0d00_5: "0.00" * "5" = "0.00");
}
