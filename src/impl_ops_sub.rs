//! Subtraction operator trait implementation
//!

use crate::*;


impl Sub<Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: Decimal) -> Decimal {
        arithmetic::subtraction::subtract_decimals(self, &rhs)
    }
}

impl<'a> Sub<&'a Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: &'a Decimal) -> Decimal {
        arithmetic::subtraction::subtract_decimals(self, rhs)
    }
}

impl<'a> Sub<Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: Decimal) -> Decimal {
        // a - b == -(b - a)
        arithmetic::subtraction::subtract_decimals(rhs, self).neg()
    }
}

impl<'a, 'b> Sub<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: &'b Decimal) -> Decimal {
        arithmetic::subtraction::subtract_decimal_refs(self, rhs)
    }
}

forward_op_assign!(impl SubAssign for Decimal, sub_assign => Sub::sub);


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal - $b:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let a: Decimal = $a.parse().unwrap();
                let b: Decimal = $b.parse().unwrap();

                assert_eq!((a.clone() - b.clone()).to_string(), $c);
                assert_eq!((a.clone() - &b).to_string(), $c);
                assert_eq!((&a - b.clone()).to_string(), $c);
                assert_eq!((&a - &b).to_string(), $c);

                let mut a = a;
                a -= b;
                assert_eq!(a.to_string(), $c);
            }
        };
    }

    impl_case!(case_0d3_0d1: "0.3" - "0.1" = "0.2");
    impl_case!(case_10_0d01: "10" - "0.01" = "9.99");
    impl_case!(case_n5d5_4d50: "-5.5" - "4.50" = "-10.00");
    impl_case!(case_1_1: "1" - "1" = "0");
    impl_case!(case_0d001_n0d001: "0.001" - "-0.001" = "0.002");
}
