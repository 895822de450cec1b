//! Multiplication of Decimals
//!
//! Products are exact: the scale of the result is the sum of the
//! scales of the operands.

use crate::*;


/// Multiply two decimals by reference
pub(crate) fn multiply_decimal_refs(a: &Decimal, b: &Decimal) -> Decimal {
    if a.is_zero() || b.is_zero() {
        return Decimal::new(BigInt::zero(), a.scale + b.scale);
    }
    Decimal::new(&a.int_val * &b.int_val, a.scale + b.scale)
}

/// Multiply in place, reusing the storage of a
pub(crate) fn multiply_decimals_into(a: &mut Decimal, b: &Decimal) {
    a.int_val *= &b.int_val;
    a.scale += b.scale;
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal * $b:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let lhs: Decimal = $a.parse().unwrap();
                let rhs: Decimal = $b.parse().unwrap();

                let prod = multiply_decimal_refs(&lhs, &rhs);
                assert_eq!(prod.to_string(), $c);

                let prod = multiply_decimal_refs(&rhs, &lhs);
                assert_eq!(prod.to_string(), $c);

                let mut a = lhs;
                multiply_decimals_into(&mut a, &rhs);
                assert_eq!(a.to_string(), $c);
            }
        };
    }

    impl_case!(case_1d5_2: "1.5" * "2" = "3.0");
    impl_case!(case_0d1_0d1: "0.1" * "0.1" = "0.01");
    impl_case!(case_n1d25_0d08: "-1.25" * "0.08" = "-0.1000");
    impl_case!(case_n3_n0d5: "-3" * "-0.5" = "1.5");
    impl_case!(case_0_n7d77: "0" * "-7.77" = "0.00");
    impl_case!(case_19d99_3: "19.99" * "3" = "59.97");
    impl_case!(case_long: "12345678901234567890.12" * "98765432109876543210.9"
                        = "1219326311370217952260426763975559823186.308");
}
