//!
//! Subtraction algorithms for Decimals
//!

use crate::*;
use super::{multiply_by_ten_to_the, rescale};


/// Subtract b from a, reusing the storage of a when possible
pub(crate) fn subtract_decimals(mut a: Decimal, b: &Decimal) -> Decimal {
    match a.scale.cmp(&b.scale) {
        Ordering::Equal => {
            a.int_val -= &b.int_val;
            a
        }
        Ordering::Less => {
            multiply_by_ten_to_the(&mut a.int_val, b.scale - a.scale);
            a.int_val -= &b.int_val;
            a.scale = b.scale;
            a
        }
        Ordering::Greater => {
            a.int_val -= rescale(&b.int_val, b.scale, a.scale);
            a
        }
    }
}

/// Subtract b from a by reference
pub(crate) fn subtract_decimal_refs(a: &Decimal, b: &Decimal) -> Decimal {
    match a.scale.cmp(&b.scale) {
        Ordering::Equal => Decimal::new(&a.int_val - &b.int_val, a.scale),
        Ordering::Less => {
            let lhs = rescale(&a.int_val, a.scale, b.scale);
            Decimal::new(lhs - &b.int_val, b.scale)
        }
        Ordering::Greater => {
            let rhs = rescale(&b.int_val, b.scale, a.scale);
            Decimal::new(&a.int_val - rhs, a.scale)
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $a:literal - $b:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let lhs: Decimal = $a.parse().unwrap();
                let rhs: Decimal = $b.parse().unwrap();

                let diff = subtract_decimals(lhs.clone(), &rhs);
                assert_eq!(diff.to_string(), $c);

                // a - b == -(b - a)
                let neg_diff = subtract_decimals(rhs, &lhs);
                assert_eq!(neg_diff.int_val, -diff.int_val);
            }

            paste! {
                #[test]
                fn [< $name _refs >]() {
                    let lhs: Decimal = $a.parse().unwrap();
                    let rhs: Decimal = $b.parse().unwrap();

                    let diff = subtract_decimal_refs(&lhs, &rhs);
                    assert_eq!(diff.to_string(), $c);
                }
            }
        };
    }

    impl_case!(case_0d3_0d1: "0.3" - "0.1" = "0.2");
    impl_case!(case_1_0d01: "1" - "0.01" = "0.99");
    impl_case!(case_0d01_1: "0.01" - "1" = "-0.99");
    impl_case!(case_5_5d000: "5" - "5.000" = "0.000");
    impl_case!(case_n2d5_n2d5: "-2.5" - "-2.5" = "0.0");
    impl_case!(case_n1_0d5: "-1" - "0.5" = "-1.5");
    impl_case!(case_100_0d001: "100" - "0.001" = "99.999");
    impl_case!(case_1d234_0d4: "1.234" - "0.4" = "0.834");
}
