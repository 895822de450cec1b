//! Addition operator trait implementation
//!

use crate::*;


impl Add<Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: Decimal) -> Decimal {
        arithmetic::addition::add_decimals(self, rhs)
    }
}

impl<'a> Add<&'a Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: &'a Decimal) -> Decimal {
        arithmetic::addition::add_decimal_ref_into(self, rhs)
    }
}

impl<'a> Add<Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: Decimal) -> Decimal {
        rhs + self
    }
}

impl<'a, 'b> Add<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: &'b Decimal) -> Decimal {
        arithmetic::addition::add_decimal_refs(self, rhs)
    }
}

forward_op_assign!(impl AddAssign for Decimal, add_assign => Add::add);


impl Sum for Decimal {
    #[inline]
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    #[inline]
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Decimal {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $a:literal + $b:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let a: Decimal = $a.parse().unwrap();
                let b: Decimal = $b.parse().unwrap();
                let c: Decimal = $c.parse().unwrap();

                assert_eq!(c.to_string(), (a.clone() + b.clone()).to_string());
                assert_eq!(c.to_string(), (a.clone() + &b).to_string());
                assert_eq!(c.to_string(), (&a + b.clone()).to_string());
                assert_eq!(c.to_string(), (&a + &b).to_string());
                assert_eq!(c.to_string(), (b.clone() + &a).to_string());
            }

            paste! {
                #[test]
                fn [< $name _assign >]() {
                    let mut a: Decimal = $a.parse().unwrap();
                    let b: Decimal = $b.parse().unwrap();

                    a += &b;
                    assert_eq!(a.to_string(), $c);

                    let mut a: Decimal = $a.parse().unwrap();
                    a += b;
                    assert_eq!(a.to_string(), $c);
                }
            }
        };
    }

    impl_case!(case_0d1_0d2: "0.1" + "0.2" = "0.3");
    impl_case!(case_12d34_1d234: "12.34" + "1.234" = "13.574");
    impl_case!(case_n1_0d001: "-1" + "0.001" = "-0.999");
    impl_case!(case_1d00_n1: "1.00" + "-1" = "0.00");
    impl_case!(case_0_0d000: "0" + "0.000" = "0.000");

    #[test]
    fn sum_owned() {
        let prices = ["19.99", "5.01", "0.005"];
        let total: Decimal = prices.iter().map(|p| p.parse::<Decimal>().unwrap()).sum();
        assert_eq!(total.to_string(), "25.005");
    }

    #[test]
    fn sum_refs() {
        let values: Vec<Decimal> = ["-1.5", "1.5", "2"].iter().map(|p| p.parse().unwrap()).collect();
        let total: Decimal = values.iter().sum();
        assert_eq!(total.to_string(), "2.0");
    }

    #[test]
    fn sum_empty() {
        let total: Decimal = stdlib::iter::empty::<Decimal>().sum();
        assert_eq!(total.to_string(), "0");
    }
}
