//! Implement math operations: Neg, and Add/Sub/Mul with integer primitives

use crate::*;


impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(mut self) -> Decimal {
        self.int_val = -self.int_val;
        self
    }
}

impl<'a> Neg for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        Decimal::new(-&self.int_val, self.scale)
    }
}


macro_rules! impl_ops_for_primitive {
    ($t:ty) => {
        impl_ops_for_primitive!(IMPL $t; Add::add, AddAssign::add_assign);
        impl_ops_for_primitive!(IMPL $t; Sub::sub, SubAssign::sub_assign);
        impl_ops_for_primitive!(IMPL $t; Mul::mul, MulAssign::mul_assign);
    };
    (IMPL $t:ty; $op:ident::$method:ident, $op_assign:ident::$assign_method:ident) => {
        impl $op<$t> for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: $t) -> Decimal {
                $op::$method(self, Decimal::from(rhs))
            }
        }

        impl $op<$t> for &Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: $t) -> Decimal {
                $op::$method(self, &Decimal::from(rhs))
            }
        }

        impl $op<Decimal> for $t {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: Decimal) -> Decimal {
                $op::$method(Decimal::from(self), rhs)
            }
        }

        impl $op<&Decimal> for $t {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: &Decimal) -> Decimal {
                $op::$method(&Decimal::from(self), rhs)
            }
        }

        impl $op_assign<$t> for Decimal {
            #[inline]
            fn $assign_method(&mut self, rhs: $t) {
                $op_assign::$assign_method(self, Decimal::from(rhs));
            }
        }
    };
}

impl_ops_for_primitive!(u8);
impl_ops_for_primitive!(u16);
impl_ops_for_primitive!(u32);
impl_ops_for_primitive!(u64);
impl_ops_for_primitive!(u128);
impl_ops_for_primitive!(i8);
impl_ops_for_primitive!(i16);
impl_ops_for_primitive!(i32);
impl_ops_for_primitive!(i64);
impl_ops_for_primitive!(i128);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    #[test]
    fn neg_zero_has_no_sign() {
        let n: Decimal = "0.00".parse().unwrap();
        assert_eq!((-&n).to_string(), "0.00");
        assert_eq!((-n).sign(), Sign::NoSign);
    }

    #[test]
    fn neg_twice() {
        let n: Decimal = "-12.34".parse().unwrap();
        assert_eq!((-(-n.clone())), n);
        assert_eq!((-&n).to_string(), "12.34");
    }

    macro_rules! impl_case {
        ($name:ident: $t:ty, $a:literal, $n:literal => add=$add:literal, sub=$sub:literal, mul=$mul:literal) => {
            paste! {
                #[test]
                fn [< primitive_ $name >]() {
                    let d: Decimal = $a.parse().unwrap();
                    let n: $t = $n;

                    assert_eq!((&d + n).to_string(), $add);
                    assert_eq!((n + &d).to_string(), $add);
                    assert_eq!((&d - n).to_string(), $sub);
                    assert_eq!((-(n - d.clone())).to_string(), $sub);
                    assert_eq!((d.clone() * n).to_string(), $mul);
                    assert_eq!((n * &d).to_string(), $mul);

                    let mut acc = d.clone();
                    acc += n;
                    acc -= n;
                    assert_eq!(acc, d);
                }
            }
        };
    }

    impl_case!(u8: u8, "1.25", 3 => add="4.25", sub="-1.75", mul="3.75");
    impl_case!(i32: i32, "-0.5", -2 => add="-2.5", sub="1.5", mul="1.0");
    impl_case!(i64: i64, "100.00", 7 => add="107.00", sub="93.00", mul="700.00");
    impl_case!(u128: u128, "0.001", 1000 => add="1000.001", sub="-999.999", mul="1.000");
}
