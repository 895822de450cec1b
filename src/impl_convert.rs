//! Code for implementing From conversions into Decimals

use crate::*;


macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for Decimal {
            fn from(n: $t) -> Self {
                Decimal {
                    int_val: n.into(),
                    scale: 0,
                }
            }
        }

        impl From<&$t> for Decimal {
            fn from(n: &$t) -> Self {
                Decimal {
                    int_val: (*n).into(),
                    scale: 0,
                }
            }
        }
    };
}

impl_from_int_primitive!(u8);
impl_from_int_primitive!(u16);
impl_from_int_primitive!(u32);
impl_from_int_primitive!(u64);
impl_from_int_primitive!(u128);
impl_from_int_primitive!(usize);
impl_from_int_primitive!(i8);
impl_from_int_primitive!(i16);
impl_from_int_primitive!(i32);
impl_from_int_primitive!(i64);
impl_from_int_primitive!(i128);
impl_from_int_primitive!(isize);

impl From<BigInt> for Decimal {
    #[inline]
    fn from(int_val: BigInt) -> Self {
        Decimal::new(int_val, 0)
    }
}

impl From<BigUint> for Decimal {
    #[inline]
    fn from(int_val: BigUint) -> Self {
        Decimal::new(int_val.into(), 0)
    }
}

impl<'a> TryFrom<&'a str> for Decimal {
    type Error = ParseDecimalError;

    #[inline]
    fn try_from(s: &'a str) -> Result<Decimal, ParseDecimalError> {
        s.parse()
    }
}
