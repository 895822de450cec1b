//! Code for num_traits

use crate::*;


impl Zero for Decimal {
    #[inline]
    fn zero() -> Decimal {
        Decimal::new(BigInt::zero(), 0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.int_val.is_zero()
    }
}

impl One for Decimal {
    #[inline]
    fn one() -> Decimal {
        Decimal::new(BigInt::one(), 0)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.int_val.is_positive() && self.int_val.magnitude() == &arithmetic::ten_to_the_uint(self.scale)
    }
}
