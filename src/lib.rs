// Copyright 2016 Adam Sunderland
//           2016-2023 Andrew Kubera
//           2017 Ruben De Smet
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exact decimal arithmetic for money
//!
//! `decimath` performs calculations on decimal numbers written as plain
//! strings (`"-12.50"`), without ever passing through binary floating
//! point. `0.1 + 0.2` is exactly `0.3`.
//!
//! Internally a [`Decimal`] is a `BigInt` paired with a non-negative
//! scale: the number of digits after the decimal point. Addition,
//! subtraction and multiplication are exact; division truncates to a
//! requested number of fractional digits; rounding is explicit and
//! parameterized by a [`RoundingMode`].
//!
//! Two layers of API are provided:
//!
//! * [`Decimal`], a value type with the usual operator overloads
//! * [`calculator`], free functions taking and returning decimal strings
//!
//! # Example
//!
//! ```
//! use decimath::calculator;
//!
//! assert_eq!(calculator::add("0.1", "0.2").unwrap(), "0.3");
//! assert_eq!(calculator::divide("10", "3", 4).unwrap(), "3.3333");
//! assert_eq!(calculator::round("1.125", 2, Default::default()).unwrap(), "1.13");
//!
//! let parts = calculator::allocate("100", &["1", "2"]).unwrap();
//! assert_eq!(parts, ["33", "67"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::redundant_field_names)]


pub use num_bigint;
pub use num_traits;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::Ordering;
use self::stdlib::convert::TryFrom;
use self::stdlib::default::Default;
use self::stdlib::hash::{Hash, Hasher};
use self::stdlib::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use self::stdlib::iter::Sum;
use self::stdlib::str::FromStr;
use self::stdlib::string::{String, ToString};
use self::stdlib::Vec;
use self::stdlib::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer as IntegerTrait;
pub use num_traits::{One, Signed, ToPrimitive, Zero};


// pub const DEFAULT_DIVISION_SCALE: u64 = ${DECIMATH_DEFAULT_DIVISION_SCALE} or 14;
include!(concat!(env!("OUT_DIR"), "/default_division_scale.rs"));

#[macro_use]
mod macros;

mod error;
pub use error::{Error, ParseDecimalError, Result};

// From<T> impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;

// PartialEq, Ord, Hash
mod impl_cmp;

// Display, Debug
mod impl_fmt;

// Implementations of num_traits
mod impl_num;

mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;

mod arithmetic;
mod parsing;
pub mod rounding;
pub use rounding::RoundingMode;

mod allocation;
pub mod calculator;


/// An exact decimal number
///
/// The value is `int_val × 10^-scale`. The scale is the number of
/// fractional digits carried by the value, so `"1.50"` has scale 2
/// and compares equal to (but is not represented identically to) `"1.5"`.
///
#[derive(Clone)]
pub struct Decimal {
    int_val: BigInt,
    // number of digits after the decimal point
    scale: u64,
}

impl Decimal {
    /// Creates and initializes a `Decimal`.
    ///
    /// ```
    /// # use decimath::{Decimal, num_bigint::BigInt};
    /// let n = Decimal::new(BigInt::from(-1250), 2);
    /// assert_eq!(n.to_string(), "-12.50");
    /// ```
    #[inline]
    pub fn new(digits: BigInt, scale: u64) -> Decimal {
        Decimal {
            int_val: digits,
            scale: scale,
        }
    }

    /// Number of digits after the decimal point
    #[inline]
    pub fn scale(&self) -> u64 {
        self.scale
    }

    /// Return the sign of the `Decimal` as `num_bigint::Sign`.
    ///
    /// ```
    /// # use decimath::{Decimal, num_bigint::Sign};
    ///
    /// fn sign_of(src: &str) -> Sign {
    ///    let n: Decimal = src.parse().unwrap();
    ///    n.sign()
    /// }
    ///
    /// assert_eq!(sign_of("-1"), Sign::Minus);
    /// assert_eq!(sign_of("-0.00"), Sign::NoSign);
    /// assert_eq!(sign_of("1"),  Sign::Plus);
    /// ```
    #[inline]
    pub fn sign(&self) -> Sign {
        self.int_val.sign()
    }

    /// Return the internal big integer value and the scale
    ///
    /// ```
    /// use decimath::{Decimal, num_bigint::BigInt};
    ///
    /// let n: Decimal = "1.23456".parse().unwrap();
    /// assert_eq!(n.as_bigint_and_scale(), (BigInt::from(123456), 5));
    /// ```
    #[inline]
    pub fn as_bigint_and_scale(&self) -> (BigInt, u64) {
        (self.int_val.clone(), self.scale)
    }

    /// Convert into the internal big integer value and the scale
    #[inline]
    pub fn into_bigint_and_scale(self) -> (BigInt, u64) {
        (self.int_val, self.scale)
    }

    /// True if the number is less than zero
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.int_val.sign() == Sign::Minus
    }

    /// True if the number is greater than zero
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.int_val.sign() == Sign::Plus
    }

    /// True if there are no non-zero digits after the decimal point
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let n: Decimal = "12.000".parse().unwrap();
    /// assert!(n.is_integer());
    /// let n: Decimal = "12.001".parse().unwrap();
    /// assert!(!n.is_integer());
    /// ```
    pub fn is_integer(&self) -> bool {
        if self.scale == 0 || self.int_val.is_zero() {
            return true;
        }
        let ten_to_scale = arithmetic::ten_to_the_uint(self.scale);
        self.int_val.magnitude().is_multiple_of(&ten_to_scale)
    }

    /// True if the fractional part is exactly one half
    ///
    /// ```
    /// # use decimath::Decimal;
    /// assert!("-2.50".parse::<Decimal>().unwrap().is_half());
    /// assert!(!"2.51".parse::<Decimal>().unwrap().is_half());
    /// ```
    pub fn is_half(&self) -> bool {
        if self.scale == 0 {
            return false;
        }
        let ten_to_scale = arithmetic::ten_to_the_uint(self.scale);
        let fraction = self.int_val.magnitude() % &ten_to_scale;
        fraction * 2u8 == ten_to_scale
    }

    /// Compute the absolute value of number
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let n: Decimal = "-123.450".parse().unwrap();
    /// assert_eq!(n.abs().to_string(), "123.450");
    /// ```
    #[inline]
    pub fn abs(&self) -> Decimal {
        Decimal {
            int_val: self.int_val.abs(),
            scale: self.scale,
        }
    }

    /// Return a new Decimal object equivalent to self, with internal
    /// scaling set to the number specified.
    /// If the new_scale is lower than the current value, digits will be
    /// dropped (truncating towards zero)
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let n: Decimal = "-129.41675".parse().unwrap();
    /// assert_eq!(n.with_scale(2).to_string(), "-129.41");
    /// assert_eq!(n.with_scale(7).to_string(), "-129.4167500");
    /// ```
    #[inline]
    pub fn with_scale(&self, new_scale: u64) -> Decimal {
        if self.int_val.is_zero() {
            return Decimal::new(BigInt::zero(), new_scale);
        }

        match new_scale.cmp(&self.scale) {
            Ordering::Greater => {
                let int_val = arithmetic::rescale(&self.int_val, self.scale, new_scale);
                Decimal::new(int_val, new_scale)
            }
            Ordering::Less => {
                let scale_diff = self.scale - new_scale;
                let int_val = &self.int_val / arithmetic::ten_to_the(scale_diff);
                Decimal::new(int_val, new_scale)
            }
            Ordering::Equal => self.clone(),
        }
    }

    /// Return a new Decimal after shortening the digits and rounding
    ///
    /// Pads with zeros if the new scale is larger than the current one.
    ///
    /// ```
    /// # use decimath::*;
    ///
    /// let n: Decimal = "129.41675".parse().unwrap();
    ///
    /// assert_eq!(n.with_scale_round(2, RoundingMode::Up).to_string(), "129.42");
    /// assert_eq!(n.with_scale_round(4, RoundingMode::HalfEven).to_string(), "129.4168");
    /// assert_eq!(n.with_scale_round(6, RoundingMode::Down).to_string(), "129.416750");
    /// ```
    pub fn with_scale_round(&self, new_scale: u64, mode: RoundingMode) -> Decimal {
        if new_scale >= self.scale {
            return self.with_scale(new_scale);
        }
        arithmetic::rounding::round_to_scale(self, new_scale, mode)
    }

    /// Round to at most `precision` fractional digits
    ///
    /// Unlike [`with_scale_round`](Decimal::with_scale_round), values that
    /// already fit in `precision` digits are returned unchanged.
    /// [`calculator::round`](crate::calculator::round) pads instead.
    ///
    /// ```
    /// # use decimath::*;
    /// let n: Decimal = "-2.5".parse().unwrap();
    /// assert_eq!(n.round(0, RoundingMode::HalfUp).to_string(), "-3");
    /// assert_eq!(n.round(3, RoundingMode::HalfUp).to_string(), "-2.5");
    /// ```
    pub fn round(&self, precision: u64, mode: RoundingMode) -> Decimal {
        if precision >= self.scale {
            return self.clone();
        }
        arithmetic::rounding::round_to_scale(self, precision, mode)
    }

    /// Greatest integer less than or equal to self
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let n: Decimal = "-1.5".parse().unwrap();
    /// assert_eq!(n.floor().to_string(), "-2");
    /// ```
    #[inline]
    pub fn floor(&self) -> Decimal {
        self.with_scale_round(0, RoundingMode::Floor)
    }

    /// Least integer greater than or equal to self
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let n: Decimal = "-1.5".parse().unwrap();
    /// assert_eq!(n.ceil().to_string(), "-1");
    /// ```
    #[inline]
    pub fn ceil(&self) -> Decimal {
        self.with_scale_round(0, RoundingMode::Ceiling)
    }

    /// Integer part of self, dropping the fraction
    #[inline]
    pub fn truncate(&self) -> Decimal {
        self.with_scale(0)
    }

    /// Divide, keeping `scale` fractional digits of the quotient
    ///
    /// Extra digits are truncated, not rounded. The quotient is computed
    /// with all `scale` digits, so `scale` is not capped here the way
    /// [`calculator::divide`](crate::calculator::divide) caps it.
    ///
    /// ```
    /// # use decimath::*;
    /// let ten = Decimal::from(10);
    /// let three = Decimal::from(3);
    /// assert_eq!(ten.div_to_scale(&three, 4).unwrap().to_string(), "3.3333");
    /// assert_eq!(ten.div_to_scale(&Decimal::zero(), 4), Err(Error::DivisionByZero));
    /// ```
    pub fn div_to_scale(&self, divisor: &Decimal, scale: u64) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(arithmetic::division::divide_to_scale(self, divisor, scale))
    }

    /// Remainder of floor division, `self - divisor * floor(self / divisor)`
    ///
    /// The result takes the sign of the divisor.
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let n: Decimal = "-7.5".parse().unwrap();
    /// let d: Decimal = "2".parse().unwrap();
    /// assert_eq!(n.mod_floor(&d).unwrap().to_string(), "0.5");
    /// ```
    pub fn mod_floor(&self, divisor: &Decimal) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(arithmetic::modulo::mod_floor(self, divisor))
    }

    /// Proportional part of self: `self * ratio / total`, floored to `scale` digits
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let amount = Decimal::from(100);
    /// let third = amount.share(&1.into(), &3.into(), 0).unwrap();
    /// assert_eq!(third.to_string(), "33");
    /// ```
    pub fn share(&self, ratio: &Decimal, total: &Decimal, scale: u64) -> Result<Decimal> {
        if total.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let product = self * ratio;
        Ok(arithmetic::division::divide_floor_to_scale(&product, total, scale))
    }

    /// Same value, with trailing fractional zeros removed
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let n: Decimal = "-12.3400".parse().unwrap();
    /// assert_eq!(n.normalized().to_string(), "-12.34");
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Decimal {
        if self.int_val.is_zero() {
            return Decimal::zero();
        }
        let mut int_val = self.int_val.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (q, r) = int_val.div_rem(&BigInt::from(10u8));
            if !r.is_zero() {
                break;
            }
            int_val = q;
            scale -= 1;
        }
        Decimal::new(int_val, scale)
    }

    /// Render as a canonical decimal string
    ///
    /// No exponent, no sign on zero, and every digit of the scale.
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let n: Decimal = "-0.00".parse().unwrap();
    /// assert_eq!(n.to_canonical_string(), "0.00");
    /// ```
    #[inline]
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Decimal {
        Zero::zero()
    }
}



#[cfg(test)]
#[allow(non_snake_case)]
mod test_with_scale_round {
    use super::*;
    use paste::paste;

    include!("lib.tests.with_scale_round.rs");
}
