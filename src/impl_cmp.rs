//! Implementation of comparison operations
//!
//! Decimals compare by numeric value: the scale is only a detail
//! of representation, so `1.0 == 1.00` and both hash identically.
//!

use crate::*;


impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, rhs: &Decimal) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    /// Complete ordering implementation for Decimal
    ///
    /// # Example
    ///
    /// ```
    /// use std::str::FromStr;
    ///
    /// let a = decimath::Decimal::from_str("-1").unwrap();
    /// let b = decimath::Decimal::from_str("1").unwrap();
    /// assert!(a < b);
    /// assert!(b > a);
    /// let c = decimath::Decimal::from_str("1.000").unwrap();
    /// assert!(b >= c);
    /// assert!(c >= b);
    /// let d = decimath::Decimal::from_str("10.0").unwrap();
    /// assert!(d > c);
    /// let e = decimath::Decimal::from_str("0.5").unwrap();
    /// assert!(e < c);
    /// ```
    fn cmp(&self, other: &Decimal) -> Ordering {
        // Sign orders as Minus < NoSign < Plus
        let scmp = self.sign().cmp(&other.sign());
        if scmp != Ordering::Equal {
            return scmp;
        }

        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.int_val.cmp(&other.int_val),
            Ordering::Less => {
                let lhs = arithmetic::rescale(&self.int_val, self.scale, other.scale);
                lhs.cmp(&other.int_val)
            }
            Ordering::Greater => {
                let rhs = arithmetic::rescale(&other.int_val, other.scale, self.scale);
                self.int_val.cmp(&rhs)
            }
        }
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.int_val.hash(state);
        normalized.scale.hash(state);
    }
}
