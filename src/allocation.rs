//! Splitting an amount into proportional parts without losing digits
//!
//! Every part is first floored to the scale of the amount. What is left
//! over (always fewer units than there are parts) is handed out one unit
//! at a time, largest exact loss first, so the parts add back up to the
//! amount exactly.

use crate::*;
use crate::arithmetic::rescale;


impl Decimal {
    /// Split self into parts proportional to `ratios`
    ///
    /// Parts have the same scale as self and always sum to self.
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let amount: Decimal = "0.05".parse().unwrap();
    /// let parts = amount.allocate(&[1.into(), 1.into()]).unwrap();
    /// assert_eq!(parts[0].to_string(), "0.03");
    /// assert_eq!(parts[1].to_string(), "0.02");
    /// ```
    pub fn allocate(&self, ratios: &[Decimal]) -> Result<Vec<Decimal>> {
        if ratios.is_empty() {
            return Err(Error::EmptyAllocation);
        }
        if let Some(ratio) = ratios.iter().find(|r| r.is_negative()) {
            return Err(Error::InvalidRatio(ratio.to_string()));
        }

        // bring ratios to integer weights at a common scale
        let ratio_scale = ratios.iter().map(|r| r.scale).max().unwrap_or(0);
        let weights: Vec<BigInt> = ratios
            .iter()
            .map(|r| rescale(&r.int_val, r.scale, ratio_scale))
            .collect();

        let total: BigInt = weights.iter().sum();
        if total.is_zero() {
            return Err(Error::DivisionByZero);
        }

        // parts and losses in units of 10^-scale
        let (mut parts, losses): (Vec<BigInt>, Vec<BigInt>) = weights
            .iter()
            .map(|w| (&self.int_val * w).div_mod_floor(&total))
            .unzip();

        let allocated: BigInt = parts.iter().sum();
        let mut remainder = &self.int_val - allocated;

        let mut order: Vec<usize> = (0..parts.len()).collect();
        order.sort_by(|&a, &b| losses[b].cmp(&losses[a]).then(a.cmp(&b)));

        for idx in order {
            if !remainder.is_positive() {
                break;
            }
            tracing::trace!(part = idx, "allocating remainder unit");
            parts[idx] += 1u8;
            remainder -= 1u8;
        }
        debug_assert!(remainder.is_zero());

        Ok(parts.into_iter().map(|p| Decimal::new(p, self.scale)).collect())
    }

    /// Split self into `n` equal parts, differing by at most one unit of the last digit
    ///
    /// ```
    /// # use decimath::Decimal;
    /// let amount = Decimal::from(100);
    /// let parts = amount.allocate_to(3).unwrap();
    /// assert_eq!(parts, [Decimal::from(34), Decimal::from(33), Decimal::from(33)]);
    /// ```
    pub fn allocate_to(&self, n: usize) -> Result<Vec<Decimal>> {
        if n == 0 {
            return Err(Error::EmptyAllocation);
        }
        let ratios: Vec<Decimal> = stdlib::iter::repeat(Decimal::one()).take(n).collect();
        self.allocate(&ratios)
    }
}
