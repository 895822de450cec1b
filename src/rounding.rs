//! Rounding structures and subroutines

use crate::Sign;

/// Determines how to calculate the last digit of a rounded number
///
/// Default rounding mode is [`HalfUp`](RoundingMode::HalfUp): ties round
/// away from zero for positive and negative numbers alike, the
/// conventional rule for monetary amounts.
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum RoundingMode {
    /// Always round away from zero
    ///
    /// * 5.5 → 6
    /// * 1.1 → 2
    /// * -1.1 → -2
    /// * -5.5 → -6
    Up,

    /// Always round towards zero
    ///
    /// * 5.5 → 5
    /// * 1.6 → 1
    /// * -1.6 → -1
    /// * -5.5 → -5
    Down,

    /// Towards +∞
    ///
    /// * 1.1 → 2
    /// * -1.6 → -1
    /// * -2.5 → -2
    Ceiling,

    /// Towards -∞
    ///
    /// * 1.6 → 1
    /// * -1.1 → -2
    /// * -2.5 → -3
    Floor,

    /// Round to 'nearest neighbor', or away from zero if equidistant
    ///
    /// * 2.5 → 3
    /// * 1.4 → 1
    /// * -1.6 → -2
    /// * -2.5 → -3
    HalfUp,

    /// Round to 'nearest neighbor', or towards zero if equidistant
    ///
    /// * 2.5 → 2
    /// * 1.6 → 2
    /// * -1.6 → -2
    /// * -2.5 → -2
    HalfDown,

    /// Round to 'nearest neighbor', if equidistant, round towards
    /// nearest even digit ("banker's rounding")
    ///
    /// * 5.5 → 6
    /// * 2.5 → 2
    /// * -2.5 → -2
    /// * -5.5 → -6
    HalfEven,
}

impl RoundingMode {
    /// Ties round away from zero; alias of [`HalfUp`](RoundingMode::HalfUp)
    pub const HALF_AWAY_FROM_ZERO: RoundingMode = RoundingMode::HalfUp;

    /// Perform the rounding operation
    ///
    /// Parameters
    /// ----------
    /// * sign (Sign) - Sign of the number to be rounded
    /// * pair (u8, u8) - The last digit to keep and the first digit to drop.
    ///     i.e. to round 0.345 to two places, you would pass (4, 5).
    ///     Both must be less than ten.
    /// * trailing_zeros (bool) - True if all digits after the pair are zero.
    ///       This has an effect if the right hand digit is 0 or 5.
    ///
    /// Returns
    /// -------
    /// Returns the first number of the pair, rounded. The sign is not
    /// preserved, and the result may be 10 (carry into the next digit).
    ///
    /// Examples
    /// --------
    /// - To round 19.95 to one place: `Plus, (9, 5), true` → 10 under `HalfUp`
    /// - To round -0.1051 to two places: `Minus, (0, 5), false` → 1 under any half mode
    ///
    pub fn round_pair(&self, sign: Sign, pair: (u8, u8), trailing_zeros: bool) -> u8 {
        use self::RoundingMode::*;
        use core::cmp::Ordering::*;

        let (lhs, rhs) = pair;
        // if all zero after digit, never round
        if rhs == 0 && trailing_zeros {
            return lhs;
        }
        let up = lhs + 1;
        let down = lhs;
        match (*self, rhs.cmp(&5)) {
            (Up,        _) => up,
            (Down,      _) => down,
            (Floor,     _) => if sign == Sign::Minus { up } else { down },
            (Ceiling,   _) => if sign == Sign::Minus { down } else { up },
            (_,      Less) => down,
            (_,      Greater) => up,
            (_,        Equal) if !trailing_zeros => up,
            (HalfUp,   Equal) => up,
            (HalfDown, Equal) => down,
            (HalfEven, Equal) => if lhs % 2 == 0 { down } else { up },
        }
    }
}

impl Default for RoundingMode {
    #[inline]
    fn default() -> RoundingMode {
        RoundingMode::HalfUp
    }
}
