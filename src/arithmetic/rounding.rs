//! Rounding a Decimal to fewer fractional digits

use crate::*;
use super::modulo::mod_ten_uint;
use super::ten_to_the_uint;


/// Drop digits beyond `new_scale`, letting `mode` choose the last kept digit
///
/// The unscaled magnitude is split at the rounding point into the kept
/// high part and the dropped low part. The last kept digit, the first
/// dropped digit, and whether every later dropped digit is zero are all
/// [`RoundingMode::round_pair`] needs; a rounded digit of 10 carries
/// into the rest of the kept part through ordinary big-integer addition.
///
pub(crate) fn round_to_scale(n: &Decimal, new_scale: u64, mode: RoundingMode) -> Decimal {
    debug_assert!(new_scale < n.scale);

    if n.int_val.is_zero() {
        return Decimal::new(BigInt::zero(), new_scale);
    }

    let sign = n.int_val.sign();
    let scale_diff = n.scale - new_scale;

    let (kept, dropped) = n.int_val.magnitude().div_rem(&ten_to_the_uint(scale_diff));
    let (first_dropped, rest) = dropped.div_rem(&ten_to_the_uint(scale_diff - 1));

    let low_digit = mod_ten_uint(&first_dropped);
    let high_digit = mod_ten_uint(&kept);
    let trailing_zeros = rest.is_zero();

    let rounded_digit = mode.round_pair(sign, (high_digit, low_digit), trailing_zeros);
    debug_assert!(rounded_digit <= 10);

    let rounded = kept - high_digit + rounded_digit;

    Decimal::new(BigInt::from_biguint(sign, rounded), new_scale)
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $input:literal @ $scale:literal => $($mode:ident = $expected:literal),+ ) => {
            paste! {
                $(
                    #[test]
                    fn [< $name _ $mode:snake >]() {
                        let n: Decimal = $input.parse().unwrap();
                        let rounded = round_to_scale(&n, $scale, RoundingMode::$mode);
                        assert_eq!(rounded.to_string(), $expected);
                        assert_eq!(rounded.scale, $scale);
                    }
                )*
            }
        };
    }

    impl_case!(case_2d5 : "2.5" @ 0 => HalfUp = "3", HalfDown = "2", HalfEven = "2", Up = "3", Down = "2", Ceiling = "3", Floor = "2");
    impl_case!(case_n2d5 : "-2.5" @ 0 => HalfUp = "-3", HalfDown = "-2", HalfEven = "-2", Up = "-3", Down = "-2", Ceiling = "-2", Floor = "-3");
    impl_case!(case_1d125 : "1.125" @ 2 => HalfUp = "1.13", HalfDown = "1.12", HalfEven = "1.12");
    impl_case!(case_n1d125 : "-1.125" @ 2 => HalfUp = "-1.13", HalfDown = "-1.12", HalfEven = "-1.12");
    impl_case!(case_1d12501 : "1.12501" @ 2 => HalfUp = "1.13", HalfDown = "1.13", HalfEven = "1.13", Down = "1.12");
    impl_case!(case_9d995 : "9.995" @ 2 => HalfUp = "10.00", Down = "9.99");
    impl_case!(case_n9d999 : "-9.999" @ 0 => HalfUp = "-10", Ceiling = "-9", Floor = "-10");
    impl_case!(case_0d004 : "0.004" @ 2 => HalfUp = "0.00", Up = "0.01", Ceiling = "0.01", Floor = "0.00");
    impl_case!(case_n0d004 : "-0.004" @ 2 => HalfUp = "0.00", Up = "-0.01", Ceiling = "0.00", Floor = "-0.01");
    impl_case!(case_0d5 : "0.5" @ 0 => HalfUp = "1", HalfEven = "0", HalfDown = "0");
    impl_case!(case_1d500 : "1.500" @ 0 => HalfUp = "2", HalfEven = "2", HalfDown = "1");
    impl_case!(case_3d000 : "3.000" @ 1 => HalfUp = "3.0", Up = "3.0", Floor = "3.0");
    impl_case!(case_n3d000 : "-3.000" @ 0 => Floor = "-3", Ceiling = "-3");
    impl_case!(case_123d456 : "123.456" @ 0 => HalfUp = "123", Ceiling = "124");
}
