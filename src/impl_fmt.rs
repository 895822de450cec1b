//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;


impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let abs_int = self.int_val.magnitude().to_str_radix(10);
        let body = format_full_scale(abs_int, self.scale as usize);
        f.pad_integral(!self.is_negative(), "", &body)
    }
}


impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.scale < 40 {
            write!(f, "Decimal(\"{}\")", self)
        } else {
            write!(f, "Decimal(\"{:?}e-{}\")", self.int_val, self.scale)
        }
    }
}


/// Place the decimal point `scale` digits from the right of `abs_int`
///
/// Never uses exponential notation; a value with fewer digits than its
/// scale gets a `0.` prefix and zero padding.
fn format_full_scale(abs_int: String, scale: usize) -> String {
    debug_assert_ne!(abs_int.len(), 0);

    if scale == 0 {
        return abs_int;
    }

    let mut digits = abs_int.into_bytes();

    if digits.len() > scale {
        // decimal point is within the digits   (ddd.ddddddd)
        let digits_to_shift = digits.len() - scale;
        digits.push(b'.');
        digits[digits_to_shift..].rotate_right(1);
    } else {
        // decimal point is to the left of digits (0.0000dddddddd)
        let zeros_to_add = scale - digits.len();
        digits.push(b'0');
        digits.push(b'.');
        digits.extend(stdlib::iter::repeat(b'0').take(zeros_to_add));
        digits.rotate_right(zeros_to_add + 2);
    }

    // digits are all ascii
    String::from_utf8(digits).unwrap_or_default()
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $int:literal, $scale:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< display_ $name >]() {
                    let n = Decimal::new(BigInt::from($int), $scale);
                    assert_eq!(n.to_string(), $expected);
                }
            }
        };
    }

    impl_case!(zero: 0, 0 => "0");
    impl_case!(zero_scaled: 0, 3 => "0.000");
    impl_case!(one_cent: 1, 2 => "0.01");
    impl_case!(neg_one_cent: -1, 2 => "-0.01");
    impl_case!(dollars: 1999, 2 => "19.99");
    impl_case!(neg_dollars: -1999, 2 => "-19.99");
    impl_case!(tiny: 5, 8 => "0.00000005");
    impl_case!(integer: -120, 0 => "-120");
    impl_case!(exact_digits: 123, 3 => "0.123");

    #[test]
    fn display_padding() {
        let n: Decimal = "-1.5".parse().unwrap();
        assert_eq!(format!("{:>8}", n), "    -1.5");
        assert_eq!(format!("{:08}", n), "-00001.5");
    }

    #[test]
    fn debug_short() {
        let n: Decimal = "12.50".parse().unwrap();
        assert_eq!(format!("{:?}", n), "Decimal(\"12.50\")");
    }

    #[test]
    fn debug_long_scale() {
        let n = Decimal::new(BigInt::from(-7), 45);
        assert_eq!(format!("{:?}", n), "Decimal(\"-7e-45\")");
    }
}
