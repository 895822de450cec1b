use crate::*;
use super::rescale;


/// optimized calculation of n % 10
pub(crate) fn mod_ten_uint(n: &BigUint) -> u8 {
    mod_ten_2p64_le(n.iter_u64_digits())
}

/// optimized calculation of n % 10
pub(crate) fn mod_ten_2p64_le(mut digits: impl Iterator<Item = u64>) -> u8 {
    let d0 = digits.next().unwrap_or(0) % 10;
    let mut acc: u64 = digits.map(|d| d % 10).sum();
    acc *= 6;
    acc += d0;
    (acc % 10) as u8
}

/// Integer values of a and b brought to their common (larger) scale
fn aligned_ints(a: &Decimal, b: &Decimal) -> (BigInt, BigInt, u64) {
    let scale = stdlib::cmp::max(a.scale, b.scale);
    (rescale(&a.int_val, a.scale, scale), rescale(&b.int_val, b.scale, scale), scale)
}

/// Remainder of floor division, taking the sign of the divisor
pub(crate) fn mod_floor(a: &Decimal, b: &Decimal) -> Decimal {
    debug_assert!(!b.is_zero());
    let (num, den, scale) = aligned_ints(a, b);
    Decimal::new(num.mod_floor(&den), scale)
}

/// Remainder of truncated division, taking the sign of the dividend
pub(crate) fn rem_trunc(a: &Decimal, b: &Decimal) -> Decimal {
    let (num, den, scale) = aligned_ints(a, b);
    Decimal::new(num % den, scale)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mod_ten_matches_modulo_operator() {
        let mut n = BigUint::from(7u8);
        for _ in 0..80 {
            let expected = (&n % 10u8).to_u8().unwrap();
            assert_eq!(mod_ten_uint(&n), expected, "{}", n);
            n = n * 13u8 + 5u8;
        }
    }

    macro_rules! impl_case {
        ( $name:ident: $a:literal % $b:literal => floor=$floor:literal, trunc=$trunc:literal ) => {
            #[test]
            fn $name() {
                let a: Decimal = $a.parse().unwrap();
                let b: Decimal = $b.parse().unwrap();
                assert_eq!(mod_floor(&a, &b).to_string(), $floor);
                assert_eq!(rem_trunc(&a, &b).to_string(), $trunc);
            }
        };
    }

    impl_case!(case_7_3: "7" % "3" => floor="1", trunc="1");
    impl_case!(case_n7_3: "-7" % "3" => floor="2", trunc="-1");
    impl_case!(case_7_n3: "7" % "-3" => floor="-2", trunc="1");
    impl_case!(case_n7_n3: "-7" % "-3" => floor="-1", trunc="-1");
    impl_case!(case_5d5_2: "5.5" % "2" => floor="1.5", trunc="1.5");
    impl_case!(case_n7d5_2: "-7.5" % "2" => floor="0.5", trunc="-1.5");
    impl_case!(case_10_0d25: "10" % "0.25" => floor="0.00", trunc="0.00");
    impl_case!(case_1_0d3: "1" % "0.3" => floor="0.1", trunc="0.1");
    impl_case!(case_n1_0d3: "-1" % "0.3" => floor="0.2", trunc="-0.1");
    impl_case!(case_0d05_1: "0.05" % "1" => floor="0.05", trunc="0.05");
}
