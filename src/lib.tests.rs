
mod is_integer {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let d: Decimal = $input.parse().unwrap();
                assert_eq!(d.is_integer(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => true);
    impl_case!(case_0d000: "0.000" => true);
    impl_case!(case_n12: "-12" => true);
    impl_case!(case_12d000: "12.000" => true);
    impl_case!(case_12d001: "12.001" => false);
    impl_case!(case_0d5: "0.5" => false);
    impl_case!(case_long: "100000000000000000000000.00000000000000000000000" => true);
    impl_case!(case_long_frac: "100000000000000000000000.00000000000000000000001" => false);
}

mod is_half {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let d: Decimal = $input.parse().unwrap();
                assert_eq!(d.is_half(), $expected);
            }
        };
    }

    impl_case!(case_0d5: "0.5" => true);
    impl_case!(case_n2d50: "-2.50" => true);
    impl_case!(case_7d5000001: "7.5000001" => false);
    impl_case!(case_2: "2" => false);
    impl_case!(case_0d05: "0.05" => false);
}

mod sign {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $sign:ident, $neg:literal, $pos:literal) => {
            #[test]
            fn $name() {
                let d: Decimal = $input.parse().unwrap();
                assert_eq!(d.sign(), Sign::$sign);
                assert_eq!(d.is_negative(), $neg);
                assert_eq!(d.is_positive(), $pos);
            }
        };
    }

    impl_case!(case_0: "0" => NoSign, false, false);
    impl_case!(case_n0d00: "-0.00" => NoSign, false, false);
    impl_case!(case_n0d01: "-0.01" => Minus, true, false);
    impl_case!(case_3: "3" => Plus, false, true);
}

mod abs {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let d: Decimal = $input.parse().unwrap();
                let abs = d.abs();
                assert_eq!(abs.to_string(), $expected);
                assert_eq!(abs.scale, d.scale);
            }
        };
    }

    impl_case!(case_n123d450: "-123.450" => "123.450");
    impl_case!(case_123d450: "123.450" => "123.450");
    impl_case!(case_n0d0: "-0.0" => "0.0");
}

mod with_scale {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $scale:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let d: Decimal = $input.parse().unwrap();
                let result = d.with_scale($scale);
                assert_eq!(result.to_string(), $expected);
                assert_eq!(result.scale, $scale);
            }
        };
    }

    impl_case!(case_n129d41675_s2: "-129.41675", 2 => "-129.41");
    impl_case!(case_n129d41675_s7: "-129.41675", 7 => "-129.4167500");
    impl_case!(case_1d999_s0: "1.999", 0 => "1");
    impl_case!(case_n1d999_s0: "-1.999", 0 => "-1");
    impl_case!(case_0_s3: "0", 3 => "0.000");
    impl_case!(case_n0d001_s2: "-0.001", 2 => "0.00");
    impl_case!(case_12_s30: "12", 30 => "12.000000000000000000000000000000");
}

mod round {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal @ $prec:literal, $mode:ident => $expected:literal) => {
            #[test]
            fn $name() {
                let d: Decimal = $input.parse().unwrap();
                let result = d.round($prec, RoundingMode::$mode);
                assert_eq!(result.to_string(), $expected);
                assert_eq!(result.round($prec, RoundingMode::$mode).to_string(), $expected);
            }
        };
    }

    impl_case!(case_2d5_p0: "2.5" @ 0, HalfUp => "3");
    impl_case!(case_n2d5_p0: "-2.5" @ 0, HalfUp => "-3");
    impl_case!(case_1d125_p2: "1.125" @ 2, HalfUp => "1.13");
    impl_case!(case_1d135_p2_even: "1.135" @ 2, HalfEven => "1.14");
    impl_case!(case_1d125_p2_even: "1.125" @ 2, HalfEven => "1.12");
    impl_case!(case_1d1251_p2_even: "1.1251" @ 2, HalfEven => "1.13");
    impl_case!(case_0d05_p1_down: "0.05" @ 1, HalfDown => "0.0");
    impl_case!(case_n0d05_p1_up: "-0.05" @ 1, HalfUp => "-0.1");
    impl_case!(case_999d9_p0: "999.9" @ 0, HalfUp => "1000");
    impl_case!(case_1d5_p4: "1.5" @ 4, HalfUp => "1.5");
    impl_case!(case_1d50_p1: "1.50" @ 1, Up => "1.5");
    impl_case!(case_long: "123456789012345678901234567890.123456789" @ 3, HalfUp
                       => "123456789012345678901234567890.123");
}

mod floor_ceil_truncate {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $floor:literal, $ceil:literal, $trunc:literal) => {
            #[test]
            fn $name() {
                let d: Decimal = $input.parse().unwrap();
                assert_eq!(d.floor().to_string(), $floor);
                assert_eq!(d.ceil().to_string(), $ceil);
                assert_eq!(d.truncate().to_string(), $trunc);
            }
        };
    }

    impl_case!(case_n1d5: "-1.5" => "-2", "-1", "-1");
    impl_case!(case_1d5: "1.5" => "1", "2", "1");
    impl_case!(case_2d000: "2.000" => "2", "2", "2");
    impl_case!(case_n2d000: "-2.000" => "-2", "-2", "-2");
    impl_case!(case_0d001: "0.001" => "0", "1", "0");
    impl_case!(case_n0d001: "-0.001" => "-1", "0", "0");
    impl_case!(case_7: "7" => "7", "7", "7");
}

mod div_to_scale {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal / $b:literal @ $scale:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let a: Decimal = $a.parse().unwrap();
                let b: Decimal = $b.parse().unwrap();
                let q = a.div_to_scale(&b, $scale).unwrap();
                assert_eq!(q.to_string(), $expected);
                assert_eq!(q.scale, $scale);
            }
        };
    }

    impl_case!(case_10_3_s4: "10" / "3" @ 4 => "3.3333");
    impl_case!(case_n10_3_s4: "-10" / "3" @ 4 => "-3.3333");
    impl_case!(case_10_n3_s4: "10" / "-3" @ 4 => "-3.3333");
    impl_case!(case_n10_n3_s1: "-10" / "-3" @ 1 => "3.3");
    impl_case!(case_1_0d001_s0: "1" / "0.001" @ 0 => "1000");
    impl_case!(case_0d02_0d5_s3: "0.02" / "0.5" @ 3 => "0.040");
    impl_case!(case_0_7_s2: "0" / "7" @ 2 => "0.00");

    #[test]
    fn by_zero() {
        let a = Decimal::from(5);
        assert_eq!(a.div_to_scale(&Decimal::zero(), 3), Err(Error::DivisionByZero));
    }
}

mod mod_floor {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal % $b:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let a: Decimal = $a.parse().unwrap();
                let b: Decimal = $b.parse().unwrap();
                let m = a.mod_floor(&b).unwrap();
                assert_eq!(m.to_string(), $expected);
                assert_eq!(m.scale, a.scale.max(b.scale));
            }
        };
    }

    impl_case!(case_7_3: "7" % "3" => "1");
    impl_case!(case_n7_3: "-7" % "3" => "2");
    impl_case!(case_7_n3: "7" % "-3" => "-2");
    impl_case!(case_n7d5_2: "-7.5" % "2" => "0.5");
    impl_case!(case_5d25_0d5: "5.25" % "0.5" => "0.25");
    impl_case!(case_n0d01_1: "-0.01" % "1" => "0.99");
    impl_case!(case_9_3: "9" % "3" => "0");

    #[test]
    fn by_zero() {
        let a = Decimal::from(5);
        assert_eq!(a.mod_floor(&"0.0".parse().unwrap()), Err(Error::DivisionByZero));
    }
}

mod share {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $amount:literal * $ratio:literal / $total:literal @ $scale:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let amount: Decimal = $amount.parse().unwrap();
                let ratio: Decimal = $ratio.parse().unwrap();
                let total: Decimal = $total.parse().unwrap();
                let part = amount.share(&ratio, &total, $scale).unwrap();
                assert_eq!(part.to_string(), $expected);
            }
        };
    }

    impl_case!(case_100_1_3_s0: "100" * "1" / "3" @ 0 => "33");
    impl_case!(case_100_2_3_s0: "100" * "2" / "3" @ 0 => "66");
    impl_case!(case_100_2_3_s2: "100" * "2" / "3" @ 2 => "66.66");
    impl_case!(case_n100_1_3_s0: "-100" * "1" / "3" @ 0 => "-34");
    impl_case!(case_10d50_1_4_s2: "10.50" * "1" / "4" @ 2 => "2.62");

    #[test]
    fn zero_total() {
        let amount = Decimal::from(1);
        let result = amount.share(&Decimal::one(), &Decimal::zero(), 2);
        assert_eq!(result, Err(Error::DivisionByZero));
    }
}

mod normalized {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal, $scale:literal) => {
            #[test]
            fn $name() {
                let d: Decimal = $input.parse().unwrap();
                let n = d.normalized();
                assert_eq!(n.to_string(), $expected);
                assert_eq!(n.scale, $scale);
                assert_eq!(n, d);
            }
        };
    }

    impl_case!(case_n12d3400: "-12.3400" => "-12.34", 2);
    impl_case!(case_100d00: "100.00" => "100", 0);
    impl_case!(case_0d000: "0.000" => "0", 0);
    impl_case!(case_0d010: "0.010" => "0.01", 2);
}

#[test]
fn default_is_zero() {
    let d = Decimal::default();
    assert!(d.is_zero());
    assert_eq!(d.to_canonical_string(), "0");
}

#[test]
fn bigint_and_scale() {
    let d: Decimal = "-0.0042".parse().unwrap();
    assert_eq!(d.as_bigint_and_scale(), (BigInt::from(-42), 4));
    assert_eq!(d.into_bigint_and_scale(), (BigInt::from(-42), 4));
}

#[test]
fn scale_is_digits_after_point() {
    for (src, scale) in [("1", 0), ("1.0", 1), ("-0.00100", 5)] {
        let d: Decimal = src.parse().unwrap();
        assert_eq!(d.scale(), scale, "{}", src);
    }
}
