// tests for the string calculator, included by calculator.rs

macro_rules! impl_binary_case {
    ($op:ident, $name:ident: $a:literal, $b:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< $op _ $name >]() {
                assert_eq!($op($a, $b).unwrap(), $expected);
            }
        }
    };
}

macro_rules! impl_unary_case {
    ($op:ident, $name:ident: $a:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< $op _ $name >]() {
                assert_eq!($op($a).unwrap(), $expected);
            }
        }
    };
}

mod add {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!(add($a, $b).unwrap(), $expected);
                assert_eq!(add($b, $a).unwrap(), $expected);
            }
        };
    }

    impl_case!(case_0d1_0d2: "0.1" + "0.2" => "0.3");
    impl_case!(case_1_n1: "1" + "-1" => "0");
    impl_case!(case_1d50_n1d5: "1.50" + "-1.5" => "0.00");
    impl_case!(case_99d99_0d01: "99.99" + "0.01" => "100.00");
    impl_case!(case_n5_2d125: "-5" + "2.125" => "-2.875");
    impl_case!(case_long: "99999999999999999999999999999.9" + "0.1" => "100000000000000000000000000000.0");
}

mod subtract {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal - $b:literal => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!(subtract($a, $b).unwrap(), $expected);
            }
        };
    }

    impl_case!(case_5_7d25: "5" - "7.25" => "-2.25");
    impl_case!(case_0d3_0d1: "0.3" - "0.1" => "0.2");
    impl_case!(case_n1_n1: "-1" - "-1" => "0");
    impl_case!(case_100_0d001: "100" - "0.001" => "99.999");
}

mod multiply {
    use super::*;

    impl_binary_case!(multiply, case_1d50_3: "1.50", "3" => "4.50");
    impl_binary_case!(multiply, case_0d1_0d1: "0.1", "0.1" => "0.01");
    impl_binary_case!(multiply, case_n2d5_4: "-2.5", "4" => "-10.0");
    impl_binary_case!(multiply, case_n2d5_n0d4: "-2.5", "-0.4" => "1.00");
    impl_binary_case!(multiply, case_0_n3d75: "0", "-3.75" => "0.00");
    impl_binary_case!(multiply, case_12345d6789_1: "12345.6789", "1" => "12345.6789");
}

mod divide {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal / $b:literal @ $p:literal => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!(divide($a, $b, $p).unwrap(), $expected);
            }
        };
    }

    impl_case!(case_10_3_p4: "10" / "3" @ 4 => "3.3333");
    impl_case!(case_n10_3_p4: "-10" / "3" @ 4 => "-3.3333");
    impl_case!(case_2_3_p2: "2" / "3" @ 2 => "0.66");
    impl_case!(case_1_4_p4: "1" / "4" @ 4 => "0.2500");
    impl_case!(case_7_2_p0: "7" / "2" @ 0 => "3");
    impl_case!(case_n7_2_p0: "-7" / "2" @ 0 => "-3");
    impl_case!(case_1d5_0d5_p1: "1.5" / "0.5" @ 1 => "3.0");
    impl_case!(case_0d001_3_p2: "0.001" / "3" @ 2 => "0.00");
    impl_case!(case_n0d001_3_p2: "-0.001" / "3" @ 2 => "0.00");
    impl_case!(case_22_7_p10: "22" / "7" @ 10 => "3.1428571428");

    #[test]
    fn by_zero() {
        assert_eq!(divide("10", "0", 2), Err(Error::DivisionByZero));
        assert_eq!(divide("10", "0.000", 2), Err(Error::DivisionByZero));
    }

    #[test]
    fn negative_precision() {
        assert_eq!(divide("10", "3", -1), Err(Error::InvalidPrecision(-1)));
    }

    #[test]
    fn precision_above_limit() {
        assert_eq!(divide("1", "3", i64::MAX), Err(Error::InvalidPrecision(i64::MAX)));
        let p = MAX_PRECISION + 1;
        assert_eq!(divide("1", "3", p), Err(Error::InvalidPrecision(p)));
    }

    #[test]
    fn precision_at_limit() {
        let q = divide("1", "3", MAX_PRECISION).unwrap();
        assert_eq!(q.len(), 2 + MAX_PRECISION as usize);
        assert!(q.starts_with("0.333"));
        assert!(q.ends_with('3'));
    }

    #[test]
    fn operands_checked_before_precision() {
        let err = divide("ten", "3", -1).unwrap_err();
        assert!(matches!(err, Error::InvalidNumberFormat { .. }));
    }
}

mod modulo {
    use super::*;

    impl_binary_case!(modulo, case_7_3: "7", "3" => "1");
    impl_binary_case!(modulo, case_n7_3: "-7", "3" => "2");
    impl_binary_case!(modulo, case_7_n3: "7", "-3" => "-2");
    impl_binary_case!(modulo, case_n7_n3: "-7", "-3" => "-1");
    impl_binary_case!(modulo, case_10d5_3: "10.5", "3" => "1.5");
    impl_binary_case!(modulo, case_n7d5_2: "-7.5", "2" => "0.5");
    impl_binary_case!(modulo, case_6_1d5: "6", "1.5" => "0.0");

    #[test]
    fn by_zero() {
        assert_eq!(modulo("1", "0"), Err(Error::DivisionByZero));
    }
}

mod round {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal @ $p:literal => $expected:literal) => {
            impl_case!($name: $n @ $p, HalfUp => $expected);
        };
        ($name:ident: $n:literal @ $p:literal, $mode:ident => $expected:literal) => {
            #[test]
            fn $name() {
                let result = round($n, $p, RoundingMode::$mode).unwrap();
                assert_eq!(result, $expected);
                // rounding again changes nothing
                assert_eq!(round(&result, $p, RoundingMode::$mode).unwrap(), $expected);
            }
        };
    }

    impl_case!(case_2d5_p0: "2.5" @ 0 => "3");
    impl_case!(case_n2d5_p0: "-2.5" @ 0 => "-3");
    impl_case!(case_1d125_p2: "1.125" @ 2 => "1.13");
    impl_case!(case_n1d125_p2: "-1.125" @ 2 => "-1.13");
    impl_case!(case_1d124_p2: "1.124" @ 2 => "1.12");
    impl_case!(case_9d995_p2: "9.995" @ 2 => "10.00");
    impl_case!(case_0d4_p0: "0.4" @ 0 => "0");
    impl_case!(case_n0d4_p0: "-0.4" @ 0 => "0");
    impl_case!(case_1d5_p3: "1.5" @ 3 => "1.500");
    impl_case!(case_1d25_p4: "1.25" @ 4 => "1.2500");
    impl_case!(case_1d2_p3: "1.2" @ 3 => "1.200");
    impl_case!(case_2d5_p4: "2.5" @ 4 => "2.5000");
    impl_case!(case_7d00_p2: "7.00" @ 2 => "7");
    impl_case!(case_n3_p2: "-3" @ 2 => "-3");
    impl_case!(case_2d5_p0_even: "2.5" @ 0, HalfEven => "2");
    impl_case!(case_3d5_p0_even: "3.5" @ 0, HalfEven => "4");
    impl_case!(case_2d5_p0_halfdown: "2.5" @ 0, HalfDown => "2");
    impl_case!(case_2d51_p0_halfdown: "2.51" @ 0, HalfDown => "3");
    impl_case!(case_n1d21_p1_floor: "-1.21" @ 1, Floor => "-1.3");
    impl_case!(case_n1d29_p1_ceiling: "-1.29" @ 1, Ceiling => "-1.2");
    impl_case!(case_1d01_p0_up: "1.01" @ 0, Up => "2");
    impl_case!(case_1d99_p0_down: "1.99" @ 0, Down => "1");

    #[test]
    fn default_mode() {
        assert_eq!(round("0.125", 2, Default::default()).unwrap(), "0.13");
    }

    #[test]
    fn negative_precision() {
        assert_eq!(round("1.5", -3, RoundingMode::HalfUp), Err(Error::InvalidPrecision(-3)));
    }

    #[test]
    fn precision_above_limit() {
        let p = MAX_PRECISION + 1;
        assert_eq!(round("1.5", p, RoundingMode::HalfUp), Err(Error::InvalidPrecision(p)));
    }
}

mod floor_ceil_abs {
    use super::*;

    impl_unary_case!(floor, case_n1d5: "-1.5" => "-2");
    impl_unary_case!(floor, case_1d5: "1.5" => "1");
    impl_unary_case!(floor, case_n3: "-3" => "-3");
    impl_unary_case!(floor, case_2d000: "2.000" => "2");
    impl_unary_case!(floor, case_n0d001: "-0.001" => "-1");
    impl_unary_case!(ceil, case_n1d5: "-1.5" => "-1");
    impl_unary_case!(ceil, case_1d5: "1.5" => "2");
    impl_unary_case!(ceil, case_0d001: "0.001" => "1");
    impl_unary_case!(ceil, case_n0d999: "-0.999" => "0");
    impl_unary_case!(absolute, case_n123d450: "-123.450" => "123.450");
    impl_unary_case!(absolute, case_7: "7" => "7");
    impl_unary_case!(absolute, case_n0d0: "-0.0" => "0.0");
}

mod comparison {
    use super::*;

    #[test]
    fn compare_by_value() {
        assert_eq!(compare("1.0", "1.00").unwrap(), 0);
        assert_eq!(compare("-1", "1").unwrap(), -1);
        assert_eq!(compare("1", "-1").unwrap(), 1);
        assert_eq!(compare("0.1", "0.09999").unwrap(), 1);
        assert_eq!(compare("-0", "0").unwrap(), 0);
    }

    #[test]
    fn derived_relations() {
        assert!(greater_than("2", "1.99").unwrap());
        assert!(!greater_than("2", "2.0").unwrap());
        assert!(greater_than_or_equal("2", "2.0").unwrap());
        assert!(less_than("-3", "-2.5").unwrap());
        assert!(!less_than("1", "1").unwrap());
        assert!(less_than_or_equal("1", "1.000").unwrap());
        assert!(!less_than_or_equal("1.001", "1").unwrap());
    }

    #[test]
    fn sign_predicates() {
        assert!(is_negative("-0.01").unwrap());
        assert!(!is_negative("0").unwrap());
        assert!(!is_negative("-0.00").unwrap());

        assert!(is_negative_or_zero("0").unwrap());
        assert!(is_negative_or_zero("-5").unwrap());
        assert!(!is_negative_or_zero("0.01").unwrap());

        assert!(is_positive("3").unwrap());
        assert!(is_positive("0").unwrap());
        assert!(!is_positive("-3").unwrap());
    }

    #[test]
    fn malformed_operand() {
        let err = compare("1", "1,5").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidNumberFormat {
                input: "1,5".into(),
                source: ParseDecimalError::InvalidDigit { position: 1 },
            }
        );
    }
}

mod share {
    use super::*;

    #[test]
    fn thirds_leave_residual() {
        let a = share("100", "1", "3").unwrap();
        let b = share("100", "2", "3").unwrap();
        assert_eq!(a, "33");
        assert_eq!(b, "66");
        assert_eq!(add(&a, &b).unwrap(), "99");
    }

    #[test]
    fn floors_negative_amounts() {
        assert_eq!(share("-100", "1", "3").unwrap(), "-34");
    }

    #[test]
    fn fractional_inputs() {
        assert_eq!(share("10.50", "0.5", "1").unwrap(), "5");
        assert_eq!(share("250", "1", "2").unwrap(), "125");
    }

    #[test]
    fn zero_total() {
        assert_eq!(share("100", "1", "0"), Err(Error::DivisionByZero));
    }
}

mod sum {
    use super::*;

    #[test]
    fn empty() {
        let none: [&str; 0] = [];
        assert_eq!(sum(none).unwrap(), "0");
    }

    #[test]
    fn mixed_scales() {
        assert_eq!(sum(["0.1", "0.2", "0.30"]).unwrap(), "0.60");
        assert_eq!(sum(vec![String::from("-1"), String::from("1")]).unwrap(), "0");
    }

    #[test]
    fn consumes_iterator() {
        let values = (1..=100).map(|n| n.to_string());
        assert_eq!(sum(values).unwrap(), "5050");
    }

    #[test]
    fn stops_at_first_bad_value() {
        let err = sum(["1", "", "x"]).unwrap_err();
        assert_eq!(err, Error::invalid_number("", ParseDecimalError::Empty));
    }
}

mod allocate {
    use super::*;

    #[test]
    fn parts_add_up() {
        let parts = allocate("100", &["1", "2"]).unwrap();
        assert_eq!(parts, ["33", "67"]);
        assert_eq!(sum(&parts).unwrap(), "100");
    }

    #[test]
    fn keeps_amount_scale() {
        let parts = allocate("0.10", &["1", "1", "1"]).unwrap();
        assert_eq!(parts, ["0.04", "0.03", "0.03"]);
    }

    #[test]
    fn owned_ratios() {
        let ratios = vec![String::from("0.25"), String::from("0.75")];
        assert_eq!(allocate("9", &ratios).unwrap(), ["2", "7"]);
    }

    #[test]
    fn errors() {
        let none: [&str; 0] = [];
        assert_eq!(allocate("1", &none), Err(Error::EmptyAllocation));
        assert_eq!(allocate("1", &["1", "-1"]), Err(Error::InvalidRatio("-1".into())));
        assert_eq!(allocate("1", &["0", "0"]), Err(Error::DivisionByZero));
        assert!(matches!(
            allocate("1", &["1", "one"]),
            Err(Error::InvalidNumberFormat { .. })
        ));
    }

    #[test]
    fn to_equal_parts() {
        assert_eq!(allocate_to("100", 3).unwrap(), ["34", "33", "33"]);
        assert_eq!(allocate_to("-0.05", 2).unwrap(), ["-0.02", "-0.03"]);
        assert_eq!(allocate_to("5", 0), Err(Error::EmptyAllocation));
    }
}

mod invalid_input {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $err:expr) => {
            #[test]
            fn $name() {
                assert_eq!(absolute($input), Err(Error::invalid_number($input, $err)));
            }
        };
    }

    impl_case!(empty: "" => ParseDecimalError::Empty);
    impl_case!(plus_sign: "+1" => ParseDecimalError::InvalidDigit { position: 0 });
    impl_case!(leading_point: ".5" => ParseDecimalError::InvalidDigit { position: 0 });
    impl_case!(trailing_point: "5." => ParseDecimalError::MissingFraction);
    impl_case!(exponent: "1e5" => ParseDecimalError::InvalidDigit { position: 1 });
    impl_case!(whitespace: " 1" => ParseDecimalError::InvalidDigit { position: 0 });
}
