// Test Decimal::with_scale_round

macro_rules! impl_test {
    ( name=$($name:expr)*; $scale:literal : $mode:ident => $ex:literal ) => {
        paste! {
            #[test]
            fn [< $($name)* _rounding_ $mode >]() {
                let decimal = test_input();
                let result = decimal.with_scale_round($scale, RoundingMode::$mode);
                let expected = Decimal::from_str($ex).unwrap();
                assert_eq!(result, expected);
                assert_eq!(result.int_val, expected.int_val);
                assert_eq!(result.scale, $scale);
            }
        }
    };
    ( $scale:literal $( : $($modes:ident),+ => $ex:literal )+ ) => {
        $( $( impl_test!(name=scale_ $scale; $scale : $modes => $ex); )* )*
    };
}


mod case_3009d788271450 {
    use super::*;

    fn test_input() -> Decimal {
        Decimal::from_str("3009.788271450").unwrap()
    }

    impl_test!(10 : Up, Down => "3009.7882714500");
    impl_test!(9 : Up, Down => "3009.788271450");
    impl_test!(8 : Up, Down, HalfEven => "3009.78827145");

    impl_test!(7 : Up, Ceiling, HalfUp => "3009.7882715"
                 : Down, Floor, HalfDown, HalfEven => "3009.7882714");

    impl_test!(4 : Up, Ceiling, HalfUp, HalfDown, HalfEven => "3009.7883"
                 : Down, Floor => "3009.7882");

    impl_test!(2 : Up => "3009.79"
                 : Down => "3009.78");

    impl_test!(1 : Up => "3009.8"
                 : Down => "3009.7");

    impl_test!(0 : Up => "3010"
                 : Down => "3009");
}

mod case_neg_636652287787259 {
    use super::*;

    fn test_input() -> Decimal {
        Decimal::from_str("-636652287787259").unwrap()
    }

    impl_test!(1 : Up, Down => "-636652287787259.0");
    impl_test!(0 : Up, Down => "-636652287787259");
}

mod case_neg_2d5 {
    use super::*;

    fn test_input() -> Decimal {
        Decimal::from_str("-2.5").unwrap()
    }

    impl_test!(0 : Up, Floor, HalfUp => "-3"
                 : Down, Ceiling, HalfDown, HalfEven => "-2");
}

mod case_neg_0d0000001 {
    use super::*;

    fn test_input() -> Decimal {
        Decimal::from_str("-0.0000001").unwrap()
    }

    impl_test!(3 : Up, Floor => "-0.001"
                 : Down, Ceiling, HalfUp, HalfDown, HalfEven => "0.000");
}

mod case_9999999999999999999d9999 {
    use super::*;

    fn test_input() -> Decimal {
        Decimal::from_str("9999999999999999999.9999").unwrap()
    }

    impl_test!(4 : Up => "9999999999999999999.9999");
    impl_test!(3 : Up => "10000000000000000000.000"
                 : Down => "9999999999999999999.999");
    impl_test!(0 : HalfUp => "10000000000000000000"
                 : Down => "9999999999999999999");
}

mod case_0d000000000000000369708962060657 {
    use super::*;

    fn test_input() -> Decimal {
        Decimal::from_str("0.000000000000000369708962060657").unwrap()
    }

    impl_test!(4 : Up => "0.0001"
                 : Down, HalfUp => "0.0000");
    impl_test!(20 : Up, HalfUp => "0.00000000000000036971"
                  : Down => "0.00000000000000036970");
}

mod case_682829560896740000000000000000000000000000000 {
    use super::*;

    fn test_input() -> Decimal {
        Decimal::from_str("682829560896740000000000000000000000000000000").unwrap()
    }

    impl_test!(4 : Up => "682829560896740000000000000000000000000000000.0000");
    impl_test!(0 : Up => "682829560896740000000000000000000000000000000");
}
