use crate::*;

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    #[inline]
    fn from_str(s: &str) -> Result<Decimal, ParseDecimalError> {
        // implemented in parsing.rs
        parsing::parse_decimal(s)
    }
}




#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            #[should_panic(expected = $exp)]
            fn $name() {
                Decimal::from_str($input).unwrap();
            }
        };
    }

    impl_case!(case_bad_string_empty : "" => "Empty");
    impl_case!(case_bad_string_only_decimal_point : "." => "InvalidDigit");
    impl_case!(case_bad_string_trailing_decimal_point : "10." => "MissingFraction");
    impl_case!(case_bad_string_hello : "hello" => "InvalidDigit");
    impl_case!(case_bad_string_scientific : "1.23E+3" => "InvalidDigit");
    impl_case!(case_bad_string_multiple_decimal_points : "123.12.45" => "InvalidDigit");
    impl_case!(case_bad_string_hex : "0xCafeBeef" => "InvalidDigit");
    impl_case!(case_bad_string_trailing_minus : "12-" => "InvalidDigit");
}
