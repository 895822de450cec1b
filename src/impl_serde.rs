//!
//! Support for serde implementations
//!
//! Decimals are written as their canonical string, and read from
//! strings or integers. Floating point input is refused: by the time a
//! value is an `f64` it has already lost the exactness this crate
//! exists to keep.
//!
use crate::*;
use serde::{de, ser};

impl ser::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a Decimal
struct DecimalVisitor;

impl<'de> de::Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a decimal string or integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        parsing::parse_decimal(value)
            .map_err(|err| E::custom(Error::invalid_number(value, err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }
}

impl<'de> de::Deserialize<'de> for Decimal {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(DecimalVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error
    };

    mod serde_serialize_deserialize_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let expected = Token::Str($output);
                    let decimal: Decimal = $input.parse().unwrap();
                    assert_tokens(&decimal, &[expected]);
                }
            }
        }

        impl_case!(case_1d0: "1.0" => "1.0");
        impl_case!(case_0d5: "0.5" => "0.5");
        impl_case!(case_50: "50" => "50");
        impl_case!(case_n12d50: "-12.50" => "-12.50");
        impl_case!(case_0d001: "0.001" => "0.001");
        impl_case!(case_40d0010: "40.0010" => "40.0010");
        impl_case!(case_long: "123456789012345678901234567890.0001"
                           => "123456789012345678901234567890.0001");
    }

    #[test]
    fn negative_zero_serializes_unsigned() {
        let decimal: Decimal = "-0.00".parse().unwrap();
        serde_test::assert_ser_tokens(&decimal, &[Token::Str("0.00")]);
    }

    mod serde_deserialize_int {
        use super::*;

        macro_rules! impl_case {
            ( $( $ttype:ident ),+ : -$input:literal ) => {
                $( paste! { impl_case!([< case_n $input _ $ttype:lower >] : $ttype : -$input); } )*
            };
            ( $( $ttype:ident ),+ : $input:literal ) => {
                $( paste! { impl_case!([< case_ $input _ $ttype:lower >] : $ttype : $input); } )*
            };
            ($name:ident : $type:ident : $input:literal) => {
                #[test]
                fn $name() {
                    let expected = Decimal::from($input);
                    let token = Token::$type($input);
                    assert_de_tokens(&expected, &[token]);
                }
            };
        }

        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 0);
        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 1);
        impl_case!(I8, I16, I32, I64 : -1);
        impl_case!(I64: -99999999999i64);
        impl_case!(U64: 18446744073709551615u64);
    }

    mod serde_deserialize_rejected {
        use super::*;

        #[test]
        fn float() {
            assert_de_tokens_error::<Decimal>(
                &[Token::F64(1.5)],
                "invalid type: floating point `1.5`, expected a decimal string or integer",
            );
        }

        #[test]
        fn exponent_string() {
            assert_de_tokens_error::<Decimal>(
                &[Token::Str("1e3")],
                "invalid number format \"1e3\": invalid digit found at position 1",
            );
        }

        #[test]
        fn empty_string() {
            assert_de_tokens_error::<Decimal>(
                &[Token::Str("")],
                "invalid number format \"\": Failed to parse empty string",
            );
        }

        #[test]
        fn boolean() {
            assert_de_tokens_error::<Decimal>(
                &[Token::Bool(true)],
                "invalid type: boolean `true`, expected a decimal string or integer",
            );
        }
    }
}
