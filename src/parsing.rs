//! Routines for parsing strings into Decimals

use crate::*;


/// Parse a plain decimal literal `-?\d+(\.\d+)?`
///
/// No exponent, whitespace, leading `+`, or digit separators are
/// accepted. Every digit is kept: the scale of the result is the
/// number of digits after the decimal point.
///
pub(crate) fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let bytes = s.as_bytes();

    let (sign, offset) = match bytes.first() {
        None => return Err(ParseDecimalError::Empty),
        Some(b'-') => (Sign::Minus, 1),
        Some(_) => (Sign::Plus, 0),
    };

    let body = &bytes[offset..];
    if body.is_empty() {
        return Err(ParseDecimalError::Empty);
    }

    let (int_part, frac_part) = match body.iter().position(|&b| b == b'.') {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    if int_part.is_empty() {
        return Err(ParseDecimalError::InvalidDigit { position: offset });
    }
    check_digits(int_part, offset)?;

    let scale = match frac_part {
        None => 0,
        Some([]) => return Err(ParseDecimalError::MissingFraction),
        Some(frac) => {
            check_digits(frac, offset + int_part.len() + 1)?;
            frac.len()
        }
    };

    let digits: Vec<u8> = body
        .iter()
        .filter(|&&b| b != b'.')
        .map(|&b| b - b'0')
        .collect();

    let magnitude = BigUint::from_radix_be(&digits, 10)
        .ok_or(ParseDecimalError::InvalidDigit { position: offset })?;

    Ok(Decimal {
        int_val: BigInt::from_biguint(sign, magnitude),
        scale: scale as u64,
    })
}

/// Ensure every byte is an ascii digit, reporting the position of the first that is not
fn check_digits(digits: &[u8], offset: usize) -> Result<(), ParseDecimalError> {
    match digits.iter().position(|b| !b.is_ascii_digit()) {
        Some(idx) => Err(ParseDecimalError::InvalidDigit { position: offset + idx }),
        None => Ok(()),
    }
}
