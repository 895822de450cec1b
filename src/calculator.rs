//! Decimal arithmetic on strings
//!
//! Every function here parses its operands as decimal numbers, performs
//! the operation with [`Decimal`], and hands back the canonical string
//! form of the result. Operands must look like `-?\d+(\.\d+)?`; anything
//! else is rejected with [`Error::InvalidNumberFormat`] before any
//! arithmetic happens.
//!
//! Results keep the scale dictated by the operation: sums keep the larger
//! scale of their operands, products the sum of the scales, quotients
//! exactly the requested precision.
//!
//! ```
//! use decimath::calculator;
//!
//! assert_eq!(calculator::multiply("1.50", "3").unwrap(), "4.50");
//! assert_eq!(calculator::subtract("5", "7.25").unwrap(), "-2.25");
//! assert!(calculator::less_than("0.999", "1").unwrap());
//! ```
//!
//! Precision arguments are signed so that a negative request can be
//! reported as [`Error::InvalidPrecision`] rather than wrapping. Requests
//! above [`MAX_PRECISION`] are refused the same way, since the digits of
//! the result are materialized in full.

use crate::*;

/// Largest number of fractional digits `divide` and `round` will produce
pub const MAX_PRECISION: i64 = 10_000;

fn parse_operand(input: &str) -> Result<Decimal> {
    parsing::parse_decimal(input).map_err(|err| {
        tracing::debug!(input, %err, "rejected decimal operand");
        Error::invalid_number(input, err)
    })
}

fn parse_precision(precision: i64) -> Result<u64> {
    match u64::try_from(precision) {
        Ok(p) if precision <= MAX_PRECISION => Ok(p),
        _ => {
            tracing::debug!(precision, "rejected precision");
            Err(Error::InvalidPrecision(precision))
        }
    }
}

fn log_division_by_zero(operation: &'static str) -> impl FnOnce(&Error) {
    move |err| {
        if *err == Error::DivisionByZero {
            tracing::debug!(operation, "division by zero");
        }
    }
}

/// Magnitude of `number`, keeping its scale
pub fn absolute(number: &str) -> Result<String> {
    Ok(parse_operand(number)?.abs().to_canonical_string())
}

/// Exact sum
pub fn add(a: &str, b: &str) -> Result<String> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    Ok((a + b).to_canonical_string())
}

/// Exact difference `a - b`
pub fn subtract(a: &str, b: &str) -> Result<String> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    Ok((a - b).to_canonical_string())
}

/// Exact product
pub fn multiply(a: &str, b: &str) -> Result<String> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    Ok((a * b).to_canonical_string())
}

/// Quotient `a / b` with exactly `precision` fractional digits
///
/// Digits past `precision` are truncated toward zero, not rounded.
///
/// ```
/// # use decimath::{calculator, Error};
/// assert_eq!(calculator::divide("-10", "3", 2).unwrap(), "-3.33");
/// assert_eq!(calculator::divide("1", "8", 1).unwrap(), "0.1");
/// assert_eq!(calculator::divide("10", "0", 2), Err(Error::DivisionByZero));
/// ```
pub fn divide(a: &str, b: &str, precision: i64) -> Result<String> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    let precision = parse_precision(precision)?;
    let quotient = a
        .div_to_scale(&b, precision)
        .inspect_err(log_division_by_zero("divide"))?;
    Ok(quotient.to_canonical_string())
}

/// Floor modulo: `a - b * floor(a / b)`, taking the sign of `b`
pub fn modulo(a: &str, b: &str) -> Result<String> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    let remainder = a.mod_floor(&b).inspect_err(log_division_by_zero("modulo"))?;
    Ok(remainder.to_canonical_string())
}

/// Round to `precision` fractional digits
///
/// The result carries exactly `precision` fractional digits, padding
/// with zeros where needed. Integers, and any number rounded with a
/// precision of zero, come back in integer form.
///
/// ```
/// # use decimath::{calculator, RoundingMode};
/// assert_eq!(calculator::round("2.5", 0, RoundingMode::HalfUp).unwrap(), "3");
/// assert_eq!(calculator::round("2.5", 0, RoundingMode::HalfEven).unwrap(), "2");
/// assert_eq!(calculator::round("1.2", 3, RoundingMode::HalfUp).unwrap(), "1.200");
/// assert_eq!(calculator::round("7.00", 2, RoundingMode::HalfUp).unwrap(), "7");
/// ```
pub fn round(number: &str, precision: i64, mode: RoundingMode) -> Result<String> {
    let number = parse_operand(number)?;
    let precision = parse_precision(precision)?;
    let scale = if number.is_integer() { 0 } else { precision };
    Ok(number.with_scale_round(scale, mode).to_canonical_string())
}

/// Greatest integer not greater than `number`
pub fn floor(number: &str) -> Result<String> {
    Ok(parse_operand(number)?.floor().to_canonical_string())
}

/// Least integer not less than `number`
pub fn ceil(number: &str) -> Result<String> {
    Ok(parse_operand(number)?.ceil().to_canonical_string())
}

/// Compare by value: -1, 0 or 1
pub fn compare(a: &str, b: &str) -> Result<i32> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    Ok(match a.cmp(&b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

pub fn greater_than(a: &str, b: &str) -> Result<bool> {
    compare(a, b).map(|c| c > 0)
}

pub fn greater_than_or_equal(a: &str, b: &str) -> Result<bool> {
    compare(a, b).map(|c| c >= 0)
}

pub fn less_than(a: &str, b: &str) -> Result<bool> {
    compare(a, b).map(|c| c < 0)
}

pub fn less_than_or_equal(a: &str, b: &str) -> Result<bool> {
    compare(a, b).map(|c| c <= 0)
}

/// True if `number` is below zero
pub fn is_negative(number: &str) -> Result<bool> {
    Ok(parse_operand(number)?.is_negative())
}

/// True if `number` is zero or below
pub fn is_negative_or_zero(number: &str) -> Result<bool> {
    Ok(!parse_operand(number)?.is_positive())
}

/// True if `number` is not negative
///
/// Zero counts as positive here; use [`Decimal::is_positive`] for the
/// strict test.
pub fn is_positive(number: &str) -> Result<bool> {
    is_negative(number).map(|negative| !negative)
}

/// Whole-unit share of `amount`: `floor(amount * ratio / total)`
///
/// Shares of the same amount need not add back up to it; see [`allocate`]
/// for a split that loses nothing.
///
/// ```
/// # use decimath::calculator;
/// assert_eq!(calculator::share("100", "1", "3").unwrap(), "33");
/// assert_eq!(calculator::share("100", "2", "3").unwrap(), "66");
/// ```
pub fn share(amount: &str, ratio: &str, total: &str) -> Result<String> {
    let amount = parse_operand(amount)?;
    let ratio = parse_operand(ratio)?;
    let total = parse_operand(total)?;
    let part = amount
        .share(&ratio, &total, 0)
        .inspect_err(log_division_by_zero("share"))?;
    Ok(part.to_canonical_string())
}

/// Sum of all numbers; zero if there are none
///
/// Stops at the first operand which is not a number.
///
/// ```
/// # use decimath::calculator;
/// assert_eq!(calculator::sum(["1.5", "2", "-0.25"]).unwrap(), "3.25");
/// assert_eq!(calculator::sum(Vec::<String>::new()).unwrap(), "0");
/// ```
pub fn sum<I>(numbers: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut total = Decimal::zero();
    for number in numbers {
        total += parse_operand(number.as_ref())?;
    }
    Ok(total.to_canonical_string())
}

/// Split `amount` into parts proportional to `ratios`
///
/// The parts have the scale of `amount` and add up to it exactly.
pub fn allocate<S: AsRef<str>>(amount: &str, ratios: &[S]) -> Result<Vec<String>> {
    let amount = parse_operand(amount)?;
    let ratios = ratios
        .iter()
        .map(|r| parse_operand(r.as_ref()))
        .collect::<Result<Vec<Decimal>>>()?;
    let parts = amount
        .allocate(&ratios)
        .inspect_err(log_division_by_zero("allocate"))?;
    Ok(parts.iter().map(Decimal::to_canonical_string).collect())
}

/// Split `amount` into `n` parts as equal as the scale of `amount` permits
pub fn allocate_to(amount: &str, n: usize) -> Result<Vec<String>> {
    let parts = parse_operand(amount)?.allocate_to(n)?;
    Ok(parts.iter().map(Decimal::to_canonical_string).collect())
}
