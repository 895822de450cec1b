//! Error types

use crate::stdlib::string::String;

/// Failure to read a string as a decimal number
///
/// Accepted input is an optional leading `-`, at least one digit, and
/// optionally a `.` followed by at least one digit.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDecimalError {
    #[error("Failed to parse empty string")]
    Empty,

    #[error("invalid digit found at position {position}")]
    InvalidDigit { position: usize },

    #[error("no digits after decimal point")]
    MissingFraction,
}

/// Errors raised by calculator operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operand was not a decimal number
    #[error("invalid number format {input:?}: {source}")]
    InvalidNumberFormat {
        input: String,
        source: ParseDecimalError,
    },

    /// Divisor (or total of ratios) was zero
    #[error("division by zero")]
    DivisionByZero,

    /// Requested a negative number of fractional digits, or more than
    /// [`calculator::MAX_PRECISION`](crate::calculator::MAX_PRECISION)
    #[error("invalid precision {0}: must be between 0 and {max}", max = crate::calculator::MAX_PRECISION)]
    InvalidPrecision(i64),

    /// Allocation ratio was negative
    #[error("invalid ratio {0}: must not be negative")]
    InvalidRatio(String),

    /// Allocation requested with no parts
    #[error("cannot allocate to zero parts")]
    EmptyAllocation,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    pub(crate) fn invalid_number(input: &str, source: ParseDecimalError) -> Error {
        Error::InvalidNumberFormat {
            input: input.into(),
            source: source,
        }
    }
}
