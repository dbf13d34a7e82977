//! Errors raised while constructing or parsing [`BigRatio`](crate::BigRatio) values.

use thiserror::Error;

/// Failure of a ratio construction or parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatioError {
    /// A denominator would have been zero.
    ///
    /// Raised by direct construction, by division with a zero divisor, by raising
    /// zero to a negative power and by rounding or scaling with a zero target.
    #[error("BigRatio division by zero")]
    DivisionByZero,
    /// The input does not match the decimal grammar `-?[0-9]*[.]?[0-9]*`
    /// with at least one digit.
    #[error("malformed decimal string: {0:?}")]
    MalformedDecimal(String),
}
