//! Decimal string conversions for [`BigRatio`].

use crate::{pow10, BigRatio, RatioError};
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use tracing::debug;

static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?)([0-9]*)[.]?([0-9]*)$").expect("decimal grammar must compile"));

impl BigRatio {
    /// Render with exactly `decimals` fractional digits, rounding the tail half-up.
    ///
    /// This rounding is independent of [`RoundMode`](crate::RoundMode): the
    /// first dropped digit decides, and `5` rounds away from zero. A carry can
    /// reach the integer part. With `decimals == 0` no separator is written.
    ///
    /// A negative value that rounds to all zeros is written without a minus
    /// sign: `-1/2000` at two places renders `"0.00"`, never `"-0.00"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::BigRatio;
    ///
    /// let r = BigRatio::from_i64(5, 3).unwrap();
    /// assert_eq!(r.to_decimal_string(4), "1.6667");
    /// assert_eq!(r.to_decimal_string(0), "2");
    /// assert_eq!(r.neg().to_decimal_string(1), "-1.7");
    /// ```
    pub fn to_decimal_string(&self, decimals: u32) -> String {
        let scale = BigUint::from(10u32).pow(decimals);
        let magnitude = self.numer.magnitude();
        let denom = self.denom.magnitude();

        let mut whole = magnitude / denom;
        let scaled = (magnitude % denom) * &scale;
        let mut frac = &scaled / denom;
        if (&scaled * 10u32 / denom) % 10u32 >= BigUint::from(5u32) {
            frac += 1u32;
        }
        if frac >= scale {
            frac -= &scale;
            whole += 1u32;
        }

        let sign = if self.numer.is_negative() && !(whole.is_zero() && frac.is_zero()) {
            "-"
        } else {
            ""
        };
        if decimals == 0 {
            format!("{}{}", sign, whole)
        } else {
            format!(
                "{}{}.{:0>width$}",
                sign,
                whole,
                frac.to_string(),
                width = decimals as usize
            )
        }
    }

    /// Parse a plain decimal such as `"-12.50"`, `".5"` or `"7."`.
    ///
    /// Returns `None` when the input does not match `-?[0-9]*[.]?[0-9]*` or
    /// holds no digit at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::BigRatio;
    ///
    /// let r = BigRatio::parse_decimal_str("-23.14").unwrap();
    /// assert_eq!(r, BigRatio::from_i64(-2314, 100).unwrap());
    /// assert!(BigRatio::parse_decimal_str("-.").is_none());
    /// ```
    pub fn parse_decimal_str(s: &str) -> Option<Self> {
        let caps = DECIMAL_RE.captures(s)?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        let (minus, int_digits, frac_digits) = (group(1), group(2), group(3));
        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }

        let denom = pow10(u32::try_from(frac_digits.len()).ok()?);
        let numer = parse_digits(int_digits)? * &denom + parse_digits(frac_digits)?;
        let numer = if minus.is_empty() { numer } else { -numer };
        Some(Self::reduce(numer, denom))
    }

    /// Like [`parse_decimal_str`](BigRatio::parse_decimal_str), reporting the
    /// rejected input as [`RatioError::MalformedDecimal`].
    pub fn from_decimal_str(s: &str) -> Result<Self, RatioError> {
        Self::parse_decimal_str(s).ok_or_else(|| {
            debug!(input = s, "rejecting malformed decimal string");
            RatioError::MalformedDecimal(s.to_owned())
        })
    }
}

fn parse_digits(digits: &str) -> Option<BigInt> {
    if digits.is_empty() {
        Some(BigInt::zero())
    } else {
        BigInt::parse_bytes(digits.as_bytes(), 10)
    }
}

impl FromStr for BigRatio {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}
