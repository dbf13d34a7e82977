//! Exact rational number arithmetic over arbitrary-precision integers.
//!
//! This library provides [`BigRatio`], a ratio of two `num-bigint` integers
//! that is always kept in canonical form: fully reduced, with a positive
//! denominator and the sign carried by the numerator.
//!
//! # Features
//!
//! - **Exact arithmetic**: addition, subtraction, multiplication, division and
//!   integer powers never lose precision
//! - **Directed rounding**: [`BigRatio::round`] re-expresses a value over any
//!   denominator, rounding toward negative or positive infinity
//! - **Decimal strings**: half-up rendering to a fixed number of places and
//!   parsing of plain decimals
//! - **Bit-exact float import**: [`BigRatio::from_f64`] yields the exact value
//!   of an `f64`, not a decimal approximation of it
//! - **Scaled integers**: conversions to and from fixed-point integers such as
//!   token amounts with 18 decimals
//!
//! # Design Philosophy
//!
//! Every value goes through one normalizing routine. Operations never mutate
//! their operands and always return reduced results, so structural equality
//! is numeric equality.
//!
//! Fallible operations return [`RatioError`]. The `/` operator panics on a
//! zero divisor; use [`BigRatio::div`] to handle it.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use big_ratio::BigRatio;
//! use num_bigint::BigInt;
//!
//! let a = BigRatio::from_i64(2, 3).unwrap();
//! let b = BigRatio::from_i64(7, 8).unwrap();
//!
//! let sum = &a + &b;
//! assert_eq!(sum.numer(), &BigInt::from(37));
//! assert_eq!(sum.denom(), &BigInt::from(24));
//! assert_eq!(sum.to_string(), "37/24");
//! ```
//!
//! ## Rounding
//!
//! ```
//! use big_ratio::{BigRatio, RoundMode};
//! use num_bigint::BigUint;
//!
//! let third = BigRatio::from_i64(-100, 3).unwrap();
//! let tenths = BigUint::from(10u32);
//! assert_eq!(third.round(&tenths, RoundMode::Down).unwrap().to_string(), "-167/5");
//! assert_eq!(third.round(&tenths, RoundMode::Up).unwrap().to_string(), "-333/10");
//! ```
//!
//! ## Floats
//!
//! ```
//! use big_ratio::BigRatio;
//!
//! let tenth = BigRatio::from_f64(0.1).unwrap();
//! assert_eq!(tenth.to_string(), "3602879701896397/36028797018963968");
//! assert_eq!(tenth.to_decimal_string(3), "0.100");
//! ```

pub mod decimal;
pub mod error;
pub mod float_parts;

pub use crate::error::RatioError;
pub use crate::float_parts::NumberParts;

use crate::float_parts::{EXPONENT_BIAS, MANTISSA_BITS, MAX_MANTISSA};
use core::cmp::Ordering;
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, ToPrimitive, Zero};
use tracing::debug;

/// Direction of [`BigRatio::round`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundMode {
    /// Toward negative infinity.
    Down,
    /// Toward positive infinity.
    Up,
}

/// A rational number in canonical form.
///
/// # Invariants
///
/// - Denominator is always positive
/// - Numerator and denominator are coprime
/// - Zero is always `0/1`
///
/// Because the representation is unique, the derived `PartialEq` and `Hash`
/// compare values numerically.
///
/// # Examples
///
/// ```
/// use big_ratio::BigRatio;
/// use num_bigint::BigInt;
///
/// let r = BigRatio::from_i64(2000, -4000).unwrap();
/// assert_eq!(r.numer(), &BigInt::from(-1));
/// assert_eq!(r.denom(), &BigInt::from(2));
/// ```
///
/// With the `std::ops` traits in scope, a method call on an owned value
/// resolves to the operator impl; a borrowed receiver reaches the inherent
/// method, which for `div` returns a `Result`.
///
/// ```
/// use big_ratio::{BigRatio, RatioError};
/// use std::ops::{Add, Div, Mul, Neg, Sub};
///
/// let a = BigRatio::from_i64(2, 3).unwrap();
/// let b = BigRatio::from_i64(7, 8).unwrap();
///
/// assert_eq!(a.clone().add(&b), BigRatio::from_i64(37, 24).unwrap());
/// assert_eq!(a.clone().sub(&b), BigRatio::from_i64(-5, 24).unwrap());
/// assert_eq!(a.clone().mul(&b), BigRatio::from_i64(7, 12).unwrap());
/// assert_eq!(a.clone().div(&b), BigRatio::from_i64(16, 21).unwrap());
/// assert_eq!(a.clone().neg(), BigRatio::from_i64(-2, 3).unwrap());
///
/// assert_eq!((&a).add(&b), BigRatio::from_i64(37, 24).unwrap());
/// assert_eq!((&a).div(&b), Ok(BigRatio::from_i64(16, 21).unwrap()));
/// assert_eq!((&a).div(&BigRatio::zero()), Err(RatioError::DivisionByZero));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigRatio {
    numer: BigInt,
    denom: BigInt,
}

impl BigRatio {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a ratio in lowest terms.
    ///
    /// Returns [`RatioError::DivisionByZero`] if `denom` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::{BigRatio, RatioError};
    /// use num_bigint::BigInt;
    ///
    /// let r = BigRatio::new(BigInt::from(-1), BigInt::from(-2)).unwrap();
    /// assert_eq!(r.to_string(), "1/2");
    ///
    /// let err = BigRatio::new(BigInt::from(2), BigInt::from(0)).unwrap_err();
    /// assert_eq!(err, RatioError::DivisionByZero);
    /// ```
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, RatioError> {
        if denom.is_zero() {
            debug!(%numer, "rejecting ratio with zero denominator");
            return Err(RatioError::DivisionByZero);
        }
        Ok(Self::reduce(numer, denom))
    }

    /// Create from machine integers.
    #[inline]
    pub fn from_i64(numer: i64, denom: i64) -> Result<Self, RatioError> {
        Self::new(BigInt::from(numer), BigInt::from(denom))
    }

    /// Create a ratio representing the integer `n`.
    #[inline]
    pub fn from_integer(n: BigInt) -> Self {
        Self::reduce(n, BigInt::one())
    }

    /// The single normalizing path behind every constructor. `denom` must be
    /// non-zero.
    fn reduce(numer: BigInt, denom: BigInt) -> Self {
        let negative = numer.is_negative() != denom.is_negative();
        let numer = numer.abs();
        let denom = denom.abs();

        let g = euclidean_gcd(numer.clone(), denom.clone());
        let numer = numer / &g;
        let denom = denom / &g;

        Self {
            numer: if negative { -numer } else { numer },
            denom,
        }
    }

    // ========================================================================
    // CONSTANTS
    // ========================================================================

    /// Create a ratio representing 0.
    #[inline]
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// Create a ratio representing 1.
    #[inline]
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    /// Create a ratio representing 2.
    #[inline]
    pub fn two() -> Self {
        Self::from_integer(BigInt::from(2u32))
    }

    /// Create a ratio representing 1/2.
    #[inline]
    pub fn one_half() -> Self {
        Self::reduce(BigInt::one(), BigInt::from(2u32))
    }

    /// Create a ratio representing 10.
    #[inline]
    pub fn ten() -> Self {
        Self::from_integer(pow10(1))
    }

    /// Create a ratio representing 100.
    #[inline]
    pub fn one_hundred() -> Self {
        Self::from_integer(pow10(2))
    }

    /// Create a ratio representing 1000.
    #[inline]
    pub fn one_thousand() -> Self {
        Self::from_integer(pow10(3))
    }

    /// Create a ratio representing 10000.
    #[inline]
    pub fn ten_thousand() -> Self {
        Self::from_integer(pow10(4))
    }

    /// Create a ratio representing 10^18, the usual scale of token amounts.
    #[inline]
    pub fn one_e18() -> Self {
        Self::from_integer(pow10(18))
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The numerator, carrying the sign.
    #[inline(always)]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The denominator, always positive.
    #[inline(always)]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Consume the ratio, returning `(numer, denom)`.
    #[inline]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    /// Check if the ratio is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Check if the ratio represents an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Check if the ratio is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// `-1` for negative values and `1` otherwise.
    ///
    /// Zero reports `1`: the sign is two-valued and callers may rely on that.
    #[inline]
    pub fn sign(&self) -> i32 {
        if self.numer.is_negative() {
            -1
        } else {
            1
        }
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    /// Add two ratios.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self::reduce(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }

    /// Subtract another ratio.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        Self::reduce(
            &self.numer * &other.denom - &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }

    /// Multiply two ratios.
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self::reduce(&self.numer * &other.numer, &self.denom * &other.denom)
    }

    /// Divide by another ratio.
    ///
    /// Returns [`RatioError::DivisionByZero`] if `other` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::{BigRatio, RatioError};
    ///
    /// let a = BigRatio::from_i64(2, 3).unwrap();
    /// let b = BigRatio::from_i64(7, 8).unwrap();
    /// assert_eq!(a.div(&b).unwrap(), BigRatio::from_i64(16, 21).unwrap());
    /// assert_eq!(a.div(&BigRatio::zero()), Err(RatioError::DivisionByZero));
    /// ```
    #[inline]
    pub fn div(&self, other: &Self) -> Result<Self, RatioError> {
        Self::new(&self.numer * &other.denom, &self.denom * &other.numer)
    }

    /// Get the reciprocal (1/x).
    ///
    /// Returns [`RatioError::DivisionByZero`] if the ratio is zero.
    #[inline]
    pub fn recip(&self) -> Result<Self, RatioError> {
        Self::new(self.denom.clone(), self.numer.clone())
    }

    /// Negate the ratio.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn neg(&self) -> Self {
        Self::reduce(-&self.numer, self.denom.clone())
    }

    /// Get the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::reduce(self.numer.abs(), self.denom.clone())
    }

    /// Raise to an integer power by square-and-multiply.
    ///
    /// A negative exponent yields the reciprocal of the positive power, so
    /// zero raised to a negative power fails with
    /// [`RatioError::DivisionByZero`]. Any value raised to zero is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::BigRatio;
    /// use num_bigint::BigInt;
    ///
    /// let two = BigRatio::two();
    /// assert_eq!(two.pow(&BigInt::from(3)).unwrap(), BigRatio::from_i64(8, 1).unwrap());
    /// assert_eq!(two.pow(&BigInt::from(-3)).unwrap(), BigRatio::from_i64(1, 8).unwrap());
    /// ```
    pub fn pow(&self, exponent: &BigInt) -> Result<Self, RatioError> {
        if exponent.is_negative() {
            return BigRatio::div(&Self::one(), &self.pow(&-exponent)?);
        }

        let exponent = exponent.magnitude();
        let bits = exponent.bits();
        let mut result = Self::one();
        let mut base = self.clone();
        for i in 0..bits {
            if exponent.bit(i) {
                result = BigRatio::mul(&result, &base);
            }
            if i + 1 < bits {
                base = BigRatio::mul(&base, &base);
            }
        }
        Ok(result)
    }

    // ========================================================================
    // COMPARISONS
    // ========================================================================

    /// Less-than by cross-multiplication; both denominators are positive.
    #[inline]
    pub fn lt(&self, other: &Self) -> bool {
        &self.numer * &other.denom < &other.numer * &self.denom
    }

    /// Less-than-or-equal by cross-multiplication.
    #[inline]
    pub fn lte(&self, other: &Self) -> bool {
        &self.numer * &other.denom <= &other.numer * &self.denom
    }

    /// Greater-than, the complement of [`lte`](BigRatio::lte).
    #[inline]
    pub fn gt(&self, other: &Self) -> bool {
        !self.lte(other)
    }

    /// Greater-than-or-equal, the complement of [`lt`](BigRatio::lt).
    #[inline]
    pub fn gte(&self, other: &Self) -> bool {
        !self.lt(other)
    }

    /// Inequality of the canonical representations.
    #[inline]
    pub fn neq(&self, other: &Self) -> bool {
        self != other
    }

    // ========================================================================
    // ROUNDING
    // ========================================================================

    /// Re-express the value over `new_denom`, rounding the numerator in the
    /// direction given by `mode`.
    ///
    /// [`RoundMode::Down`] rounds toward negative infinity and
    /// [`RoundMode::Up`] toward positive infinity, whatever the sign of the
    /// value. This is directed rounding, not round-to-nearest. A `new_denom`
    /// of 1 rounds to an integer, 100 to two decimal places.
    ///
    /// Returns [`RatioError::DivisionByZero`] if `new_denom` is zero.
    pub fn round(&self, new_denom: &BigUint, mode: RoundMode) -> Result<Self, RatioError> {
        let new_denom = BigInt::from(new_denom.clone());
        let positive = self.sign() > 0;
        let scaled = self.numer.abs() * &new_denom;

        let new_numer = match mode {
            RoundMode::Down if positive => &scaled / &self.denom,
            RoundMode::Down => -ceil_div(&scaled, &self.denom),
            RoundMode::Up if positive => ceil_div(&scaled, &self.denom),
            RoundMode::Up => -(&scaled / &self.denom),
        };
        Self::new(new_numer, new_denom)
    }

    // ========================================================================
    // SCALED INTEGER CONVERSION
    // ========================================================================

    /// Interpret `value` as a fixed-point integer with `decimals` places.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::BigRatio;
    /// use num_bigint::BigInt;
    ///
    /// let r = BigRatio::from_bigint_with_decimals(BigInt::from(1_500_000), 6);
    /// assert_eq!(r, BigRatio::from_i64(3, 2).unwrap());
    /// ```
    pub fn from_bigint_with_decimals(value: BigInt, decimals: u32) -> Self {
        Self::reduce(value, pow10(decimals))
    }

    /// Fixed-point integer with `decimals` places, rounded toward zero.
    pub fn to_bigint_with_decimals(&self, decimals: u32) -> BigInt {
        self.to_scaled_bigint(&pow10(decimals))
    }

    /// Interpret `value` as a multiple of `1/scale`.
    ///
    /// Returns [`RatioError::DivisionByZero`] if `scale` is zero.
    pub fn from_scaled_bigint(value: BigInt, scale: BigInt) -> Result<Self, RatioError> {
        Self::new(value, scale)
    }

    /// `self * scale` as an integer, rounded toward zero.
    pub fn to_scaled_bigint(&self, scale: &BigInt) -> BigInt {
        &self.numer * scale / &self.denom
    }

    // ========================================================================
    // FLOAT CONVERSION
    // ========================================================================

    /// Exact value of an `f64`.
    ///
    /// Every finite double, subnormals included, is a dyadic rational and is
    /// reproduced bit for bit. Returns `None` if the input is infinite or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::BigRatio;
    ///
    /// assert_eq!(BigRatio::from_f64(-1.5).unwrap(), BigRatio::from_i64(-3, 2).unwrap());
    /// assert!(BigRatio::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(f: f64) -> Option<Self> {
        let parts = NumberParts::of(f);
        if !parts.is_finite() {
            return None;
        }
        if parts.is_zero() {
            return Some(Self::zero());
        }

        // value = significand * 2^(exponent - 52)
        let (significand, exponent) = if parts.is_subnormal() {
            (parts.mantissa, 1 - EXPONENT_BIAS)
        } else {
            (MAX_MANTISSA + parts.mantissa, parts.biased_exponent)
        };
        let shift = exponent - MANTISSA_BITS as i32;
        let significand = BigInt::from(significand);

        let (numer, denom) = if shift >= 0 {
            (significand << shift as usize, BigInt::one())
        } else {
            (significand, BigInt::one() << shift.unsigned_abs() as usize)
        };
        let numer = if parts.sign == 1 { -numer } else { numer };
        Some(Self::reduce(numer, denom))
    }

    /// Exact value of `f` rounded down to `decimals` decimal places.
    ///
    /// Returns `None` if the input is infinite or NaN.
    pub fn from_f64_with_decimals(f: f64, decimals: u32) -> Option<Self> {
        let scale = BigUint::from(10u32).pow(decimals);
        Self::from_f64(f)?.round(&scale, RoundMode::Down).ok()
    }

    /// Approximate conversion to f64.
    ///
    /// Operands wider than 64 bits are truncated to their top 64 bits before
    /// dividing, and the dropped binary exponent is re-applied, so very large
    /// numerators and denominators do not overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::BigRatio;
    ///
    /// let r = BigRatio::from_i64(1, 2).unwrap();
    /// assert_eq!(r.to_f64_approx(), 0.5);
    /// ```
    pub fn to_f64_approx(&self) -> f64 {
        if self.numer.is_zero() {
            return 0.0;
        }

        let n_shift = self.numer.bits().saturating_sub(64);
        let d_shift = self.denom.bits().saturating_sub(64);

        let n_approx = top_bits(self.numer.magnitude(), n_shift);
        let d_approx = top_bits(self.denom.magnitude(), d_shift);

        let exp_diff = i32::try_from(n_shift as i64 - d_shift as i64)
            .unwrap_or(if n_shift > d_shift { i32::MAX } else { i32::MIN });
        // Two steps, so a quotient below 1 can still reach the top binade.
        let half = exp_diff / 2;
        let val = n_approx / d_approx * 2f64.powi(half) * 2f64.powi(exp_diff - half);

        if self.numer.is_negative() {
            -val
        } else {
            val
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// GCD by the Euclidean algorithm; `euclidean_gcd(a, 0) == a`.
fn euclidean_gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Ceiling of `a / b` for `a >= 0`, `b > 0`.
#[inline]
fn ceil_div(a: &BigInt, b: &BigInt) -> BigInt {
    (a + b - 1u32) / b
}

#[inline]
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

/// `n >> shift` as an f64; at most 64 bits survive the shift.
#[inline]
fn top_bits(n: &BigUint, shift: u64) -> f64 {
    (n >> shift).to_u64().map_or(f64::INFINITY, |w| w as f64)
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

use core::ops::{Add, Div, Mul, Neg, Sub};

impl Add for BigRatio {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        BigRatio::add(&self, &other)
    }
}

impl Add for &BigRatio {
    type Output = BigRatio;
    #[inline]
    fn add(self, other: Self) -> BigRatio {
        BigRatio::add(self, other)
    }
}

impl Add<&BigRatio> for BigRatio {
    type Output = BigRatio;
    #[inline]
    fn add(self, other: &BigRatio) -> BigRatio {
        BigRatio::add(&self, other)
    }
}

impl Sub for BigRatio {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        BigRatio::sub(&self, &other)
    }
}

impl Sub for &BigRatio {
    type Output = BigRatio;
    #[inline]
    fn sub(self, other: Self) -> BigRatio {
        BigRatio::sub(self, other)
    }
}

impl Sub<&BigRatio> for BigRatio {
    type Output = BigRatio;
    #[inline]
    fn sub(self, other: &BigRatio) -> BigRatio {
        BigRatio::sub(&self, other)
    }
}

impl Mul for BigRatio {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        BigRatio::mul(&self, &other)
    }
}

impl Mul for &BigRatio {
    type Output = BigRatio;
    #[inline]
    fn mul(self, other: Self) -> BigRatio {
        BigRatio::mul(self, other)
    }
}

impl Mul<&BigRatio> for BigRatio {
    type Output = BigRatio;
    #[inline]
    fn mul(self, other: &BigRatio) -> BigRatio {
        BigRatio::mul(&self, other)
    }
}

/// # Panics
///
/// Panics if `other` is zero.
impl Div for BigRatio {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        &self / &other
    }
}

/// # Panics
///
/// Panics if `other` is zero.
impl Div for &BigRatio {
    type Output = BigRatio;
    fn div(self, other: Self) -> BigRatio {
        match BigRatio::div(self, other) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

/// # Panics
///
/// Panics if `other` is zero.
impl Div<&BigRatio> for BigRatio {
    type Output = BigRatio;
    fn div(self, other: &BigRatio) -> BigRatio {
        &self / other
    }
}

impl Neg for BigRatio {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        BigRatio::neg(&self)
    }
}

impl Neg for &BigRatio {
    type Output = BigRatio;
    #[inline]
    fn neg(self) -> BigRatio {
        BigRatio::neg(self)
    }
}

impl PartialOrd for BigRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for BigRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        if BigRatio::lt(self, other) {
            Ordering::Less
        } else if BigRatio::lt(other, self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl From<BigInt> for BigRatio {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for BigRatio {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

impl Default for BigRatio {
    fn default() -> Self {
        Self::zero()
    }
}

/// The exact form `numer/denom`, e.g. `-5/24`.
impl fmt::Display for BigRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
