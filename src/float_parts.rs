//! Bit-level decomposition of IEEE-754 binary64 values.
//!
//! [`NumberParts::of`] reads the eight bytes of an `f64` in big-endian logical
//! order, whatever the byte order of the host, and extracts the sign bit, the
//! 11-bit exponent and the 52-bit mantissa. The mantissa is recovered by
//! splicing the exponent of `2^52` over the top twelve bits: the resulting
//! double is exactly `2^52 + mantissa`.
//!
//! # Examples
//!
//! ```
//! use big_ratio::float_parts::{NumberParts, MAX_MANTISSA};
//!
//! let parts = NumberParts::of(3.0);
//! assert_eq!(parts.sign, 0);
//! assert_eq!(parts.biased_exponent, 1);
//! assert_eq!(parts.mantissa, MAX_MANTISSA / 2);
//! ```

/// Number of explicitly stored mantissa bits.
pub const MANTISSA_BITS: u32 = 52;

/// `2^52`, one past the largest stored mantissa.
pub const MAX_MANTISSA: u64 = 1 << MANTISSA_BITS;

/// Exponent bias of binary64.
pub const EXPONENT_BIAS: i32 = 1023;

/// Raw exponent shared by infinities and NaNs.
pub const RAW_EXPONENT_NON_FINITE: u16 = 0x7ff;

/// Byte order of an eight-byte buffer holding a double.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Byte order of the running platform, fixed for the whole process.
    pub const HOST: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    /// Physical position of the byte of rank `rank`, counted from the most
    /// significant end.
    #[inline(always)]
    const fn index(self, rank: usize) -> usize {
        match self {
            ByteOrder::Big => rank,
            ByteOrder::Little => 7 - rank,
        }
    }
}

/// Raw fields of one binary64 value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberParts {
    /// Sign bit, `1` for negative values (including `-0.0`).
    pub sign: u8,
    /// Stored 11-bit exponent.
    pub raw_exponent: u16,
    /// `raw_exponent - 1023`.
    pub biased_exponent: i32,
    /// Stored 52-bit fraction, as an integer magnitude.
    pub mantissa: u64,
}

impl NumberParts {
    /// Decompose `x` as laid out in memory on this host.
    pub fn of(x: f64) -> Self {
        Self::from_bytes(x.to_ne_bytes(), ByteOrder::HOST)
    }

    /// Decompose the double held in `bytes`, stored in `order`.
    pub fn from_bytes(mut bytes: [u8; 8], order: ByteOrder) -> Self {
        let top = order.index(0);
        let next = order.index(1);

        let sign = bytes[top] >> 7;
        let raw_exponent = (u16::from(bytes[top] & 0x7f) << 4) | u16::from(bytes[next] >> 4);

        // Sign 0 and exponent 0x433 (1023 + 52): the value becomes 2^52 + mantissa.
        bytes[top] = 0x43;
        bytes[next] = (bytes[next] & 0x0f) | 0x30;
        let spliced = match order {
            ByteOrder::Big => f64::from_be_bytes(bytes),
            ByteOrder::Little => f64::from_le_bytes(bytes),
        };
        // Integral and below 2^53, so the cast is exact.
        let mantissa = spliced as u64 - MAX_MANTISSA;

        Self {
            sign,
            raw_exponent,
            biased_exponent: i32::from(raw_exponent) - EXPONENT_BIAS,
            mantissa,
        }
    }

    /// `true` for `0.0` and `-0.0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.raw_exponent == 0 && self.mantissa == 0
    }

    /// `true` for non-zero values below the smallest normal exponent.
    #[inline]
    pub fn is_subnormal(&self) -> bool {
        self.raw_exponent == 0 && self.mantissa != 0
    }

    /// `true` unless the value is an infinity or a NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.raw_exponent != RAW_EXPONENT_NON_FINITE
    }
}
