//! Sign-and-digits intermediate shared by every codec.
//!
//! Encoding goes native value → [`Digits`] → buffer; decoding goes
//! buffer → [`Digits`] → native value. The overflow policy is applied
//! only here: truncation on the way in, range checks or wrapping on the
//! way out.

use num_bigint::{BigInt, BigUint, Sign as BigSign};
use num_traits::Zero;

use super::scaled::BigDecimal;
use super::{OverflowMode, Result, Sign};
use crate::error::DecimalError;

/// A sign plus exactly `precision` decimal digits, most significant first.
///
/// Digits decoded without validation may hold nibble values above 9; they
/// are folded arithmetically like any other digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
    sign: Sign,
    digits: Vec<u8>,
}

impl Digits {
    /// Wrap already-extracted digits. A negative zero becomes positive.
    pub(crate) fn new(sign: Sign, digits: Vec<u8>) -> Self {
        let sign = if digits.iter().all(|&d| d == 0) {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, digits }
    }

    /// Digits of an `i32`, padded or truncated to `precision`.
    pub fn from_i32(value: i32, precision: usize, mode: OverflowMode) -> Result<Self> {
        Self::from_i64(i64::from(value), precision, mode)
    }

    /// Digits of an `i64`, padded or truncated to `precision`.
    pub fn from_i64(value: i64, precision: usize, mode: OverflowMode) -> Result<Self> {
        Self::fit(value < 0, &value.unsigned_abs().to_string(), precision, mode)
    }

    /// Digits of a `BigInt`, padded or truncated to `precision`.
    pub fn from_big_int(value: &BigInt, precision: usize, mode: OverflowMode) -> Result<Self> {
        Self::fit(
            value.sign() == BigSign::Minus,
            &value.magnitude().to_str_radix(10),
            precision,
            mode,
        )
    }

    /// Digits of the unscaled value of a [`BigDecimal`]; the scale is dropped.
    pub fn from_decimal(value: &BigDecimal, precision: usize, mode: OverflowMode) -> Result<Self> {
        Self::from_big_int(value.unscaled(), precision, mode)
    }

    /// Fit a magnitude given as ASCII digits into `precision` digits.
    ///
    /// Zero, including a zero left over after truncation, is positive.
    fn fit(negative: bool, magnitude: &str, precision: usize, mode: OverflowMode) -> Result<Self> {
        if precision == 0 {
            return Err(DecimalError::InvalidPrecision { precision });
        }

        let mut digits: Vec<u8> = magnitude.bytes().map(|b| b - b'0').collect();
        if digits.len() > precision {
            if mode.is_checked() {
                return Err(DecimalError::PrecisionOverflow {
                    digits: digits.len(),
                    precision,
                });
            }
            tracing::trace!(
                digits = digits.len(),
                precision,
                "truncating to low-order digits"
            );
            let excess = digits.len() - precision;
            digits.drain(..excess);
        }

        let mut padded = vec![0u8; precision - digits.len()];
        padded.extend_from_slice(&digits);
        let negative = negative && padded.iter().any(|&d| d != 0);

        Ok(Self {
            sign: Sign::of(negative),
            digits: padded,
        })
    }

    /// Sign of the value.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Whether the value carries a negative sign.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// The digit values, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits.
    #[inline]
    pub fn precision(&self) -> usize {
        self.digits.len()
    }

    /// Magnitude modulo 2^64, and whether it exceeded `u64`.
    fn magnitude_u64(&self) -> (u64, bool) {
        let mut overflowed = false;
        let mut acc = 0u64;
        for &d in &self.digits {
            let (shifted, o1) = acc.overflowing_mul(10);
            let (sum, o2) = shifted.overflowing_add(u64::from(d));
            overflowed |= o1 || o2;
            acc = sum;
        }
        (acc, overflowed)
    }

    fn fits(&self, magnitude: u64, overflowed: bool, max_positive: u64) -> bool {
        // Negative range reaches one past the positive maximum.
        let limit = if self.is_negative() {
            max_positive + 1
        } else {
            max_positive
        };
        !overflowed && magnitude <= limit
    }

    fn signed_i64(&self, magnitude: u64) -> i64 {
        let value = magnitude as i64;
        if self.is_negative() {
            value.wrapping_neg()
        } else {
            value
        }
    }

    fn signed_i32(&self, magnitude: u64) -> i32 {
        let value = magnitude as u32 as i32;
        if self.is_negative() {
            value.wrapping_neg()
        } else {
            value
        }
    }

    /// The value as an `i64`, or `RangeOverflow` if it does not fit.
    pub fn checked_i64(&self) -> Result<i64> {
        let (magnitude, overflowed) = self.magnitude_u64();
        if !self.fits(magnitude, overflowed, i64::MAX as u64) {
            return Err(DecimalError::RangeOverflow { target: "i64" });
        }
        Ok(self.signed_i64(magnitude))
    }

    /// The value reduced modulo 2^64 into `i64` two's complement.
    ///
    /// `i64::MAX + 1` becomes `i64::MIN`.
    pub fn wrapping_i64(&self) -> i64 {
        let (magnitude, overflowed) = self.magnitude_u64();
        if !self.fits(magnitude, overflowed, i64::MAX as u64) {
            tracing::trace!(target_type = "i64", "wrapping decoded value");
        }
        self.signed_i64(magnitude)
    }

    /// The value as an `i32`, or `RangeOverflow` if it does not fit.
    pub fn checked_i32(&self) -> Result<i32> {
        let (magnitude, overflowed) = self.magnitude_u64();
        if !self.fits(magnitude, overflowed, i32::MAX as u64) {
            return Err(DecimalError::RangeOverflow { target: "i32" });
        }
        Ok(self.signed_i32(magnitude))
    }

    /// The value reduced modulo 2^32 into `i32` two's complement.
    ///
    /// `i32::MIN - 1` becomes `i32::MAX`.
    pub fn wrapping_i32(&self) -> i32 {
        let (magnitude, overflowed) = self.magnitude_u64();
        if !self.fits(magnitude, overflowed, i32::MAX as u64) {
            tracing::trace!(target_type = "i32", "wrapping decoded value");
        }
        self.signed_i32(magnitude)
    }

    /// `checked_i64` or `wrapping_i64` depending on `mode`.
    pub fn to_i64(&self, mode: OverflowMode) -> Result<i64> {
        match mode {
            OverflowMode::Checked => self.checked_i64(),
            OverflowMode::Wrapping => Ok(self.wrapping_i64()),
        }
    }

    /// `checked_i32` or `wrapping_i32` depending on `mode`.
    pub fn to_i32(&self, mode: OverflowMode) -> Result<i32> {
        match mode {
            OverflowMode::Checked => self.checked_i32(),
            OverflowMode::Wrapping => Ok(self.wrapping_i32()),
        }
    }

    /// The exact value as a `BigInt`. Never overflows.
    pub fn to_big_int(&self) -> BigInt {
        let magnitude = self
            .digits
            .iter()
            .fold(BigUint::zero(), |acc, &d| acc * 10u32 + u32::from(d));
        let sign = if self.is_negative() {
            BigSign::Minus
        } else {
            BigSign::Plus
        };
        BigInt::from_biguint(sign, magnitude)
    }

    /// The digits as the unscaled value of a [`BigDecimal`] with `scale`.
    /// Never overflows.
    pub fn to_decimal(&self, scale: i64) -> BigDecimal {
        BigDecimal::new(self.to_big_int(), scale)
    }
}
