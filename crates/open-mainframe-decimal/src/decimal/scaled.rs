//! Arbitrary-precision scaled decimal.
//!
//! A [`BigDecimal`] is an unscaled [`BigInt`] and a signed scale, the value
//! being `unscaled × 10^-scale`. Decimal fields store only the unscaled
//! digits; the scale comes from the field definition and is supplied again
//! on decode.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use rust_decimal::Decimal;

use super::Result;
use crate::error::DecimalError;

/// Largest scale a [`rust_decimal::Decimal`] can carry.
const MAX_RUST_DECIMAL_SCALE: u32 = 28;

/// An unscaled integer of any size with a signed decimal scale.
///
/// Equality is on the representation, so `1.0` and `1.00` differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal {
    unscaled: BigInt,
    scale: i64,
}

impl BigDecimal {
    /// `unscaled × 10^-scale`. A negative scale multiplies by a power of ten.
    pub fn new(unscaled: BigInt, scale: i64) -> Self {
        Self { unscaled, scale }
    }

    /// The unscaled value.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Digits to the right of the decimal point (negative for trailing zeros
    /// left of it).
    #[inline]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Split into the unscaled value and scale.
    pub fn into_parts(self) -> (BigInt, i64) {
        (self.unscaled, self.scale)
    }

    /// Whether the value is below zero.
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }
}

impl From<BigInt> for BigDecimal {
    fn from(unscaled: BigInt) -> Self {
        Self::new(unscaled, 0)
    }
}

impl From<i64> for BigDecimal {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<Decimal> for BigDecimal {
    fn from(value: Decimal) -> Self {
        Self::new(BigInt::from(value.mantissa()), i64::from(value.scale()))
    }
}

impl TryFrom<&BigDecimal> for Decimal {
    type Error = DecimalError;

    /// Narrow to a `rust_decimal::Decimal`.
    ///
    /// Fails with `ScaleOutOfRange` outside `0..=28` and `RangeOverflow`
    /// when the unscaled value needs more than 96 bits.
    fn try_from(value: &BigDecimal) -> Result<Self> {
        let scale = u32::try_from(value.scale)
            .ok()
            .filter(|s| *s <= MAX_RUST_DECIMAL_SCALE)
            .ok_or(DecimalError::ScaleOutOfRange { scale: value.scale })?;
        let overflow = || DecimalError::RangeOverflow { target: "Decimal" };
        let mantissa = i128::try_from(&value.unscaled).map_err(|_| overflow())?;
        Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| overflow())
    }
}

impl fmt::Display for BigDecimal {
    /// Plain notation, no exponent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.unscaled.magnitude().to_str_radix(10);

        if self.scale <= 0 {
            let zeros = if self.unscaled.is_zero() {
                0
            } else {
                self.scale.unsigned_abs() as usize
            };
            return write!(f, "{sign}{digits}{}", "0".repeat(zeros));
        }

        let scale = self.scale as usize;
        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int}.{frac}")
        } else {
            write!(f, "{sign}0.{}{digits}", "0".repeat(scale - digits.len()))
        }
    }
}

impl FromStr for BigDecimal {
    type Err = DecimalError;

    /// Parse `[+-]digits[.digits][(e|E)[+-]digits]`. The scale is the
    /// number of fraction digits minus the exponent.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DecimalError::InvalidLiteral {
            literal: s.to_string(),
        };

        let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(i) => (&s[..i], s[i + 1..].parse::<i64>().map_err(|_| invalid())?),
            None => (s, 0),
        };
        let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let body = int.strip_prefix(&['+', '-'][..]).unwrap_or(int);
        let all_digits = body.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit());
        if (body.is_empty() && frac.is_empty()) || !all_digits {
            return Err(invalid());
        }

        let unscaled = BigInt::from_str(&format!("{int}{frac}")).map_err(|_| invalid())?;
        let scale = i64::try_from(frac.len())
            .ok()
            .and_then(|n| n.checked_sub(exponent))
            .ok_or_else(invalid)?;
        Ok(Self::new(unscaled, scale))
    }
}
