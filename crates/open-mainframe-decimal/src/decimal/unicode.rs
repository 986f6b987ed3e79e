//! Unicode (NATIONAL) decimal encoding and decoding.
//!
//! One UTF-16 code unit per digit (`'0'..='9'`), optionally with a
//! separate `'+'`/`'-'` unit before or after the digits. There is no
//! embedded-sign Unicode form.

use std::ops::Range;

use num_bigint::BigInt;

use super::decimal_type::{DecimalType, SignPlacement};
use super::digits::Digits;
use super::layout::{typed_region, Form};
use super::scaled::BigDecimal;
use super::{OverflowMode, Result, Sign, UNICODE_ZERO};
use crate::error::DecimalError;

fn digit_start(decimal_type: DecimalType) -> usize {
    match decimal_type.sign_placement() {
        SignPlacement::SeparateLeading => 1,
        _ => 0,
    }
}

/// Write `digits` into a field of exactly `decimal_type.required_len(p)` units.
///
/// The caller rejects negative values for [`DecimalType::UnicodeUnsigned`].
pub(crate) fn write_field(digits: &Digits, decimal_type: DecimalType, field: &mut [u16]) {
    let start = digit_start(decimal_type);
    for (i, &d) in digits.digits().iter().enumerate() {
        field[start + i] = UNICODE_ZERO + u16::from(d & 0x0F);
    }
    match decimal_type.sign_placement() {
        SignPlacement::SeparateLeading => field[0] = digits.sign().to_unicode(),
        SignPlacement::SeparateTrailing => field[digits.precision()] = digits.sign().to_unicode(),
        _ => {}
    }
}

/// Read the digits and sign of a validated Unicode region.
///
/// Unchecked reads take the low nibble of each unit as the digit.
pub(crate) fn read_field(
    buf: &[u16],
    region: Range<usize>,
    decimal_type: DecimalType,
    precision: usize,
    mode: OverflowMode,
) -> Result<Digits> {
    let field = &buf[region.clone()];
    let start = digit_start(decimal_type);

    let mut digits = Vec::with_capacity(precision);
    for (i, &unit) in field[start..start + precision].iter().enumerate() {
        let valid = (UNICODE_ZERO..=UNICODE_ZERO + 9).contains(&unit);
        if mode.is_checked() && !valid {
            return Err(DecimalError::InvalidDigit {
                position: region.start + start + i,
                value: unit,
            });
        }
        digits.push((unit & 0x0F) as u8);
    }

    let sign = match decimal_type.sign_placement() {
        SignPlacement::SeparateLeading => Sign::from_unicode(field[0], mode)?,
        SignPlacement::SeparateTrailing => Sign::from_unicode(field[precision], mode)?,
        _ => Sign::Positive,
    };
    Ok(Digits::new(sign, digits))
}

/// Reject negative values headed for an unsigned field.
pub(crate) fn check_signed(digits: &Digits, decimal_type: DecimalType) -> Result<()> {
    if digits.is_negative() && !decimal_type.is_signed() {
        return Err(DecimalError::NegativeUnsigned);
    }
    Ok(())
}

fn encode(
    to_digits: impl FnOnce() -> Result<Digits>,
    buf: &mut [u16],
    offset: usize,
    precision: usize,
    decimal_type: i32,
) -> Result<()> {
    let (region, decimal_type) =
        typed_region(Form::Unicode, buf.len(), offset, precision, decimal_type)?;
    let digits = to_digits()?;
    check_signed(&digits, decimal_type)?;
    write_field(&digits, decimal_type, &mut buf[region]);
    Ok(())
}

fn decode(
    buf: &[u16],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: i32,
) -> Result<Digits> {
    let (region, decimal_type) =
        typed_region(Form::Unicode, buf.len(), offset, precision, decimal_type)?;
    read_field(buf, region, decimal_type, precision, mode)
}

/// Encode an `i32` as Unicode decimal at `buf[offset..]`.
///
/// `decimal_type` is a [`DecimalType`] or its raw code; it must be one of
/// the three Unicode types.
///
/// # Errors
/// `InvalidPrecision`, `OutOfBounds`, `InvalidDecimalType`,
/// `NegativeUnsigned` for a negative value with
/// [`DecimalType::UnicodeUnsigned`], or in checked mode `PrecisionOverflow`.
pub fn encode_unicode_i32(
    value: i32,
    buf: &mut [u16],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    encode(
        || Digits::from_i32(value, precision, mode),
        buf,
        offset,
        precision,
        decimal_type.into(),
    )
}

/// Encode an `i64` as Unicode decimal at `buf[offset..]`.
pub fn encode_unicode_i64(
    value: i64,
    buf: &mut [u16],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    encode(
        || Digits::from_i64(value, precision, mode),
        buf,
        offset,
        precision,
        decimal_type.into(),
    )
}

/// Encode a `BigInt` as Unicode decimal at `buf[offset..]`.
pub fn encode_unicode_big_int(
    value: &BigInt,
    buf: &mut [u16],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    encode(
        || Digits::from_big_int(value, precision, mode),
        buf,
        offset,
        precision,
        decimal_type.into(),
    )
}

/// Encode the unscaled value of a `BigDecimal` as Unicode decimal.
pub fn encode_unicode_decimal(
    value: &BigDecimal,
    buf: &mut [u16],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    encode(
        || Digits::from_decimal(value, precision, mode),
        buf,
        offset,
        precision,
        decimal_type.into(),
    )
}

/// Decode Unicode decimal at `buf[offset..]` into an `i32`.
pub fn decode_unicode_i32(
    buf: &[u16],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<i32> {
    decode(buf, offset, precision, mode, decimal_type.into())?.to_i32(mode)
}

/// Decode Unicode decimal at `buf[offset..]` into an `i64`.
pub fn decode_unicode_i64(
    buf: &[u16],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<i64> {
    decode(buf, offset, precision, mode, decimal_type.into())?.to_i64(mode)
}

/// Decode Unicode decimal at `buf[offset..]` into a `BigInt`.
pub fn decode_unicode_big_int(
    buf: &[u16],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<BigInt> {
    Ok(decode(buf, offset, precision, mode, decimal_type.into())?.to_big_int())
}

/// Decode Unicode decimal at `buf[offset..]` as the unscaled value of a
/// `BigDecimal` with the given `scale`.
pub fn decode_unicode_decimal(
    buf: &[u16],
    offset: usize,
    precision: usize,
    scale: i64,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<BigDecimal> {
    Ok(decode(buf, offset, precision, mode, decimal_type.into())?.to_decimal(scale))
}
