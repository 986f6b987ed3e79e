//! External (EBCDIC zoned) decimal encoding and decoding.
//!
//! Zoned decimal format stores one digit per byte, with the zone nibble
//! in the high position and the digit in the low position. This is the
//! default COBOL DISPLAY format for numeric data.
//!
//! # Format
//!
//! - Digit bytes are `0xF0..=0xF9`
//! - Embedded sign: the zone nibble of the first (leading) or last
//!   (trailing) digit byte is 0xC for positive, 0xD for negative
//! - Separate sign: an extra EBCDIC `'+'` (0x4E) or `'-'` (0x60) byte
//!   before (leading) or after (trailing) the digits
//!
//! Example: -12345 with precision 5
//! - Embedded trailing: 0xF1 0xF2 0xF3 0xF4 0xD5
//! - Embedded leading:  0xD1 0xF2 0xF3 0xF4 0xF5
//! - Separate trailing: 0xF1 0xF2 0xF3 0xF4 0xF5 0x60
//! - Separate leading:  0x60 0xF1 0xF2 0xF3 0xF4 0xF5

use std::ops::Range;

use num_bigint::BigInt;

use super::decimal_type::{DecimalType, SignPlacement};
use super::digits::Digits;
use super::layout::{typed_region, Form};
use super::scaled::BigDecimal;
use super::{OverflowMode, Result, Sign, EBCDIC_DIGIT_ZONE};
use crate::error::DecimalError;

fn digit_start(decimal_type: DecimalType) -> usize {
    match decimal_type.sign_placement() {
        SignPlacement::SeparateLeading => 1,
        _ => 0,
    }
}

/// Write `digits` into a field of exactly `decimal_type.required_len(p)` bytes.
pub(crate) fn write_field(digits: &Digits, decimal_type: DecimalType, field: &mut [u8]) {
    let start = digit_start(decimal_type);
    let precision = digits.precision();
    for (i, &d) in digits.digits().iter().enumerate() {
        field[start + i] = EBCDIC_DIGIT_ZONE | (d & 0x0F);
    }

    let sign = digits.sign();
    match decimal_type.sign_placement() {
        SignPlacement::EmbeddedLeading => field[0] = sign.to_zone() | (field[0] & 0x0F),
        SignPlacement::EmbeddedTrailing => {
            let last = precision - 1;
            field[last] = sign.to_zone() | (field[last] & 0x0F);
        }
        SignPlacement::SeparateLeading => field[0] = sign.to_ebcdic(),
        SignPlacement::SeparateTrailing => field[precision] = sign.to_ebcdic(),
        SignPlacement::None => {}
    }
}

/// Read the digits and sign of a validated zoned region.
///
/// In checked mode every digit byte must be `0xF0..=0xF9`, except that the
/// byte carrying an embedded sign is judged on its digit nibble only.
pub(crate) fn read_field(
    buf: &[u8],
    region: Range<usize>,
    decimal_type: DecimalType,
    precision: usize,
    mode: OverflowMode,
) -> Result<Digits> {
    let field = &buf[region.clone()];
    let start = digit_start(decimal_type);
    let sign_digit = match decimal_type.sign_placement() {
        SignPlacement::EmbeddedLeading => Some(0),
        SignPlacement::EmbeddedTrailing => Some(precision - 1),
        _ => None,
    };

    let mut digits = Vec::with_capacity(precision);
    for (i, &byte) in field[start..start + precision].iter().enumerate() {
        let d = byte & 0x0F;
        let zoned = sign_digit == Some(i) || byte & 0xF0 == EBCDIC_DIGIT_ZONE;
        if mode.is_checked() && (d > 9 || !zoned) {
            return Err(DecimalError::InvalidDigit {
                position: region.start + start + i,
                value: u16::from(byte),
            });
        }
        digits.push(d);
    }

    let sign = match decimal_type.sign_placement() {
        SignPlacement::EmbeddedLeading => Sign::from_nibble(field[0] >> 4, mode)?,
        SignPlacement::EmbeddedTrailing => Sign::from_nibble(field[precision - 1] >> 4, mode)?,
        SignPlacement::SeparateLeading => Sign::from_ebcdic(field[0], mode)?,
        SignPlacement::SeparateTrailing => Sign::from_ebcdic(field[precision], mode)?,
        SignPlacement::None => Sign::Positive,
    };
    Ok(Digits::new(sign, digits))
}

fn zone(
    to_digits: impl FnOnce() -> Result<Digits>,
    buf: &mut [u8],
    offset: usize,
    precision: usize,
    decimal_type: i32,
) -> Result<()> {
    let (region, decimal_type) =
        typed_region(Form::External, buf.len(), offset, precision, decimal_type)?;
    write_field(&to_digits()?, decimal_type, &mut buf[region]);
    Ok(())
}

fn unzone(
    buf: &[u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: i32,
) -> Result<Digits> {
    let (region, decimal_type) =
        typed_region(Form::External, buf.len(), offset, precision, decimal_type)?;
    read_field(buf, region, decimal_type, precision, mode)
}

/// Encode an `i32` as EBCDIC external decimal at `buf[offset..]`.
///
/// `decimal_type` is a [`DecimalType`] or its raw code; it must be one of
/// the four EBCDIC types.
///
/// # Errors
/// `InvalidPrecision`, `OutOfBounds`, `InvalidDecimalType`, or in checked
/// mode `PrecisionOverflow`.
pub fn zone_i32(
    value: i32,
    buf: &mut [u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    zone(
        || Digits::from_i32(value, precision, mode),
        buf,
        offset,
        precision,
        decimal_type.into(),
    )
}

/// Encode an `i64` as EBCDIC external decimal at `buf[offset..]`.
pub fn zone_i64(
    value: i64,
    buf: &mut [u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    zone(
        || Digits::from_i64(value, precision, mode),
        buf,
        offset,
        precision,
        decimal_type.into(),
    )
}

/// Encode a `BigInt` as EBCDIC external decimal at `buf[offset..]`.
pub fn zone_big_int(
    value: &BigInt,
    buf: &mut [u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    zone(
        || Digits::from_big_int(value, precision, mode),
        buf,
        offset,
        precision,
        decimal_type.into(),
    )
}

/// Encode the unscaled value of a `BigDecimal` as EBCDIC external decimal.
pub fn zone_decimal(
    value: &BigDecimal,
    buf: &mut [u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    zone(
        || Digits::from_decimal(value, precision, mode),
        buf,
        offset,
        precision,
        decimal_type.into(),
    )
}

/// Decode EBCDIC external decimal at `buf[offset..]` into an `i32`.
pub fn unzone_i32(
    buf: &[u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<i32> {
    unzone(buf, offset, precision, mode, decimal_type.into())?.to_i32(mode)
}

/// Decode EBCDIC external decimal at `buf[offset..]` into an `i64`.
pub fn unzone_i64(
    buf: &[u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<i64> {
    unzone(buf, offset, precision, mode, decimal_type.into())?.to_i64(mode)
}

/// Decode EBCDIC external decimal at `buf[offset..]` into a `BigInt`.
pub fn unzone_big_int(
    buf: &[u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<BigInt> {
    Ok(unzone(buf, offset, precision, mode, decimal_type.into())?.to_big_int())
}

/// Decode EBCDIC external decimal at `buf[offset..]` as the unscaled value
/// of a `BigDecimal` with the given `scale`.
pub fn unzone_decimal(
    buf: &[u8],
    offset: usize,
    precision: usize,
    scale: i64,
    mode: OverflowMode,
    decimal_type: impl Into<i32>,
) -> Result<BigDecimal> {
    Ok(unzone(buf, offset, precision, mode, decimal_type.into())?.to_decimal(scale))
}
