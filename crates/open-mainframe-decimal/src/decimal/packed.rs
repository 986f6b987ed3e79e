//! Packed Decimal (COMP-3) encoding and decoding.
//!
//! Packed decimal format stores two decimal digits per byte, with the
//! rightmost nibble containing the sign. This is the most common format
//! for COBOL COMP-3 (packed decimal) data items.
//!
//! # Format
//!
//! For a field of precision `p`:
//! - Each pair of digits occupies one byte
//! - The sign nibble is in the rightmost position (0xC positive, 0xD negative)
//! - Storage size = `p / 2 + 1` bytes
//!
//! Example: +12345 with precision 5
//! - Layout: d1|d2 d3|d4 d5|sign
//! - Binary: 0x12 0x34 0x5C (3 bytes)
//!
//! Example: +123456 with precision 6
//! - Layout: 0|d1 d2|d3 d4|d5 d6|sign (leading zero pad for even digits)
//! - Binary: 0x01 0x23 0x45 0x6C (4 bytes)

use std::ops::Range;

use num_bigint::BigInt;

use super::digits::Digits;
use super::layout::packed_region;
use super::scaled::BigDecimal;
use super::{OverflowMode, Result, Sign};
use crate::error::DecimalError;

/// Nibble index of the first digit: 1 for even precision (pad nibble), else 0.
fn first_nibble(field_len: usize, precision: usize) -> usize {
    field_len * 2 - 1 - precision
}

/// Write `digits` into a field of exactly `packed_len(digits.precision())` bytes.
pub(crate) fn write_field(digits: &Digits, field: &mut [u8]) {
    field.fill(0);
    let first = first_nibble(field.len(), digits.precision());
    for (i, &d) in digits.digits().iter().enumerate() {
        let nibble = first + i;
        let byte = &mut field[nibble / 2];
        if nibble % 2 == 0 {
            *byte |= d << 4;
        } else {
            *byte |= d & 0x0F;
        }
    }
    let last = field.len() - 1;
    field[last] |= digits.sign().to_packed_nibble();
}

/// Read the digits and sign of a validated packed region.
///
/// In checked mode digit nibbles above 9 and sign nibbles below 0xA are
/// rejected. The pad nibble of an even precision is ignored.
pub(crate) fn read_field(
    buf: &[u8],
    region: Range<usize>,
    precision: usize,
    mode: OverflowMode,
) -> Result<Digits> {
    let field = &buf[region.clone()];
    let first = first_nibble(field.len(), precision);

    let mut digits = Vec::with_capacity(precision);
    for nibble in first..first + precision {
        let byte = field[nibble / 2];
        let d = if nibble % 2 == 0 { byte >> 4 } else { byte & 0x0F };
        if mode.is_checked() && d > 9 {
            return Err(DecimalError::InvalidDigit {
                position: region.start + nibble / 2,
                value: u16::from(d),
            });
        }
        digits.push(d);
    }

    let sign = Sign::from_nibble(field[field.len() - 1], mode)?;
    Ok(Digits::new(sign, digits))
}

fn unpack(buf: &[u8], offset: usize, precision: usize, mode: OverflowMode) -> Result<Digits> {
    let region = packed_region(buf.len(), offset, precision)?;
    read_field(buf, region, precision, mode)
}

/// Encode an `i32` as packed decimal at `buf[offset..]`.
///
/// # Errors
/// `InvalidPrecision`, `OutOfBounds`, or in checked mode
/// `PrecisionOverflow` when the value has more than `precision` digits.
pub fn pack_i32(
    value: i32,
    buf: &mut [u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
) -> Result<()> {
    let region = packed_region(buf.len(), offset, precision)?;
    write_field(&Digits::from_i32(value, precision, mode)?, &mut buf[region]);
    Ok(())
}

/// Encode an `i64` as packed decimal at `buf[offset..]`.
pub fn pack_i64(
    value: i64,
    buf: &mut [u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
) -> Result<()> {
    let region = packed_region(buf.len(), offset, precision)?;
    write_field(&Digits::from_i64(value, precision, mode)?, &mut buf[region]);
    Ok(())
}

/// Encode a `BigInt` as packed decimal at `buf[offset..]`.
pub fn pack_big_int(
    value: &BigInt,
    buf: &mut [u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
) -> Result<()> {
    let region = packed_region(buf.len(), offset, precision)?;
    write_field(&Digits::from_big_int(value, precision, mode)?, &mut buf[region]);
    Ok(())
}

/// Encode the unscaled value of a `BigDecimal` as packed decimal.
///
/// The scale is not stored; pass it back to [`unpack_decimal`].
pub fn pack_decimal(
    value: &BigDecimal,
    buf: &mut [u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
) -> Result<()> {
    let region = packed_region(buf.len(), offset, precision)?;
    write_field(&Digits::from_decimal(value, precision, mode)?, &mut buf[region]);
    Ok(())
}

/// Decode packed decimal at `buf[offset..]` into an `i32`.
///
/// # Errors
/// In checked mode `RangeOverflow` when the value is outside `i32`, and
/// `InvalidDigit`/`InvalidSign` for malformed nibbles. Otherwise the value
/// wraps modulo 2^32.
pub fn unpack_i32(buf: &[u8], offset: usize, precision: usize, mode: OverflowMode) -> Result<i32> {
    unpack(buf, offset, precision, mode)?.to_i32(mode)
}

/// Decode packed decimal at `buf[offset..]` into an `i64`.
pub fn unpack_i64(buf: &[u8], offset: usize, precision: usize, mode: OverflowMode) -> Result<i64> {
    unpack(buf, offset, precision, mode)?.to_i64(mode)
}

/// Decode packed decimal at `buf[offset..]` into a `BigInt`.
pub fn unpack_big_int(
    buf: &[u8],
    offset: usize,
    precision: usize,
    mode: OverflowMode,
) -> Result<BigInt> {
    Ok(unpack(buf, offset, precision, mode)?.to_big_int())
}

/// Decode packed decimal at `buf[offset..]` as the unscaled value of a
/// `BigDecimal` with the given `scale`.
pub fn unpack_decimal(
    buf: &[u8],
    offset: usize,
    precision: usize,
    scale: i64,
    mode: OverflowMode,
) -> Result<BigDecimal> {
    Ok(unpack(buf, offset, precision, mode)?.to_decimal(scale))
}
