//! Direct conversion between packed and zoned forms.
//!
//! Digits are copied field to field without passing through a native
//! integer, so any precision is supported. The source field is always
//! validated; there is no overflow because both sides share one precision.

use super::digits::Digits;
use super::layout::{packed_region, typed_region, Form};
use super::{packed, unicode, zoned, OverflowMode, Result};

/// Convert a packed field to EBCDIC external decimal.
///
/// # Errors
/// `InvalidPrecision`, `OutOfBounds` (source first, then target),
/// `InvalidDecimalType`, or `InvalidDigit`/`InvalidSign` for a malformed
/// packed source.
pub fn packed_to_zoned(
    packed: &[u8],
    packed_offset: usize,
    zoned: &mut [u8],
    zoned_offset: usize,
    precision: usize,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    let source = packed_region(packed.len(), packed_offset, precision)?;
    let (target, decimal_type) = typed_region(
        Form::External,
        zoned.len(),
        zoned_offset,
        precision,
        decimal_type.into(),
    )?;
    let digits = packed::read_field(packed, source, precision, OverflowMode::Checked)?;
    zoned::write_field(&digits, decimal_type, &mut zoned[target]);
    Ok(())
}

/// Convert an EBCDIC external decimal field to packed decimal.
pub fn zoned_to_packed(
    zoned: &[u8],
    zoned_offset: usize,
    packed: &mut [u8],
    packed_offset: usize,
    precision: usize,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    let (source, decimal_type) = typed_region(
        Form::External,
        zoned.len(),
        zoned_offset,
        precision,
        decimal_type.into(),
    )?;
    let target = packed_region(packed.len(), packed_offset, precision)?;
    let digits = zoned::read_field(zoned, source, decimal_type, precision, OverflowMode::Checked)?;
    packed::write_field(&digits, &mut packed[target]);
    Ok(())
}

/// Convert a packed field to Unicode decimal.
///
/// A negative packed value cannot be written as
/// [`UnicodeUnsigned`](super::DecimalType::UnicodeUnsigned) and raises
/// `NegativeUnsigned`.
pub fn packed_to_unicode(
    packed: &[u8],
    packed_offset: usize,
    unicode: &mut [u16],
    unicode_offset: usize,
    precision: usize,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    let source = packed_region(packed.len(), packed_offset, precision)?;
    let (target, decimal_type) = typed_region(
        Form::Unicode,
        unicode.len(),
        unicode_offset,
        precision,
        decimal_type.into(),
    )?;
    let digits: Digits = packed::read_field(packed, source, precision, OverflowMode::Checked)?;
    unicode::check_signed(&digits, decimal_type)?;
    unicode::write_field(&digits, decimal_type, &mut unicode[target]);
    Ok(())
}

/// Convert a Unicode decimal field to packed decimal.
pub fn unicode_to_packed(
    unicode: &[u16],
    unicode_offset: usize,
    packed: &mut [u8],
    packed_offset: usize,
    precision: usize,
    decimal_type: impl Into<i32>,
) -> Result<()> {
    let (source, decimal_type) = typed_region(
        Form::Unicode,
        unicode.len(),
        unicode_offset,
        precision,
        decimal_type.into(),
    )?;
    let target = packed_region(packed.len(), packed_offset, precision)?;
    let digits =
        unicode::read_field(unicode, source, decimal_type, precision, OverflowMode::Checked)?;
    packed::write_field(&digits, &mut packed[target]);
    Ok(())
}
