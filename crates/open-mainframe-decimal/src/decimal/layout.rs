//! Field extents and argument validation.
//!
//! The bounds check and the actual read/write extent both come from
//! [`required_len`], so they cannot disagree.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::decimal_type::DecimalType;
use super::Result;
use crate::error::DecimalError;

/// Storage form of an encoded decimal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    /// Packed BCD bytes.
    Packed,
    /// EBCDIC zoned bytes.
    External,
    /// UTF-16 code units.
    Unicode,
}

/// Bytes occupied by a packed field of `precision` digits.
///
/// Storage = ceil((precision + 1) / 2); even precisions carry a zero pad
/// nibble in front.
#[inline]
pub fn packed_len(precision: usize) -> usize {
    precision / 2 + 1
}

/// Units (bytes or code units) occupied by a field.
///
/// `decimal_type` is ignored for [`Form::Packed`]. For the zoned forms a
/// missing or mismatched type yields the minimal extent, `precision`.
pub fn required_len(form: Form, decimal_type: Option<DecimalType>, precision: usize) -> usize {
    match (form, decimal_type) {
        (Form::Packed, _) => packed_len(precision),
        (form, Some(t)) if t.form() == form => t.required_len(precision),
        _ => precision,
    }
}

fn check_precision(precision: usize) -> Result<()> {
    if precision == 0 {
        return Err(DecimalError::InvalidPrecision { precision });
    }
    Ok(())
}

fn check_region(capacity: usize, offset: usize, required: usize) -> Result<Range<usize>> {
    match offset.checked_add(required) {
        Some(end) if end <= capacity => Ok(offset..end),
        _ => Err(DecimalError::OutOfBounds {
            offset,
            required,
            capacity,
        }),
    }
}

/// Validate a packed field and return its extent.
pub(crate) fn packed_region(
    capacity: usize,
    offset: usize,
    precision: usize,
) -> Result<Range<usize>> {
    check_precision(precision)?;
    check_region(capacity, offset, packed_len(precision))
}

/// Validate a zoned (external or Unicode) field and resolve its type.
///
/// Bounds are checked before the type code, using the minimal extent when
/// the code is not valid for `form`.
pub(crate) fn typed_region(
    form: Form,
    capacity: usize,
    offset: usize,
    precision: usize,
    code: i32,
) -> Result<(Range<usize>, DecimalType)> {
    check_precision(precision)?;
    let decimal_type = DecimalType::for_form(code, form);
    let region = check_region(
        capacity,
        offset,
        required_len(form, decimal_type.as_ref().ok().copied(), precision),
    )?;
    Ok((region, decimal_type?))
}
