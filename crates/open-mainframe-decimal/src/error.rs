//! Decimal data conversion error types.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by the decimal data codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DecimalError {
    /// The encoded field does not fit in the caller's buffer.
    #[error("field of {required} units at offset {offset} exceeds buffer of {capacity} units")]
    #[diagnostic(code(decimal::out_of_bounds))]
    OutOfBounds {
        /// Start index of the field.
        offset: usize,
        /// Units (bytes or code units) the field occupies.
        required: usize,
        /// Length of the buffer.
        capacity: usize,
    },

    /// Precision must be at least one digit.
    #[error("invalid precision {precision}: must be at least 1")]
    #[diagnostic(code(decimal::invalid_precision))]
    InvalidPrecision {
        /// The rejected precision.
        precision: usize,
    },

    /// The decimal type code is not defined for the requested form.
    #[error("invalid decimal type code {code}")]
    #[diagnostic(code(decimal::invalid_decimal_type))]
    InvalidDecimalType {
        /// The rejected raw code.
        code: i32,
    },

    /// A negative value cannot be stored in an unsigned representation.
    #[error("negative value cannot be encoded as an unsigned decimal")]
    #[diagnostic(code(decimal::negative_unsigned))]
    NegativeUnsigned,

    /// The value has more digits than the field precision.
    #[error("value requires {digits} digits but precision is {precision}")]
    #[diagnostic(code(decimal::precision_overflow))]
    PrecisionOverflow {
        /// Significant digits in the value.
        digits: usize,
        /// Field precision.
        precision: usize,
    },

    /// The decoded value is outside the range of the target type.
    #[error("decoded value does not fit in {target}")]
    #[diagnostic(code(decimal::range_overflow))]
    RangeOverflow {
        /// Name of the target type.
        target: &'static str,
    },

    /// The scale is not representable by the target decimal type.
    #[error("scale {scale} is outside the range of the target decimal type")]
    #[diagnostic(code(decimal::scale_out_of_range))]
    ScaleOutOfRange {
        /// The rejected scale.
        scale: i64,
    },

    /// A decimal literal could not be parsed.
    #[error("invalid decimal literal {literal:?}")]
    #[diagnostic(code(decimal::invalid_literal))]
    InvalidLiteral {
        /// The rejected text.
        literal: String,
    },

    /// An encoded digit is not a valid decimal digit.
    #[error("invalid digit 0x{value:X} at position {position}")]
    #[diagnostic(code(decimal::invalid_digit))]
    InvalidDigit {
        /// Buffer index of the offending unit.
        position: usize,
        /// The raw unit value.
        value: u16,
    },

    /// An encoded sign is not valid for the decimal type.
    #[error("invalid sign code 0x{value:X}")]
    #[diagnostic(code(decimal::invalid_sign))]
    InvalidSign {
        /// The raw sign nibble, byte or code unit.
        value: u16,
    },
}

impl DecimalError {
    /// Whether this is an arithmetic overflow (as opposed to a bounds,
    /// argument or data error).
    pub fn is_overflow(&self) -> bool {
        matches!(
            self,
            DecimalError::PrecisionOverflow { .. }
                | DecimalError::RangeOverflow { .. }
                | DecimalError::ScaleOutOfRange { .. }
        )
    }
}
