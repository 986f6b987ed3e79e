//! Fixed-point decimal data conversion.
//!
//! This module converts native numbers to and from the three decimal
//! storage forms found in mainframe records:
//!
//! - **Packed Decimal (COMP-3)**: BCD encoding with sign nibble
//! - **External Decimal (DISPLAY)**: EBCDIC zoned digits, embedded or separate sign
//! - **Unicode Decimal (NATIONAL)**: UTF-16 digits, unsigned or separate sign
//!
//! Every operation addresses a caller-owned buffer by `offset` and
//! `precision` (a digit count) and validates in a fixed order: precision
//! and bounds, then decimal type, then value and data.

mod convert;
mod decimal_type;
mod digits;
mod layout;
mod packed;
mod scaled;
mod unicode;
mod zoned;

pub use convert::{packed_to_unicode, packed_to_zoned, unicode_to_packed, zoned_to_packed};
pub use decimal_type::{DecimalType, SignPlacement};
pub use digits::Digits;
pub use layout::{packed_len, required_len, Form};
pub use packed::{
    pack_big_int, pack_decimal, pack_i32, pack_i64, unpack_big_int, unpack_decimal, unpack_i32,
    unpack_i64,
};
pub use scaled::BigDecimal;
pub use unicode::{
    decode_unicode_big_int, decode_unicode_decimal, decode_unicode_i32, decode_unicode_i64,
    encode_unicode_big_int, encode_unicode_decimal, encode_unicode_i32, encode_unicode_i64,
};
pub use zoned::{
    unzone_big_int, unzone_decimal, unzone_i32, unzone_i64, zone_big_int, zone_decimal, zone_i32,
    zone_i64,
};

use serde::{Deserialize, Serialize};

use crate::error::DecimalError;

/// Result type for decimal operations.
pub type Result<T> = std::result::Result<T, DecimalError>;

/// EBCDIC `'+'`, used as a separate positive sign byte.
pub const EBCDIC_PLUS: u8 = 0x4E;
/// EBCDIC `'-'`, used as a separate negative sign byte.
pub const EBCDIC_MINUS: u8 = 0x60;
/// Zone nibble of an unsigned EBCDIC digit byte (`0xF0..=0xF9`).
pub const EBCDIC_DIGIT_ZONE: u8 = 0xF0;
/// Unicode `'+'`.
pub const UNICODE_PLUS: u16 = 0x002B;
/// Unicode `'-'`.
pub const UNICODE_MINUS: u16 = 0x002D;
/// Unicode `'0'`.
pub const UNICODE_ZERO: u16 = 0x0030;

/// Overflow and validation policy for a single conversion.
///
/// Mirrors the legacy `errorChecking` flag: `true` maps to
/// [`OverflowMode::Checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowMode {
    /// Values wider than the precision or the target type raise an error,
    /// and decoded digits and signs are validated.
    Checked,
    /// Encoding keeps the low-order `precision` digits; fixed-width decoding
    /// wraps modulo 2^N. Decoded data is taken as-is.
    #[default]
    Wrapping,
}

impl OverflowMode {
    /// Whether overflow raises instead of truncating or wrapping.
    #[inline]
    pub fn is_checked(self) -> bool {
        self == OverflowMode::Checked
    }
}

impl From<bool> for OverflowMode {
    fn from(error_checking: bool) -> Self {
        if error_checking {
            OverflowMode::Checked
        } else {
            OverflowMode::Wrapping
        }
    }
}

/// Sign of an encoded decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Positive value (sign nibble 0xC); zero is always positive.
    Positive,
    /// Negative value (sign nibble 0xD).
    Negative,
}

impl Sign {
    /// Sign for a value that is negative when `negative` is set.
    #[inline]
    pub fn of(negative: bool) -> Self {
        if negative {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Whether the sign is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    /// Preferred packed decimal sign nibble.
    pub fn to_packed_nibble(self) -> u8 {
        match self {
            Sign::Positive => 0x0C,
            Sign::Negative => 0x0D,
        }
    }

    /// Zone nibble (in the high position) of an embedded-sign digit byte.
    pub fn to_zone(self) -> u8 {
        self.to_packed_nibble() << 4
    }

    /// Separate EBCDIC sign byte.
    pub fn to_ebcdic(self) -> u8 {
        match self {
            Sign::Positive => EBCDIC_PLUS,
            Sign::Negative => EBCDIC_MINUS,
        }
    }

    /// Separate Unicode sign code unit.
    pub fn to_unicode(self) -> u16 {
        match self {
            Sign::Positive => UNICODE_PLUS,
            Sign::Negative => UNICODE_MINUS,
        }
    }

    /// Parse a packed sign nibble or an embedded zone nibble.
    ///
    /// 0xB and 0xD are negative, 0xA, 0xC, 0xE and 0xF positive. Any other
    /// nibble is an error in checked mode and positive otherwise.
    pub fn from_nibble(nibble: u8, mode: OverflowMode) -> Result<Self> {
        match nibble & 0x0F {
            0x0B | 0x0D => Ok(Sign::Negative),
            0x0A | 0x0C | 0x0E | 0x0F => Ok(Sign::Positive),
            other if mode.is_checked() => Err(DecimalError::InvalidSign {
                value: u16::from(other),
            }),
            _ => Ok(Sign::Positive),
        }
    }

    /// Parse a separate EBCDIC sign byte.
    pub fn from_ebcdic(byte: u8, mode: OverflowMode) -> Result<Self> {
        match byte {
            EBCDIC_MINUS => Ok(Sign::Negative),
            EBCDIC_PLUS => Ok(Sign::Positive),
            other if mode.is_checked() => Err(DecimalError::InvalidSign {
                value: u16::from(other),
            }),
            _ => Ok(Sign::Positive),
        }
    }

    /// Parse a separate Unicode sign code unit.
    pub fn from_unicode(unit: u16, mode: OverflowMode) -> Result<Self> {
        match unit {
            UNICODE_MINUS => Ok(Sign::Negative),
            UNICODE_PLUS => Ok(Sign::Positive),
            other if mode.is_checked() => Err(DecimalError::InvalidSign { value: other }),
            _ => Ok(Sign::Positive),
        }
    }
}
