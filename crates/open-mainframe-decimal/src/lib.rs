//! Fixed-point decimal data conversion for OpenMainframe.
//!
//! This crate converts native numbers to and from the decimal field
//! formats found in mainframe records, reading and writing caller-owned
//! buffers in place.
//!
//! # Features
//!
//! - **Packed Decimal**: COMP-3 BCD encoding with a trailing sign nibble
//! - **External Decimal**: EBCDIC zoned digits with embedded or separate sign
//! - **Unicode Decimal**: UTF-16 digits, unsigned or with a separate sign
//! - **Native types**: `i32`, `i64`, `BigInt` and the scaled [`BigDecimal`]
//! - **Overflow policy**: raise, or truncate/wrap like the legacy runtime
//!
//! # Example
//!
//! ```rust
//! use open_mainframe_decimal::{
//!     pack_i64, unpack_i64, unzone_decimal, zone_decimal, BigDecimal, DecimalType, OverflowMode,
//! };
//!
//! // Packed decimal
//! let mut packed = [0u8; 3];
//! pack_i64(-12345, &mut packed, 0, 5, OverflowMode::Checked).unwrap();
//! assert_eq!(packed, [0x12, 0x34, 0x5D]);
//! assert_eq!(unpack_i64(&packed, 0, 5, OverflowMode::Checked).unwrap(), -12345);
//!
//! // External decimal with a separate leading sign; the scale travels
//! // alongside the field.
//! let value: BigDecimal = "98.76".parse().unwrap();
//! let mut zoned = [0u8; 5];
//! let t = DecimalType::EbcdicSignSeparateLeading;
//! zone_decimal(&value, &mut zoned, 0, 4, OverflowMode::Checked, t).unwrap();
//! assert_eq!(zoned, [0x4E, 0xF9, 0xF8, 0xF7, 0xF6]);
//! let back = unzone_decimal(&zoned, 0, 4, 2, OverflowMode::Checked, t).unwrap();
//! assert_eq!(back, value);
//! ```

pub mod decimal;
pub mod error;

// Re-export commonly used types at crate root
pub use decimal::{
    decode_unicode_big_int, decode_unicode_decimal, decode_unicode_i32, decode_unicode_i64,
    encode_unicode_big_int, encode_unicode_decimal, encode_unicode_i32, encode_unicode_i64,
    pack_big_int, pack_decimal, pack_i32, pack_i64, packed_len, packed_to_unicode,
    packed_to_zoned, required_len, unicode_to_packed, unpack_big_int, unpack_decimal, unpack_i32,
    unpack_i64, unzone_big_int, unzone_decimal, unzone_i32, unzone_i64, zone_big_int,
    zone_decimal, zone_i32, zone_i64, zoned_to_packed, BigDecimal, DecimalType, Digits, Form,
    OverflowMode, Sign, SignPlacement,
};
pub use error::DecimalError;

/// Result type for decimal data operations.
pub type Result<T> = std::result::Result<T, DecimalError>;
