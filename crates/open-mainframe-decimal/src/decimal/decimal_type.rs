//! Decimal type codes and their sign conventions.
//!
//! The raw codes are the ones used by existing record layouts; they are
//! accepted at the API boundary and validated into [`DecimalType`].

use serde::{Deserialize, Serialize};

use super::layout::Form;
use super::Result;
use crate::error::DecimalError;

/// Sign convention of an external (EBCDIC) or Unicode decimal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum DecimalType {
    /// EBCDIC digits, sign in the zone of the last digit byte.
    EbcdicSignEmbeddedTrailing = 1,
    /// EBCDIC digits, sign in the zone of the first digit byte.
    EbcdicSignEmbeddedLeading = 2,
    /// EBCDIC digits followed by a separate sign byte.
    EbcdicSignSeparateTrailing = 3,
    /// EBCDIC digits preceded by a separate sign byte.
    EbcdicSignSeparateLeading = 4,
    /// Unicode digits, no sign.
    UnicodeUnsigned = 5,
    /// Unicode digits preceded by a separate sign unit.
    UnicodeSignSeparateLeading = 6,
    /// Unicode digits followed by a separate sign unit.
    UnicodeSignSeparateTrailing = 7,
}

/// Where the sign of a field lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPlacement {
    /// No sign is stored; the value is non-negative.
    None,
    /// Folded into the zone of the first digit.
    EmbeddedLeading,
    /// Folded into the zone of the last digit.
    EmbeddedTrailing,
    /// Dedicated unit before the digits.
    SeparateLeading,
    /// Dedicated unit after the digits.
    SeparateTrailing,
}

impl SignPlacement {
    /// Whether the sign occupies its own byte or code unit.
    pub fn is_separate(self) -> bool {
        matches!(
            self,
            SignPlacement::SeparateLeading | SignPlacement::SeparateTrailing
        )
    }
}

impl DecimalType {
    /// All defined decimal types, in code order.
    pub const ALL: [DecimalType; 7] = [
        DecimalType::EbcdicSignEmbeddedTrailing,
        DecimalType::EbcdicSignEmbeddedLeading,
        DecimalType::EbcdicSignSeparateTrailing,
        DecimalType::EbcdicSignSeparateLeading,
        DecimalType::UnicodeUnsigned,
        DecimalType::UnicodeSignSeparateLeading,
        DecimalType::UnicodeSignSeparateTrailing,
    ];

    /// Look up a decimal type by its raw code.
    ///
    /// # Errors
    /// Returns `DecimalError::InvalidDecimalType` for undefined codes.
    pub fn from_code(code: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or(DecimalError::InvalidDecimalType { code })
    }

    /// Look up a decimal type by raw code, requiring it to belong to `form`.
    pub(crate) fn for_form(code: i32, form: Form) -> Result<Self> {
        match Self::from_code(code) {
            Ok(t) if t.form() == form => Ok(t),
            _ => Err(DecimalError::InvalidDecimalType { code }),
        }
    }

    /// Raw code of this decimal type.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Storage form the type applies to.
    pub fn form(self) -> Form {
        match self {
            DecimalType::EbcdicSignEmbeddedTrailing
            | DecimalType::EbcdicSignEmbeddedLeading
            | DecimalType::EbcdicSignSeparateTrailing
            | DecimalType::EbcdicSignSeparateLeading => Form::External,
            DecimalType::UnicodeUnsigned
            | DecimalType::UnicodeSignSeparateLeading
            | DecimalType::UnicodeSignSeparateTrailing => Form::Unicode,
        }
    }

    /// Sign placement for this type.
    pub fn sign_placement(self) -> SignPlacement {
        match self {
            DecimalType::EbcdicSignEmbeddedTrailing => SignPlacement::EmbeddedTrailing,
            DecimalType::EbcdicSignEmbeddedLeading => SignPlacement::EmbeddedLeading,
            DecimalType::EbcdicSignSeparateTrailing
            | DecimalType::UnicodeSignSeparateTrailing => SignPlacement::SeparateTrailing,
            DecimalType::EbcdicSignSeparateLeading
            | DecimalType::UnicodeSignSeparateLeading => SignPlacement::SeparateLeading,
            DecimalType::UnicodeUnsigned => SignPlacement::None,
        }
    }

    /// Whether negative values can be represented.
    pub fn is_signed(self) -> bool {
        self.sign_placement() != SignPlacement::None
    }

    /// Bytes (EBCDIC) or code units (Unicode) a field of `precision` digits
    /// occupies.
    pub fn required_len(self, precision: usize) -> usize {
        if self.sign_placement().is_separate() {
            precision + 1
        } else {
            precision
        }
    }
}

impl From<DecimalType> for i32 {
    fn from(t: DecimalType) -> Self {
        t.code()
    }
}

impl TryFrom<i32> for DecimalType {
    type Error = DecimalError;

    fn try_from(code: i32) -> Result<Self> {
        DecimalType::from_code(code)
    }
}
