//! Named byte/word ordering conventions for register-encoded values
//!
//! Field devices disagree on how a 32-bit or 64-bit value is spread across
//! consecutive 16-bit registers. The convention names use letters as labels
//! for the big-endian byte positions of the packed register stream:
//! `A` is the high byte of the first register, `B` its low byte, and so on.
//!
//! For registers `[0x1234, 0x5678]` the packed stream is `[0x12, 0x34, 0x56, 0x78]`,
//! i.e. `A = 0x12`, `B = 0x34`, `C = 0x56`, `D = 0x78`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Group width of a convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConventionFamily {
    /// 4 bytes (2 registers) per value
    Word32,
    /// 8 bytes (4 registers) per value
    Word64,
}

impl ConventionFamily {
    /// Number of bytes that encode one value
    #[inline]
    pub fn group_size(&self) -> usize {
        match self {
            Self::Word32 => 4,
            Self::Word64 => 8,
        }
    }

    /// Number of 16-bit registers that encode one value
    #[inline]
    pub fn registers_per_value(&self) -> usize {
        self.group_size() / 2
    }
}

/// Closed set of supported ordering conventions
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OrderingConvention {
    /// Most significant register first, most significant byte first
    ABCD,
    CDAB,
    BADC,
    DCBA,
    /// 64-bit big-endian: most significant register first
    ABCDEFGH,
    GHEFCDAB,
    BADCFEHG,
    HGFEDCBA,
}

impl OrderingConvention {
    /// Default convention for 32-bit values
    pub const DEFAULT_32: Self = Self::ABCD;

    /// Default convention for 64-bit values
    pub const DEFAULT_64: Self = Self::ABCDEFGH;

    /// Every convention, 4-byte family first
    pub const ALL: [Self; 8] = [
        Self::ABCD,
        Self::CDAB,
        Self::BADC,
        Self::DCBA,
        Self::ABCDEFGH,
        Self::GHEFCDAB,
        Self::BADCFEHG,
        Self::HGFEDCBA,
    ];

    pub fn family(&self) -> ConventionFamily {
        match self {
            Self::ABCD | Self::CDAB | Self::BADC | Self::DCBA => ConventionFamily::Word32,
            Self::ABCDEFGH | Self::GHEFCDAB | Self::BADCFEHG | Self::HGFEDCBA => {
                ConventionFamily::Word64
            },
        }
    }

    /// Number of bytes per decoded value (4 or 8)
    #[inline]
    pub fn group_size(&self) -> usize {
        self.family().group_size()
    }

    /// Letter name, e.g. `"CDAB"`
    pub fn letters(&self) -> &'static str {
        match self {
            Self::ABCD => "ABCD",
            Self::CDAB => "CDAB",
            Self::BADC => "BADC",
            Self::DCBA => "DCBA",
            Self::ABCDEFGH => "ABCDEFGH",
            Self::GHEFCDAB => "GHEFCDAB",
            Self::BADCFEHG => "BADCFEHG",
            Self::HGFEDCBA => "HGFEDCBA",
        }
    }

    /// Check if this convention belongs to the 8-byte family
    #[inline]
    pub fn is_64bit(&self) -> bool {
        self.family() == ConventionFamily::Word64
    }
}

impl FromStr for OrderingConvention {
    type Err = CodecError;

    /// Parse a convention name.
    ///
    /// Case-insensitive, `-` and `_` separators are ignored:
    /// - "ABCD", "AB-CD", "BE", "BIG_ENDIAN" → ABCD
    /// - "DCBA", "LE", "LITTLE_ENDIAN" → DCBA
    /// - "ABCDEFGH", "BE64" → ABCDEFGH
    /// - "HGFEDCBA", "LE64" → HGFEDCBA
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            // 32-bit patterns
            "ABCD" | "BE" | "BIGENDIAN" => Ok(Self::ABCD),
            "CDAB" => Ok(Self::CDAB),
            "BADC" => Ok(Self::BADC),
            "DCBA" | "LE" | "LITTLEENDIAN" => Ok(Self::DCBA),

            // 64-bit patterns
            "ABCDEFGH" | "BE64" => Ok(Self::ABCDEFGH),
            "GHEFCDAB" => Ok(Self::GHEFCDAB),
            "BADCFEHG" => Ok(Self::BADCFEHG),
            "HGFEDCBA" | "LE64" => Ok(Self::HGFEDCBA),

            _ => Err(CodecError::unknown_convention(s)),
        }
    }
}

impl TryFrom<String> for OrderingConvention {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<OrderingConvention> for String {
    fn from(value: OrderingConvention) -> Self {
        value.letters().to_string()
    }
}

impl fmt::Display for OrderingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letters())
    }
}
