//! Base Identifiers
//!
//! Names the numeral systems the codec understands, plus `Text` for
//! natural-language numbers.

use std::fmt;
use std::str::FromStr;

use crate::error::NumeralError;

/// Supported numeral systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseId {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Base62,
    Base64,
    /// Numbers written as words ("one hundred", "cien")
    Text,
}

impl BaseId {
    /// All identifiers, in radix order with text last
    pub const ALL: [BaseId; 7] = [
        BaseId::Binary,
        BaseId::Octal,
        BaseId::Decimal,
        BaseId::Hexadecimal,
        BaseId::Base62,
        BaseId::Base64,
        BaseId::Text,
    ];

    /// Number of digit symbols, `None` for text
    pub fn radix(self) -> Option<u32> {
        match self {
            BaseId::Binary => Some(2),
            BaseId::Octal => Some(8),
            BaseId::Decimal => Some(10),
            BaseId::Hexadecimal => Some(16),
            BaseId::Base62 => Some(62),
            BaseId::Base64 => Some(64),
            BaseId::Text => None,
        }
    }

    /// Bits encoded by one digit for the bases that group directly to binary
    ///
    /// Base64 is deliberately absent: its alphabet can be reordered per
    /// request, so it always goes through the decimal hub.
    pub fn bits_per_digit(self) -> Option<usize> {
        match self {
            BaseId::Binary => Some(1),
            BaseId::Octal => Some(3),
            BaseId::Hexadecimal => Some(4),
            _ => None,
        }
    }

    /// Binary, octal and hexadecimal
    pub fn is_power_of_two(self) -> bool {
        self.bits_per_digit().is_some()
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            BaseId::Binary => "binary",
            BaseId::Octal => "octal",
            BaseId::Decimal => "decimal",
            BaseId::Hexadecimal => "hexadecimal",
            BaseId::Base62 => "base62",
            BaseId::Base64 => "base64",
            BaseId::Text => "text",
        }
    }
}

impl fmt::Display for BaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BaseId {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "2" => Ok(BaseId::Binary),
            "octal" | "oct" | "8" => Ok(BaseId::Octal),
            "decimal" | "dec" | "10" => Ok(BaseId::Decimal),
            "hexadecimal" | "hex" | "16" => Ok(BaseId::Hexadecimal),
            "base62" | "b62" | "62" => Ok(BaseId::Base62),
            "base64" | "b64" | "64" => Ok(BaseId::Base64),
            "text" | "words" => Ok(BaseId::Text),
            _ => Err(NumeralError::UnknownBase(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("hex".parse::<BaseId>(), Ok(BaseId::Hexadecimal));
        assert_eq!("Base62".parse::<BaseId>(), Ok(BaseId::Base62));
        assert_eq!("64".parse::<BaseId>(), Ok(BaseId::Base64));
        assert_eq!("words".parse::<BaseId>(), Ok(BaseId::Text));
        assert!("base7".parse::<BaseId>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for base in BaseId::ALL {
            assert_eq!(base.to_string().parse::<BaseId>(), Ok(base));
        }
    }

    #[test]
    fn test_power_of_two_bases() {
        assert!(BaseId::Binary.is_power_of_two());
        assert!(BaseId::Octal.is_power_of_two());
        assert!(BaseId::Hexadecimal.is_power_of_two());
        assert!(!BaseId::Decimal.is_power_of_two());
        assert!(!BaseId::Base64.is_power_of_two());
        assert_eq!(BaseId::Text.radix(), None);
    }
}
