//! Alphabet Assembly
//!
//! Base62 and Base64 alphabets are assembled per request from segments
//! (numbers, uppercase letters, lowercase letters and, for Base64, two extra
//! symbols) in a caller-chosen sequence. The fixed alphabets of the smaller
//! bases live here too.

use std::fmt;
use std::str::FromStr;

use crate::base_id::BaseId;
use crate::error::NumeralError;

pub const BINARY_DIGITS: &str = "01";
pub const OCTAL_DIGITS: &str = "01234567";
pub const DECIMAL_DIGITS: &str = "0123456789";
pub const HEXADECIMAL_DIGITS: &str = "0123456789ABCDEF";

const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Default Base64 symbols occupying the extra segment
pub const DEFAULT_EXTRA_CHARACTERS: [char; 2] = ['+', '/'];

/// A contiguous block of characters inside a Base62/Base64 alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Numbers,
    Uppercase,
    Lowercase,
    Extra,
}

impl Segment {
    /// Default sequence for Base62
    pub const BASE62_DEFAULT: [Segment; 3] = [Segment::Numbers, Segment::Uppercase, Segment::Lowercase];

    /// Default sequence for Base64
    pub const BASE64_DEFAULT: [Segment; 4] = [
        Segment::Numbers,
        Segment::Uppercase,
        Segment::Lowercase,
        Segment::Extra,
    ];

    fn characters(self, extra: [char; 2]) -> Vec<char> {
        match self {
            Segment::Numbers => DECIMAL_DIGITS.chars().collect(),
            Segment::Uppercase => UPPERCASE_LETTERS.chars().collect(),
            Segment::Lowercase => LOWERCASE_LETTERS.chars().collect(),
            Segment::Extra => extra.to_vec(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Segment::Numbers => "numbers",
            Segment::Uppercase => "uppercase",
            Segment::Lowercase => "lowercase",
            Segment::Extra => "extra",
        })
    }
}

impl FromStr for Segment {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0-9" => return Ok(Segment::Numbers),
            "A-Z" => return Ok(Segment::Uppercase),
            "a-z" => return Ok(Segment::Lowercase),
            _ => {}
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "numbers" | "numeral" | "numerals" | "digits" => Ok(Segment::Numbers),
            "uppercase" | "upper" => Ok(Segment::Uppercase),
            "lowercase" | "lower" => Ok(Segment::Lowercase),
            "extra" | "symbols" => Ok(Segment::Extra),
            _ => Err(NumeralError::UnknownSegment(s.to_string())),
        }
    }
}

/// Parse a segment order such as `"lowercase,numbers,uppercase"`
///
/// Segments may be separated by commas, pipes or whitespace.
pub fn parse_order(text: &str) -> Result<Vec<Segment>, NumeralError> {
    text.split(|c: char| c == ',' || c == '|' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse::<Segment>)
        .collect()
}

/// Parse a pair of replacement characters such as `"*_"`
pub fn parse_extra_characters(text: &str) -> Result<[char; 2], NumeralError> {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    match chars.as_slice() {
        [first, second] => Ok([*first, *second]),
        _ => Err(NumeralError::InvalidExtraCharacters(format!(
            "expected exactly two characters, got {:?}",
            text
        ))),
    }
}

/// Check a replacement pair for the Base64 extra segment
///
/// Both characters must be distinct and may not collide with the letter or
/// number segments, whitespace, or the sign and radix point.
pub fn check_extra_characters(extra: [char; 2]) -> Result<(), NumeralError> {
    if extra[0] == extra[1] {
        return Err(NumeralError::InvalidExtraCharacters(format!(
            "characters must differ, got {:?}",
            extra
        )));
    }
    for c in extra {
        if c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-' || c == '.' {
            return Err(NumeralError::InvalidExtraCharacters(format!(
                "{:?} is reserved",
                c
            )));
        }
    }
    Ok(())
}

/// Resolve the segment sequence for a base, applying defaults
///
/// Base64 orders that leave out the extra segment get it appended.
pub fn resolve_order(base: BaseId, order: Option<&[Segment]>) -> Result<Vec<Segment>, NumeralError> {
    let allowed: &[Segment] = match base {
        BaseId::Base62 => &Segment::BASE62_DEFAULT,
        BaseId::Base64 => &Segment::BASE64_DEFAULT,
        _ => return Err(NumeralError::OptionNotSupported { option: "order", base }),
    };
    let Some(order) = order else {
        return Ok(allowed.to_vec());
    };

    let mut resolved = Vec::with_capacity(allowed.len());
    for &segment in order {
        if !allowed.contains(&segment) {
            return Err(NumeralError::InvalidOrder(format!(
                "segment `{}` is not part of {}",
                segment, base
            )));
        }
        if resolved.contains(&segment) {
            return Err(NumeralError::InvalidOrder(format!("segment `{}` repeated", segment)));
        }
        resolved.push(segment);
    }
    if base == BaseId::Base64 && !resolved.contains(&Segment::Extra) {
        resolved.push(Segment::Extra);
    }
    if resolved.len() != allowed.len() {
        return Err(NumeralError::InvalidOrder(format!(
            "expected a permutation of {} segments, got {}",
            allowed.len(),
            resolved.len()
        )));
    }
    Ok(resolved)
}

/// Assemble an alphabet from a resolved segment sequence
pub fn assemble(order: &[Segment], extra: [char; 2]) -> Vec<char> {
    order
        .iter()
        .flat_map(|segment| segment.characters(extra))
        .collect()
}
