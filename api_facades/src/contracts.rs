//! Boundary Helpers
//!
//! The pieces of base logic request layers need on their own: separator
//! handling and zero-preservation work on standardized strings and need to
//! know which character is zero in a possibly reordered alphabet.

use entities_numeral_base::{BaseId, BaseOptions, BaseSpec};

use crate::error::ConversionError;

pub use entities_numeral_base::remove_zeros;

/// Canonical form of `value` in `base`
///
/// Text is lowercased with single spaces; numerals lose superfluous zeros and
/// whitespace. The result is not validated.
pub fn standardize(value: &str, base: BaseId, options: &BaseOptions) -> Result<String, ConversionError> {
    Ok(BaseSpec::new(base, options)?.standardize(value))
}

/// Whether `value`, once standardized, is a well-formed numeral of `base`
pub fn validate(value: &str, base: BaseId, options: &BaseOptions) -> Result<bool, ConversionError> {
    let spec = BaseSpec::new(base, options)?;
    Ok(spec.validate(&spec.standardize(value)))
}

/// Zero digit of `base` under `options`
///
/// # Returns
/// * `Ok(char)` - First character of the assembled alphabet
/// * `Err(ConversionError::NoZeroCharacter)` - For text
pub fn zero_char(base: BaseId, options: &BaseOptions) -> Result<char, ConversionError> {
    BaseSpec::new(base, options)?
        .zero_char()
        .ok_or(ConversionError::NoZeroCharacter(base))
}
