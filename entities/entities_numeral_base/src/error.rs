//! Numeral Base Errors
//!
//! Errors raised while building a [`BaseSpec`](crate::BaseSpec) from a base
//! identifier and per-request options. These are caller contract violations;
//! data-dependent problems with a numeral are reported by validation instead.

use thiserror::Error;

use crate::base_id::BaseId;

/// Base construction and option parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// Base name or radix not recognised
    #[error("unknown base: {0}")]
    UnknownBase(String),

    /// Alphabet segment name not recognised
    #[error("unknown alphabet segment: {0}")]
    UnknownSegment(String),

    /// Language code not recognised
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// Segment order is not a permutation of the base's segments
    #[error("invalid segment order: {0}")]
    InvalidOrder(String),

    /// Replacement characters for base64 are unusable
    #[error("invalid extra characters: {0}")]
    InvalidExtraCharacters(String),

    /// Option given for a base that does not take it
    #[error("option `{option}` is not supported by base {base}")]
    OptionNotSupported { option: &'static str, base: BaseId },

    /// Alphabet assembled with no characters
    #[error("alphabet for base {0} is empty")]
    EmptyAlphabet(BaseId),
}
