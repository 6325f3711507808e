//! Conversion Outcomes
//!
//! Every data-dependent result of a conversion is a value of
//! [`ConversionOutcome`]; nothing in the codec panics or errors on malformed
//! numbers or words. The `Display` form reproduces the plain-string protocol
//! that request layers expect (`"NTL"`, `"NaN"`, trailing `"..."`).

use std::fmt;

/// Marker appended to a value whose fractional expansion was cut short
pub const TRUNCATION_MARKER: &str = "...";
/// Plain-string form of [`ConversionOutcome::NumberTooLong`]
pub const NUMBER_TOO_LONG: &str = "NTL";
/// Plain-string form of [`ConversionOutcome::NotANumber`]
pub const NOT_A_NUMBER: &str = "NaN";

/// Kind of warning attached to a non-plain outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// A non-terminating fractional expansion was cut at 25 digits
    PrecisionTruncated,
    /// The integer part has more digits than the language can name
    MagnitudeExceeded,
    /// The words could not be read as a number
    GrammarRejected,
}

/// Result of a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Exact, canonical result
    Value(String),
    /// Result whose fraction was truncated; holds the value without the marker
    Truncated(String),
    /// Words generation exceeded the supported magnitude
    NumberTooLong,
    /// Words parsing rejected the input
    NotANumber,
}

impl ConversionOutcome {
    /// Wrap `value`, marking it truncated when `truncated` is set
    pub fn from_parts(value: String, truncated: bool) -> Self {
        if truncated {
            ConversionOutcome::Truncated(value)
        } else {
            ConversionOutcome::Value(value)
        }
    }

    /// The converted value, without any truncation marker
    pub fn value(&self) -> Option<&str> {
        match self {
            ConversionOutcome::Value(value) | ConversionOutcome::Truncated(value) => Some(value),
            _ => None,
        }
    }

    /// Consume the outcome, keeping the value
    pub fn into_value(self) -> Option<String> {
        match self {
            ConversionOutcome::Value(value) | ConversionOutcome::Truncated(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, ConversionOutcome::Truncated(_))
    }

    pub fn warning(&self) -> Option<WarningKind> {
        match self {
            ConversionOutcome::Value(_) => None,
            ConversionOutcome::Truncated(_) => Some(WarningKind::PrecisionTruncated),
            ConversionOutcome::NumberTooLong => Some(WarningKind::MagnitudeExceeded),
            ConversionOutcome::NotANumber => Some(WarningKind::GrammarRejected),
        }
    }

    /// Apply `f` to the value of a successful outcome, keeping its truncation
    pub fn map_value<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            ConversionOutcome::Value(value) => ConversionOutcome::Value(f(value)),
            ConversionOutcome::Truncated(value) => ConversionOutcome::Truncated(f(value)),
            other => other,
        }
    }

    /// Chain a further conversion step; truncation is sticky
    pub fn and_then<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> ConversionOutcome,
    {
        match self {
            ConversionOutcome::Value(value) => f(value),
            ConversionOutcome::Truncated(value) => match f(value) {
                ConversionOutcome::Value(next) => ConversionOutcome::Truncated(next),
                next => next,
            },
            other => other,
        }
    }
}

impl fmt::Display for ConversionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionOutcome::Value(value) => f.write_str(value),
            ConversionOutcome::Truncated(value) => write!(f, "{}{}", value, TRUNCATION_MARKER),
            ConversionOutcome::NumberTooLong => f.write_str(NUMBER_TOO_LONG),
            ConversionOutcome::NotANumber => f.write_str(NOT_A_NUMBER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_string_protocol() {
        assert_eq!(ConversionOutcome::Value("10".into()).to_string(), "10");
        assert_eq!(ConversionOutcome::Truncated("0.3".into()).to_string(), "0.3...");
        assert_eq!(ConversionOutcome::NumberTooLong.to_string(), "NTL");
        assert_eq!(ConversionOutcome::NotANumber.to_string(), "NaN");
    }

    #[test]
    fn test_truncation_is_sticky() {
        let outcome = ConversionOutcome::Truncated("0.1".into())
            .and_then(|v| ConversionOutcome::Value(format!("{}9", v)));
        assert_eq!(outcome, ConversionOutcome::Truncated("0.19".into()));
        assert_eq!(outcome.warning(), Some(WarningKind::PrecisionTruncated));
        assert_eq!(outcome.value(), Some("0.19"));
    }

    #[test]
    fn test_failures_short_circuit() {
        let outcome = ConversionOutcome::NotANumber.and_then(|_| ConversionOutcome::Value("1".into()));
        assert_eq!(outcome, ConversionOutcome::NotANumber);
        assert_eq!(outcome.into_value(), None);
    }
}
