//! Generic Conversion Template
//!
//! One orchestration shared by every base pair: split off the sign and the
//! radix point, hand the integer and fractional halves to base-specific
//! strategies, and put the result back together in canonical form.

use entities_numeral_base::numeral::standardize;
use entities_numeral_base::{BaseSpec, ConversionOutcome, NumeralParts, POINT, SIGN};

/// Digits produced by a fractional strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFraction {
    /// Fractional digits in the target alphabet (may be empty)
    pub digits: String,
    /// The expansion was cut before it terminated
    pub truncated: bool,
}

impl ConvertedFraction {
    pub fn exact(digits: String) -> Self {
        Self { digits, truncated: false }
    }
}

/// Convert `number` from one base to another with the given strategies
///
/// `number` must already be standardized and validated against `from`.
/// A purely-zero integer or fractional half never reaches its strategy; it
/// becomes the target's zero character directly.
///
/// # Arguments
/// * `number` - Standardized numeral in the `from` alphabet
/// * `from` - Source base
/// * `to` - Target base
/// * `integer` - Converts unsigned integer digits
/// * `fractional` - Converts fractional digits (those after the point)
///
/// # Returns
/// `Value` or, when the fractional strategy truncated, `Truncated`
pub fn convert_generic<I, F>(
    number: &str,
    from: &BaseSpec,
    to: &BaseSpec,
    integer: I,
    fractional: F,
) -> ConversionOutcome
where
    I: Fn(&str) -> String,
    F: Fn(&str) -> ConvertedFraction,
{
    let from_zero = zero_of(from);
    let to_zero = zero_of(to);
    let parts = NumeralParts::split(number);

    let integer_digits = if is_all(parts.integer, from_zero) {
        to_zero.to_string()
    } else {
        integer(parts.integer)
    };

    let fraction = parts.fraction.map(|digits| {
        if is_all(digits, from_zero) {
            ConvertedFraction::exact(to_zero.to_string())
        } else {
            fractional(digits)
        }
    });

    let mut converted = String::with_capacity(number.len() * 2);
    if parts.negative {
        converted.push(SIGN);
    }
    converted.push_str(&integer_digits);
    let mut truncated = false;
    if let Some(fraction) = fraction {
        converted.push(POINT);
        converted.push_str(&fraction.digits);
        truncated = fraction.truncated;
    }

    // Canonical form also turns a "-0.0" produced by truncation into "0.0"
    ConversionOutcome::from_parts(standardize(&converted, to_zero), truncated)
}

/// Zero character of a numeral spec
///
/// # Panics
/// Panics for a text spec; routing words through the numeral template is a
/// caller contract violation.
pub(crate) fn zero_of(spec: &BaseSpec) -> char {
    match spec.zero_char() {
        Some(zero) => zero,
        None => panic!("base {} has no zero digit", spec.base()),
    }
}

fn is_all(digits: &str, zero: char) -> bool {
    digits.chars().all(|c| c == zero)
}
