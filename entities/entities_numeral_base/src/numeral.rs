//! Numeral Strings
//!
//! Standardization, structural validation and zero trimming for numerals of
//! the form `[-]? digits [. digits]`. Every routine is parameterised by the
//! base's own zero character; nothing here assumes the zero digit is `'0'`,
//! since a reordered Base62/Base64 alphabet may start with a letter or symbol.

/// Sign character
pub const SIGN: char = '-';
/// Radix point character
pub const POINT: char = '.';

/// A numeral split into sign, integer digits and optional fractional digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralParts<'a> {
    pub negative: bool,
    pub integer: &'a str,
    pub fraction: Option<&'a str>,
}

impl<'a> NumeralParts<'a> {
    /// Split at the leading sign and the first radix point
    pub fn split(value: &'a str) -> Self {
        let (negative, unsigned) = match value.strip_prefix(SIGN) {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        match unsigned.split_once(POINT) {
            Some((integer, fraction)) => Self { negative, integer, fraction: Some(fraction) },
            None => Self { negative, integer: unsigned, fraction: None },
        }
    }
}

/// Normalise a numeral string
///
/// - trims and removes all whitespace
/// - strips leading zeros from the integer part and trailing zeros from the
///   fractional part
/// - never returns an empty string, nor one that starts or ends with the
///   radix point (the zero character fills in)
/// - drops the sign of a zero value
/// - leaves an integer part holding a misplaced sign untouched, so that
///   validation still sees it
///
/// # Arguments
/// * `raw` - Numeral as typed by the caller
/// * `zero` - The base's zero character
///
/// # Examples
/// ```
/// use entities_numeral_base::numeral::standardize;
///
/// assert_eq!(standardize(" -007.50 ", '0'), "-7.5");
/// assert_eq!(standardize("-0.0", '0'), "0.0");
/// assert_eq!(standardize(".", '0'), "0.0");
/// ```
pub fn standardize(raw: &str, zero: char) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let parts = NumeralParts::split(&compact);

    let integer = if parts.integer.contains(SIGN) {
        parts.integer.to_string()
    } else {
        let trimmed = parts.integer.trim_start_matches(zero);
        if trimmed.is_empty() { zero.to_string() } else { trimmed.to_string() }
    };

    let fraction = parts.fraction.map(|fraction| {
        let fraction = fraction.trim_end_matches(zero);
        if fraction.is_empty() {
            zero.to_string()
        } else {
            fraction.to_string()
        }
    });

    let is_zero = integer.chars().all(|c| c == zero)
        && fraction.as_deref().map_or(true, |f| f.chars().all(|c| c == zero));

    let mut standardized = String::with_capacity(compact.len() + 2);
    if parts.negative && !is_zero {
        standardized.push(SIGN);
    }
    standardized.push_str(&integer);
    if let Some(fraction) = fraction {
        standardized.push(POINT);
        standardized.push_str(&fraction);
    }
    standardized
}

/// Normalise a text numeral: lowercase, trimmed, single spaces
pub fn standardize_text(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Structural validation of a numeral
///
/// Rejects a sign when signs are not allowed, a sign anywhere but the first
/// position, more than one sign or radix point, any character outside
/// `valid_chars`, and a value with no digit at all. Magnitude is not checked.
pub fn validate(value: &str, valid_chars: &[char], allow_sign: bool, allow_point: bool) -> bool {
    let mut points = 0;
    let mut digits = 0;
    for (index, c) in value.chars().enumerate() {
        if valid_chars.contains(&c) {
            digits += 1;
            continue;
        }
        match c {
            SIGN if allow_sign && index == 0 => {}
            POINT if allow_point => {
                points += 1;
                if points > 1 {
                    return false;
                }
            }
            _ => return false,
        }
    }
    digits > 0
}

/// Trim leading zeros of the integer part and trailing zeros of the
/// fractional part, without padding
///
/// Unlike [`standardize`] the result may be empty or start with the point;
/// callers that preserve or reinsert zeros at the boundary work from it.
/// Trailing zeros of a value with no radix point are significant and kept.
///
/// # Examples
/// ```
/// use entities_numeral_base::numeral::remove_zeros;
///
/// assert_eq!(remove_zeros("00100", '0'), "100");
/// assert_eq!(remove_zeros("-00.500", '0'), "-.5");
/// assert_eq!(remove_zeros("aab", 'a'), "b");
/// ```
pub fn remove_zeros(value: &str, zero: char) -> String {
    let parts = NumeralParts::split(value);
    let mut trimmed = String::with_capacity(value.len());
    if parts.negative {
        trimmed.push(SIGN);
    }
    trimmed.push_str(parts.integer.trim_start_matches(zero));
    if let Some(fraction) = parts.fraction {
        trimmed.push(POINT);
        trimmed.push_str(fraction.trim_end_matches(zero));
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECIMAL: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

    #[test]
    fn test_split() {
        let parts = NumeralParts::split("-12.5");
        assert!(parts.negative);
        assert_eq!(parts.integer, "12");
        assert_eq!(parts.fraction, Some("5"));

        let parts = NumeralParts::split("7");
        assert!(!parts.negative);
        assert_eq!(parts.fraction, None);
    }

    #[test]
    fn test_standardize_zero_forms() {
        assert_eq!(standardize("-0", '0'), "0");
        assert_eq!(standardize("-0.0", '0'), "0.0");
        assert_eq!(standardize(".", '0'), "0.0");
        assert_eq!(standardize("", '0'), "0");
        assert_eq!(standardize("   ", '0'), "0");
    }

    #[test]
    fn test_standardize_strips_zeros_and_whitespace() {
        assert_eq!(standardize("  0012 345 ", '0'), "12345");
        assert_eq!(standardize("1.2300", '0'), "1.23");
        assert_eq!(standardize("5.", '0'), "5.0");
        assert_eq!(standardize("-.5", '0'), "-0.5");
    }

    #[test]
    fn test_standardize_custom_zero() {
        assert_eq!(standardize("aab.cba", 'a'), "b.cb");
        assert_eq!(standardize("-aa.aa", 'a'), "a.a");
    }

    #[test]
    fn test_standardize_is_idempotent() {
        for raw in ["-000.000", "12.340", " 1 0 ", ".5", "-7", "x.y.z", "0-0", "00-5", "0-", "1.0-"] {
            let once = standardize(raw, '0');
            assert_eq!(standardize(&once, '0'), once, "raw {:?}", raw);
        }
    }

    #[test]
    fn test_standardize_text() {
        assert_eq!(standardize_text("  One   HUNDRED\tTwenty-Three "), "one hundred twenty-three");
        assert_eq!(standardize_text("VEINTITRÉS"), "veintitrés");
    }

    #[test]
    fn test_validate() {
        assert!(validate("-12.5", &DECIMAL, true, true));
        assert!(!validate("-12.5", &DECIMAL, false, true));
        assert!(!validate("12.5", &DECIMAL, true, false));
        assert!(!validate("1.2.5", &DECIMAL, true, true));
        assert!(!validate("--12", &DECIMAL, true, true));
        assert!(!validate("1-2", &DECIMAL, true, true));
        assert!(!validate("12a", &DECIMAL, true, true));
        assert!(!validate("", &DECIMAL, true, true));
        assert!(!validate("-", &DECIMAL, true, true));
        assert!(!validate("-.", &DECIMAL, true, true));
    }

    #[test]
    fn test_misplaced_sign_survives_standardize() {
        assert_eq!(standardize("00-5", '0'), "00-5");
        assert_eq!(standardize("0-", '0'), "0-");
        assert_eq!(standardize("0-0", '0'), "0-0");
        for raw in ["00-5", "0-", "0-0", " 0 - 5 ", "1.0-"] {
            assert!(!validate(&standardize(raw, '0'), &DECIMAL, true, true), "raw {:?}", raw);
        }
        // a leading sign is still trimmed normally
        assert_eq!(standardize("-005", '0'), "-5");
    }

    #[test]
    fn test_remove_zeros() {
        assert_eq!(remove_zeros("000", '0'), "");
        assert_eq!(remove_zeros("0.0", '0'), ".");
        assert_eq!(remove_zeros("1200", '0'), "1200");
        assert_eq!(remove_zeros("1200.0100", '0'), "1200.01");
    }
}
