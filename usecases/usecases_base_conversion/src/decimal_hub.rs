//! Decimal Hub
//!
//! Every base converts to and from decimal; any pair that cannot be handled
//! by bit grouping or alphabet remapping goes through here.
//!
//! - integer part to decimal: multiply-accumulate, most significant digit first
//! - fractional part to decimal: divide-accumulate from the least significant
//!   digit, each division bounded to 25 fractional digits
//! - integer part from decimal: repeated division, remainders are the digits
//! - fractional part from decimal: repeated multiplication, integer parts are
//!   the digits, at most 25 of them

use entities_big_string::{add, divide_full, divide_int, multiply_small, MAX_FRACTION_DIGITS};
use entities_numeral_base::{BaseSpec, ConversionOutcome, POINT};
use tracing::debug;

use crate::generic::{convert_generic, ConvertedFraction};

/// Convert a standardized numeral in `from` to decimal
///
/// # Returns
/// `Truncated` when a fractional digit of `from` has no finite decimal
/// expansion within 25 digits (e.g. one sixty-second).
pub fn to_decimal(number: &str, from: &BaseSpec, decimal: &BaseSpec) -> ConversionOutcome {
    convert_generic(
        number,
        from,
        decimal,
        |digits| integer_to_decimal(digits, from),
        |digits| fraction_to_decimal(digits, from),
    )
}

/// Convert a standardized decimal numeral to `to`
pub fn from_decimal(number: &str, decimal: &BaseSpec, to: &BaseSpec) -> ConversionOutcome {
    convert_generic(
        number,
        decimal,
        to,
        |digits| integer_from_decimal(digits, to),
        |digits| fraction_from_decimal(digits, to),
    )
}

/// Integer digits of `from` to a decimal integer
pub fn integer_to_decimal(digits: &str, from: &BaseSpec) -> String {
    let radix = from.radix();
    digits.chars().fold("0".to_string(), |accumulated, c| {
        let shifted = multiply_small(&accumulated, radix);
        add(&shifted.integer_part, &digit_of(from, c).to_string())
    })
}

/// Fractional digits of `from` to decimal fractional digits
///
/// Evaluated right to left: `x = (d + x) / radix`. Each step is a bounded
/// full division, so truncation in any step marks the whole result. Flooring
/// every step at 25 places loses nothing: `floor((a + floor(t)) / r)` equals
/// `floor((a + t) / r)` for integers `a` and `r`.
pub fn fraction_to_decimal(digits: &str, from: &BaseSpec) -> ConvertedFraction {
    let radix = from.radix();
    let mut value = "0".to_string();
    let mut truncated = false;
    for c in digits.chars().rev() {
        let digit = digit_of(from, c);
        let dividend = match value.split_once(POINT) {
            Some((_, fraction)) => format!("{}.{}", digit, fraction),
            None => digit.to_string(),
        };
        let step = divide_full(&dividend, radix);
        truncated |= step.truncated;
        value = step.quotient;
    }
    if truncated {
        debug!(digits, radix, "fraction truncated at {} decimal digits", MAX_FRACTION_DIGITS);
    }

    let fraction = value.split_once(POINT).map_or("", |(_, fraction)| fraction);
    ConvertedFraction { digits: fraction.to_string(), truncated }
}

/// Decimal integer to the integer digits of `to`
pub fn integer_from_decimal(digits: &str, to: &BaseSpec) -> String {
    let radix = to.radix();
    let mut remaining = digits.to_string();
    let mut converted = Vec::new();
    loop {
        let division = divide_int(&remaining, radix);
        converted.push(char_of(to, division.remainder as u32));
        if division.quotient == "0" {
            break;
        }
        remaining = division.quotient;
    }
    converted.iter().rev().collect()
}

/// Decimal fractional digits to the fractional digits of `to`
///
/// Stops once the remaining fraction is zero or 25 digits have been produced.
/// Stopping at the cap is not reported as truncation.
pub fn fraction_from_decimal(digits: &str, to: &BaseSpec) -> ConvertedFraction {
    let radix = to.radix();
    let mut fraction = format!("0.{}", digits);
    let mut converted = String::new();
    for _ in 0..MAX_FRACTION_DIGITS {
        let product = multiply_small(&fraction, radix);
        let digit: u32 = product.integer_part.parse().unwrap_or(0);
        converted.push(char_of(to, digit));
        if product.fraction_is_zero() {
            return ConvertedFraction::exact(converted);
        }
        fraction = format!("0.{}", product.fractional_part);
    }
    debug!(digits, radix, "fraction expansion capped at {} digits", MAX_FRACTION_DIGITS);
    ConvertedFraction::exact(converted)
}

// Validated input only reaches the hub, so every character has a value and
// every value below the radix has a character.
fn digit_of(spec: &BaseSpec, c: char) -> u32 {
    spec.digit_value(c).unwrap_or(0)
}

fn char_of(spec: &BaseSpec, value: u32) -> char {
    spec.digit(value).unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_numeral_base::{BaseId, BaseOptions, Segment};

    fn spec(base: BaseId) -> BaseSpec {
        BaseSpec::default_for(base).unwrap()
    }

    #[test]
    fn test_integer_to_decimal() {
        assert_eq!(integer_to_decimal("1010", &spec(BaseId::Binary)), "10");
        assert_eq!(integer_to_decimal("FF", &spec(BaseId::Hexadecimal)), "255");
        assert_eq!(integer_to_decimal("3D7", &spec(BaseId::Base62)), "12345");
    }

    #[test]
    fn test_integer_from_decimal() {
        assert_eq!(integer_from_decimal("10", &spec(BaseId::Binary)), "1010");
        assert_eq!(integer_from_decimal("12345", &spec(BaseId::Base62)), "3D7");
        assert_eq!(integer_from_decimal("63", &spec(BaseId::Base64)), "/");
        assert_eq!(integer_from_decimal("0", &spec(BaseId::Octal)), "0");
    }

    #[test]
    fn test_fraction_to_decimal_terminating() {
        let result = fraction_to_decimal("101", &spec(BaseId::Binary));
        assert_eq!(result, ConvertedFraction::exact("625".to_string()));

        let result = fraction_to_decimal("8", &spec(BaseId::Hexadecimal));
        assert_eq!(result, ConvertedFraction::exact("5".to_string()));
    }

    #[test]
    fn test_fraction_to_decimal_repeating() {
        let result = fraction_to_decimal("1", &spec(BaseId::Base62));
        assert!(result.truncated);
        assert_eq!(result.digits, "0161290322580645161290322");
    }

    #[test]
    fn test_fraction_to_decimal_long_repeating_tail() {
        // 1 - 62^-30: every one of the first 25 decimal digits is a nine
        let digits = "z".repeat(30);
        let result = fraction_to_decimal(&digits, &spec(BaseId::Base62));
        assert!(result.truncated);
        assert_eq!(result.digits, "9".repeat(MAX_FRACTION_DIGITS));

        // exact 2^-40 needs 40 decimal digits, so it is cut at 25
        let digits = format!("{}1", "0".repeat(39));
        let result = fraction_to_decimal(&digits, &spec(BaseId::Binary));
        assert!(result.truncated);
        assert_eq!(result.digits, "0000000000009094947017729");
    }

    #[test]
    fn test_fraction_from_decimal() {
        let result = fraction_from_decimal("625", &spec(BaseId::Binary));
        assert_eq!(result, ConvertedFraction::exact("101".to_string()));

        let result = fraction_from_decimal("6789", &spec(BaseId::Base62));
        assert_eq!(result.digits, "g5gsVdybtS4YuwKQyuLQU9ijp");
        assert!(!result.truncated);
    }

    #[test]
    fn test_reordered_alphabet_from_decimal() {
        let options = BaseOptions::default().with_order(vec![
            Segment::Lowercase,
            Segment::Uppercase,
            Segment::Numbers,
        ]);
        let base62 = BaseSpec::new(BaseId::Base62, &options).unwrap();
        let decimal = spec(BaseId::Decimal);
        assert_eq!(from_decimal("0", &decimal, &base62), ConversionOutcome::Value("a".to_string()));
        assert_eq!(from_decimal("62", &decimal, &base62), ConversionOutcome::Value("ba".to_string()));
        assert_eq!(to_decimal("-ba.A", &base62, &decimal).to_string(), "-62.4193548387096774193548387...");
    }

    #[test]
    fn test_round_trip_through_hub() {
        let decimal = spec(BaseId::Decimal);
        let hex = spec(BaseId::Hexadecimal);
        let hex_value = from_decimal("-4095.75", &decimal, &hex);
        assert_eq!(hex_value, ConversionOutcome::Value("-FFF.C".to_string()));
        assert_eq!(to_decimal("-FFF.C", &hex, &decimal), ConversionOutcome::Value("-4095.75".to_string()));
    }
}
