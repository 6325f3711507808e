//! Decimal to Words
//!
//! Names a canonical decimal numeral. The structure is top-down: sign word,
//! integer part by scale groups, then the point word and the fraction.

use entities_numeral_base::{ConversionOutcome, Language, NumeralParts};
use tracing::debug;

use crate::grammar::grammar_for;
use crate::{english, spanish};

/// Name a standardized decimal numeral
///
/// # Arguments
/// * `number` - Canonical decimal numeral, e.g. `"-12.5"`
/// * `language` - Output language
///
/// # Returns
/// The words, or `NumberTooLong` when the integer part has more digits than
/// the language has scale words for (63 in English, 126 in Spanish).
///
/// # Examples
/// ```
/// use entities_numeral_base::Language;
/// use usecases_words::decimal_to_words;
///
/// let words = decimal_to_words("123456", Language::English);
/// assert_eq!(
///     words.to_string(),
///     "one hundred twenty-three thousand four hundred fifty-six"
/// );
/// assert_eq!(decimal_to_words("-0.25", Language::Spanish).to_string(), "menos cero punto veinticinco");
/// ```
pub fn decimal_to_words(number: &str, language: Language) -> ConversionOutcome {
    let parts = NumeralParts::split(number);
    let max_digits = grammar_for(language).max_integer_digits;
    if parts.integer.len() > max_digits {
        debug!(digits = parts.integer.len(), max_digits, %language, "number too long for words");
        return ConversionOutcome::NumberTooLong;
    }

    let is_zero = |digits: &str| digits.chars().all(|c| c == '0');
    let mut words = Vec::new();
    let negative = parts.negative
        && !(is_zero(parts.integer) && parts.fraction.map_or(true, is_zero));
    if negative {
        words.push(minus_word(language).to_string());
    }
    if is_zero(parts.integer) {
        words.push(zero_word(language).to_string());
    } else {
        words.push(match language {
            Language::English => english::integer_words(parts.integer),
            Language::Spanish => spanish::integer_words(parts.integer),
        });
    }
    if let Some(fraction) = parts.fraction.filter(|f| !f.is_empty()) {
        words.push(point_word(language).to_string());
        words.push(match language {
            Language::English => english::fraction_words(fraction),
            Language::Spanish => spanish::fraction_words(fraction),
        });
    }
    ConversionOutcome::Value(words.join(" "))
}

fn minus_word(language: Language) -> &'static str {
    match language {
        Language::English => english::MINUS,
        Language::Spanish => spanish::MINUS,
    }
}

fn zero_word(language: Language) -> &'static str {
    match language {
        Language::English => english::zero(),
        Language::Spanish => spanish::zero(),
    }
}

fn point_word(language: Language) -> &'static str {
    match language {
        Language::English => english::POINT,
        Language::Spanish => spanish::POINT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(number: &str) -> String {
        decimal_to_words(number, Language::English).to_string()
    }

    fn es(number: &str) -> String {
        decimal_to_words(number, Language::Spanish).to_string()
    }

    #[test]
    fn test_english() {
        assert_eq!(en("0"), "zero");
        assert_eq!(en("-7"), "minus seven");
        assert_eq!(en("1000000"), "one million");
        assert_eq!(en("3.14"), "three point one four");
        assert_eq!(en("0.05"), "zero point zero five");
        assert_eq!(en("12.0"), "twelve point zero");
    }

    #[test]
    fn test_spanish() {
        assert_eq!(es("0"), "cero");
        assert_eq!(es("-2.5"), "menos dos punto cinco");
        assert_eq!(es("21"), "veintiuno");
        assert_eq!(es("1.205"), "uno punto doscientos cinco");
        assert_eq!(es("1.2051"), "uno punto dos cero cinco uno");
        assert_eq!(es("2000001"), "dos millones uno");
    }

    #[test]
    fn test_number_too_long() {
        let english_max = "9".repeat(english::MAX_INTEGER_DIGITS);
        assert!(matches!(decimal_to_words(&english_max, Language::English), ConversionOutcome::Value(_)));
        let too_long = "1".repeat(english::MAX_INTEGER_DIGITS + 1);
        assert_eq!(decimal_to_words(&too_long, Language::English), ConversionOutcome::NumberTooLong);
        assert!(matches!(decimal_to_words(&too_long, Language::Spanish), ConversionOutcome::Value(_)));

        let spanish_too_long = "1".repeat(spanish::MAX_INTEGER_DIGITS + 1);
        assert_eq!(en(&spanish_too_long), "NTL");
        assert_eq!(es(&spanish_too_long), "NTL");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(en("-0.0"), "zero point zero");
    }
}
