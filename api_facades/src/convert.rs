//! Convert Facade
//!
//! The single entry point request layers call. Numeral pairs go through the
//! base-conversion router; text goes through the words engine with decimal in
//! between.

use entities_numeral_base::{BaseId, BaseOptions, BaseSpec, ConversionOutcome, Language};
use tracing::debug;
use usecases_base_conversion::route;
use usecases_words::{decimal_to_words, words_to_decimal};

use crate::error::ConversionError;

/// Convert `value` from one base to another
///
/// # Arguments
/// * `value` - Input as typed; standardized before use
/// * `from` - Base of `value`
/// * `from_options` - Order, extra characters or language of `from`
/// * `to` - Target base
/// * `to_options` - Order, extra characters or language of `to`
///
/// # Returns
/// * `Ok(ConversionOutcome)` - Converted value, or a truncated/NTL/NaN outcome
/// * `Err(ConversionError)` - Invalid options, or `value` is not a numeral
///   of `from`
///
/// # Examples
/// ```
/// use api_facades::convert;
/// use entities_numeral_base::{BaseId, BaseOptions};
///
/// let none = BaseOptions::default();
/// let outcome = convert("FF", BaseId::Hexadecimal, &none, BaseId::Decimal, &none).unwrap();
/// assert_eq!(outcome.to_string(), "255");
/// ```
pub fn convert(
    value: &str,
    from: BaseId,
    from_options: &BaseOptions,
    to: BaseId,
    to_options: &BaseOptions,
) -> Result<ConversionOutcome, ConversionError> {
    let from_spec = BaseSpec::new(from, from_options)?;
    let to_spec = BaseSpec::new(to, to_options)?;
    convert_with_specs(value, &from_spec, &to_spec)
}

/// [`convert`] with already-built specs
pub fn convert_with_specs(
    value: &str,
    from: &BaseSpec,
    to: &BaseSpec,
) -> Result<ConversionOutcome, ConversionError> {
    let standardized = from.standardize(value);
    if !from.validate(&standardized) {
        return Err(ConversionError::InvalidNumeral { value: value.to_string(), base: from.base() });
    }
    debug!(from = %from.base(), to = %to.base(), value = %standardized, "converting");

    let outcome = match (language_of(from), language_of(to)) {
        (Some(from_lang), Some(to_lang)) => {
            words_to_decimal(&standardized, from_lang).and_then(|decimal| decimal_to_words(&decimal, to_lang))
        }
        (Some(from_lang), None) => {
            let decimal_spec = BaseSpec::default_for(BaseId::Decimal)?;
            match words_to_decimal(&standardized, from_lang) {
                ConversionOutcome::Value(decimal) => route(&decimal, &decimal_spec, to)?,
                rejected => rejected,
            }
        }
        (None, Some(to_lang)) => {
            let decimal_spec = BaseSpec::default_for(BaseId::Decimal)?;
            route(&standardized, from, &decimal_spec)?.and_then(|decimal| decimal_to_words(&decimal, to_lang))
        }
        (None, None) => route(&standardized, from, to)?,
    };
    Ok(outcome)
}

fn language_of(spec: &BaseSpec) -> Option<Language> {
    match spec.base() {
        BaseId::Text => spec.language(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none() -> BaseOptions {
        BaseOptions::default()
    }

    fn lang(language: Language) -> BaseOptions {
        BaseOptions::default().with_lang(language)
    }

    #[test]
    fn test_numeral_to_text() {
        let outcome = convert("1010", BaseId::Binary, &none(), BaseId::Text, &none()).unwrap();
        assert_eq!(outcome, ConversionOutcome::Value("ten".to_string()));

        let outcome = convert("-FF.8", BaseId::Hexadecimal, &none(), BaseId::Text, &lang(Language::Spanish));
        assert_eq!(outcome.unwrap().to_string(), "menos doscientos cincuenta y cinco punto cinco");
    }

    #[test]
    fn test_text_to_numeral() {
        let outcome = convert("two hundred fifty-five", BaseId::Text, &none(), BaseId::Hexadecimal, &none());
        assert_eq!(outcome.unwrap(), ConversionOutcome::Value("FF".to_string()));

        let outcome = convert("veintitrés", BaseId::Text, &lang(Language::Spanish), BaseId::Decimal, &none());
        assert_eq!(outcome.unwrap(), ConversionOutcome::Value("23".to_string()));
    }

    #[test]
    fn test_text_to_text_translates() {
        let outcome = convert(
            "twenty-one thousand",
            BaseId::Text,
            &lang(Language::English),
            BaseId::Text,
            &lang(Language::Spanish),
        );
        assert_eq!(outcome.unwrap().to_string(), "veintiún mil");
    }

    #[test]
    fn test_rejected_words_are_nan() {
        let outcome = convert("one million two billion", BaseId::Text, &none(), BaseId::Decimal, &none());
        assert_eq!(outcome.unwrap(), ConversionOutcome::NotANumber);
    }

    #[test]
    fn test_truncation_reaches_words() {
        let outcome = convert("0.1", BaseId::Base62, &none(), BaseId::Text, &none()).unwrap();
        assert!(outcome.is_truncated());
        assert!(outcome.to_string().starts_with("zero point zero one six one"));
        assert!(outcome.to_string().ends_with("..."));
    }

    #[test]
    fn test_invalid_numeral_is_an_error() {
        let result = convert("12G", BaseId::Hexadecimal, &none(), BaseId::Decimal, &none());
        assert_eq!(
            result,
            Err(ConversionError::InvalidNumeral { value: "12G".to_string(), base: BaseId::Hexadecimal })
        );
        assert!(convert("1-2", BaseId::Decimal, &none(), BaseId::Binary, &none()).is_err());
        assert!(convert("ten4", BaseId::Text, &none(), BaseId::Binary, &none()).is_err());
    }

    #[test]
    fn test_sign_after_leading_zeros_is_invalid() {
        for value in ["00-5", "0-", "0-0", "1.0-"] {
            let result = convert(value, BaseId::Decimal, &none(), BaseId::Binary, &none());
            assert_eq!(
                result,
                Err(ConversionError::InvalidNumeral { value: value.to_string(), base: BaseId::Decimal }),
                "value {:?}",
                value
            );
        }
        assert_eq!(
            convert("-005", BaseId::Decimal, &none(), BaseId::Binary, &none()).unwrap(),
            ConversionOutcome::Value("-101".to_string())
        );
    }

    #[test]
    fn test_option_for_wrong_base_is_an_error() {
        let result = convert("1", BaseId::Decimal, &lang(Language::Spanish), BaseId::Binary, &none());
        assert!(matches!(result, Err(ConversionError::InvalidOptions(_))));
    }
}
