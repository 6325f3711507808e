//! Alphabet Remapping
//!
//! Two specs with the same radix but different alphabets (a reordered Base62,
//! a Base64 with other extra characters) describe the same digit values, so
//! converting between them is a per-character substitution.

use entities_numeral_base::{BaseSpec, ConversionOutcome, POINT, SIGN};

/// Substitute every digit of `from` by the digit of `to` with the same value
///
/// # Arguments
/// * `number` - Standardized numeral in the `from` alphabet
/// * `from` - Source spec
/// * `to` - Target spec; must have the same radix as `from`
pub fn remap(number: &str, from: &BaseSpec, to: &BaseSpec) -> ConversionOutcome {
    debug_assert_eq!(from.radix(), to.radix());
    let remapped: String = number
        .chars()
        .map(|c| match c {
            SIGN | POINT => c,
            digit => from
                .digit_value(digit)
                .and_then(|value| to.digit(value))
                .unwrap_or(digit),
        })
        .collect();
    ConversionOutcome::Value(to.standardize(&remapped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_numeral_base::{BaseId, BaseOptions, Segment};

    #[test]
    fn test_reordered_base62() {
        let from = BaseSpec::default_for(BaseId::Base62).unwrap();
        let options = BaseOptions::default().with_order(vec![
            Segment::Lowercase,
            Segment::Uppercase,
            Segment::Numbers,
        ]);
        let to = BaseSpec::new(BaseId::Base62, &options).unwrap();

        // '1' is digit 1 in the default order, 'b' in the reordered one
        assert_eq!(remap("-10.A", &from, &to), ConversionOutcome::Value("-ba.k".to_string()));
    }

    #[test]
    fn test_base64_extra_characters() {
        let from = BaseSpec::default_for(BaseId::Base64).unwrap();
        let to = BaseSpec::new(BaseId::Base64, &BaseOptions::default().with_extra_characters(['*', '_']))
            .unwrap();
        assert_eq!(remap("+/", &from, &to), ConversionOutcome::Value("*_".to_string()));
    }
}
