//! Power-of-Two Bases
//!
//! Octal and hexadecimal digits map to fixed-width groups of bits (3 and 4),
//! so conversion to and from binary is a table lookup per digit and never
//! touches big-string arithmetic.
//!
//! Grouping binary back into wider digits works from the radix point outward:
//! the integer part is grouped from its least significant end (the leftmost
//! partial group is zero-padded on the left), the fractional part from its
//! most significant end (the rightmost partial group is zero-padded on the
//! right).

use entities_numeral_base::{BaseSpec, ConversionOutcome};

use crate::generic::{convert_generic, ConvertedFraction};

/// Expand each digit of `from` into its fixed-width bit pattern
pub fn to_binary(number: &str, from: &BaseSpec, binary: &BaseSpec) -> ConversionOutcome {
    let width = bits_of(from);
    convert_generic(
        number,
        from,
        binary,
        |digits| expand(digits, from, width),
        |digits| ConvertedFraction::exact(expand(digits, from, width)),
    )
}

/// Group binary digits into digits of `to`
pub fn from_binary(number: &str, binary: &BaseSpec, to: &BaseSpec) -> ConversionOutcome {
    let width = bits_of(to);
    convert_generic(
        number,
        binary,
        to,
        |digits| group(&pad_left(digits, width), to, width),
        |digits| ConvertedFraction::exact(group(&pad_right(digits, width), to, width)),
    )
}

fn bits_of(spec: &BaseSpec) -> usize {
    match spec.base().bits_per_digit() {
        Some(width) => width,
        None => panic!("base {} is not a power of two", spec.base()),
    }
}

fn expand(digits: &str, from: &BaseSpec, width: usize) -> String {
    digits
        .chars()
        .map(|c| {
            let value = from.digit_value(c).unwrap_or(0);
            format!("{:0width$b}", value, width = width)
        })
        .collect()
}

fn group(bits: &str, to: &BaseSpec, width: usize) -> String {
    bits.as_bytes()
        .chunks(width)
        .map(|chunk| {
            let value = chunk
                .iter()
                .fold(0u32, |value, &bit| (value << 1) | u32::from(bit == b'1'));
            to.digit(value).unwrap_or('?')
        })
        .collect()
}

fn pad_left(bits: &str, width: usize) -> String {
    let padding = (width - bits.len() % width) % width;
    format!("{}{}", "0".repeat(padding), bits)
}

fn pad_right(bits: &str, width: usize) -> String {
    let padding = (width - bits.len() % width) % width;
    format!("{}{}", bits, "0".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_numeral_base::BaseId;

    fn spec(base: BaseId) -> BaseSpec {
        BaseSpec::default_for(base).unwrap()
    }

    #[test]
    fn test_hex_to_binary() {
        let outcome = to_binary("-1F.8", &spec(BaseId::Hexadecimal), &spec(BaseId::Binary));
        assert_eq!(outcome, ConversionOutcome::Value("-11111.1".to_string()));
    }

    #[test]
    fn test_octal_to_binary() {
        let outcome = to_binary("17.4", &spec(BaseId::Octal), &spec(BaseId::Binary));
        assert_eq!(outcome, ConversionOutcome::Value("1111.1".to_string()));
    }

    #[test]
    fn test_binary_to_hex_pads_partial_groups() {
        let outcome = from_binary("11111.1", &spec(BaseId::Binary), &spec(BaseId::Hexadecimal));
        assert_eq!(outcome, ConversionOutcome::Value("1F.8".to_string()));
    }

    #[test]
    fn test_binary_to_octal() {
        let outcome = from_binary("1010.01", &spec(BaseId::Binary), &spec(BaseId::Octal));
        assert_eq!(outcome, ConversionOutcome::Value("12.2".to_string()));
    }

    #[test]
    fn test_pad_helpers() {
        assert_eq!(pad_left("101", 4), "0101");
        assert_eq!(pad_left("1010", 4), "1010");
        assert_eq!(pad_right("1", 3), "100");
    }

    #[test]
    fn test_long_fraction_is_exact() {
        // 40 fractional bits: well past the 25-digit decimal cap, still exact
        let bits = format!("0.{}1", "0".repeat(39));
        let outcome = from_binary(&bits, &spec(BaseId::Binary), &spec(BaseId::Hexadecimal));
        assert_eq!(outcome, ConversionOutcome::Value("0.0000000001".to_string()));
    }
}
