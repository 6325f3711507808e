//! Integration tests for api_facades crate
//!
//! End-to-end conversions through the public entry point, including text.

use api_facades::*;

fn none() -> BaseOptions {
    BaseOptions::default()
}

fn text(language: Language) -> BaseOptions {
    BaseOptions::default().with_lang(language)
}

fn plain(value: &str, from: BaseId, to: BaseId) -> String {
    convert(value, from, &none(), to, &none()).unwrap().to_string()
}

#[test]
fn test_literal_scenarios() {
    assert_eq!(plain("1010", BaseId::Binary, BaseId::Decimal), "10");
    assert_eq!(plain("FF", BaseId::Hexadecimal, BaseId::Decimal), "255");
    assert_eq!(plain("12345.6789", BaseId::Decimal, BaseId::Base62), "3D7.g5gsVdybtS4YuwKQyuLQU9ijp");
    assert_eq!(
        plain("123456", BaseId::Decimal, BaseId::Text),
        "one hundred twenty-three thousand four hundred fifty-six"
    );
    let outcome = convert("menos dos punto cinco", BaseId::Text, &text(Language::Spanish), BaseId::Decimal, &none());
    assert_eq!(outcome.unwrap().to_string(), "-2.5");
}

#[test]
fn test_warnings() {
    let long = format!("1{}", "0".repeat(66));
    let outcome = convert(&long, BaseId::Decimal, &none(), BaseId::Text, &none()).unwrap();
    assert_eq!(outcome.warning(), Some(WarningKind::MagnitudeExceeded));
    assert_eq!(outcome.to_string(), "NTL");

    let outcome = convert("one thousand zero", BaseId::Text, &none(), BaseId::Binary, &none()).unwrap();
    assert_eq!(outcome.warning(), Some(WarningKind::GrammarRejected));

    let outcome = convert("0.1", BaseId::Base62, &none(), BaseId::Octal, &none()).unwrap();
    assert_eq!(outcome.warning(), Some(WarningKind::PrecisionTruncated));

    // one sixty-fourth terminates in every base
    let outcome = convert("0.1", BaseId::Base64, &none(), BaseId::Octal, &none()).unwrap();
    assert_eq!(outcome, ConversionOutcome::Value("0.01".to_string()));
}

#[test]
fn test_round_trip_every_pair() {
    let bases = [
        (BaseId::Binary, none()),
        (BaseId::Octal, none()),
        (BaseId::Decimal, none()),
        (BaseId::Hexadecimal, none()),
        (BaseId::Base62, none()),
        (BaseId::Base62, none().with_order(vec![Segment::Lowercase, Segment::Numbers, Segment::Uppercase])),
        (BaseId::Base64, none()),
        (BaseId::Base64, none().with_extra_characters(['_', '*'])),
        (BaseId::Text, text(Language::English)),
        (BaseId::Text, text(Language::Spanish)),
    ];
    for decimal in ["0", "-42", "1000001.5", "98765432101234567890.125", "-0.0625"] {
        for (first, first_options) in &bases {
            let start = convert(decimal, BaseId::Decimal, &none(), *first, first_options)
                .unwrap()
                .into_value()
                .unwrap();
            for (second, second_options) in &bases {
                let there = convert(&start, *first, first_options, *second, second_options)
                    .unwrap()
                    .into_value()
                    .unwrap();
                let back = convert(&there, *second, second_options, *first, first_options).unwrap();
                assert_eq!(
                    back,
                    ConversionOutcome::Value(start.clone()),
                    "{} as {} via {}",
                    decimal,
                    first,
                    second
                );
            }
        }
    }
}

#[test]
fn test_options_parsed_from_strings() {
    let order = parse_order("lowercase,uppercase,numbers").unwrap();
    let options = none().with_order(order);
    let outcome = convert("61", BaseId::Decimal, &none(), BaseId::Base62, &options).unwrap();
    assert_eq!(outcome.to_string(), "9");

    // '-' parses as a character but is reserved for the sign
    let extra = parse_extra_characters("-_").unwrap();
    let result = convert("1", BaseId::Decimal, &none(), BaseId::Base64, &none().with_extra_characters(extra));
    assert!(matches!(result, Err(ConversionError::InvalidOptions(_))));
}

#[test]
fn test_helpers() {
    assert_eq!(standardize("  -000.500 ", BaseId::Decimal, &none()).unwrap(), "-0.5");
    assert!(validate("z.Z", BaseId::Base62, &none()).unwrap());
    assert!(!validate("z.Z", BaseId::Hexadecimal, &none()).unwrap());
    assert_eq!(zero_char(BaseId::Base64, &none()).unwrap(), '0');
    assert_eq!(remove_zeros("-0012.3400", '0'), "-12.34");
}
