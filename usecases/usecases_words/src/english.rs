//! English Number Words
//!
//! Short scale: every scale word is a thousand times the previous one, so the
//! integer part is named in groups of three digits. Tens and units are joined
//! with a hyphen ("forty-two"); "and" is never used.

use std::collections::HashMap;

use entities_numeral_base::Language;

use crate::category::{Category, CategorySet};
use crate::grammar::{Agreement, Grammar, ScaleEntry};

/// Up to 999 novemdecillion
pub const MAX_INTEGER_DIGITS: usize = 63;

const UNITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// 10^6 through 10^63
const ILLIONS: [&str; 20] = [
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
];

pub const MINUS: &str = "minus";
pub const POINT: &str = "point";

/// Name a value from 1 to 999
pub fn group_words(value: u32) -> String {
    let mut words = Vec::new();
    let (hundreds, rest) = (value / 100, value % 100);
    if hundreds > 0 {
        words.push(format!("{} hundred", UNITS[hundreds as usize]));
    }
    match rest {
        0 => {}
        1..=9 => words.push(UNITS[rest as usize].to_string()),
        10..=19 => words.push(TEENS[(rest - 10) as usize].to_string()),
        _ => {
            let (tens, units) = (rest / 10, rest % 10);
            if units == 0 {
                words.push(TENS[tens as usize].to_string());
            } else {
                words.push(format!("{}-{}", TENS[tens as usize], UNITS[units as usize]));
            }
        }
    }
    words.join(" ")
}

/// Name a non-zero integer of at most [`MAX_INTEGER_DIGITS`] digits
pub fn integer_words(digits: &str) -> String {
    let groups = digit_groups(digits, 3);
    let count = groups.len();
    groups
        .iter()
        .enumerate()
        .filter(|&(_, &group)| group > 0)
        .map(|(index, &group)| {
            let tier = count - 1 - index;
            match tier {
                0 => group_words(group),
                1 => format!("{} thousand", group_words(group)),
                _ => format!("{} {}", group_words(group), ILLIONS[tier - 2]),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name each fractional digit
pub fn fraction_words(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| UNITS[d as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn zero() -> &'static str {
    UNITS[0]
}

/// Split decimal digits into groups of `width`, most significant first
pub(crate) fn digit_groups(digits: &str, width: usize) -> Vec<u32> {
    let bytes = digits.as_bytes();
    let head = bytes.len() % width;
    let mut groups = Vec::with_capacity(bytes.len() / width + 1);
    if head > 0 {
        groups.push(&bytes[..head]);
    }
    groups.extend(bytes[head..].chunks(width));
    groups
        .into_iter()
        .map(|chunk| chunk.iter().fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0')))
        .collect()
}

pub(crate) fn grammar() -> Grammar {
    let group_start = CategorySet::UNIT | CategorySet::TEEN | CategorySet::TEN;
    let complete = CategorySet::THOUSAND | CategorySet::ILLION | CategorySet::POINT;
    let digits = CategorySet::ZERO | CategorySet::UNIT;

    let mut words = HashMap::new();
    words.insert(UNITS[0], ScaleEntry::word(Category::Zero, 0, CategorySet::POINT).with_fraction_digit());
    for (value, word) in UNITS.iter().enumerate().skip(1) {
        let entry = ScaleEntry::word(Category::Unit, value as u32, CategorySet::HUNDRED | complete);
        words.insert(*word, entry.with_fraction_digit());
    }
    for (offset, word) in TEENS.iter().enumerate() {
        words.insert(*word, ScaleEntry::word(Category::Teen, 10 + offset as u32, complete));
    }
    for (tens, word) in TENS.iter().enumerate().skip(2) {
        let entry = ScaleEntry::word(Category::Ten, 10 * tens as u32, CategorySet::CONNECTOR | complete);
        words.insert(*word, entry);
    }
    words.insert("-", ScaleEntry::word(Category::Connector, 0, CategorySet::UNIT));
    words.insert("hundred", ScaleEntry::word(Category::Hundred, 100, group_start | complete));
    words.insert(
        "thousand",
        ScaleEntry::scale(Category::Thousand, 3, 0, group_start | CategorySet::POINT, Agreement::Any),
    );
    for (index, word) in ILLIONS.iter().enumerate() {
        let entry = ScaleEntry::scale(
            Category::Illion,
            3 * (index + 2),
            index + 1,
            group_start | CategorySet::POINT,
            Agreement::Any,
        );
        words.insert(*word, entry);
    }
    words.insert(POINT, ScaleEntry::word(Category::Point, 0, digits));
    words.insert(MINUS, ScaleEntry::word(Category::Minus, 0, CategorySet::ZERO | group_start));

    Grammar {
        language: Language::English,
        words,
        first: CategorySet::MINUS | CategorySet::ZERO | group_start,
        fraction_start: digits,
        hundred_multiplies: true,
        thousand_ranked: true,
        cardinal_fractions: false,
        max_integer_digits: MAX_INTEGER_DIGITS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_words() {
        assert_eq!(group_words(7), "seven");
        assert_eq!(group_words(13), "thirteen");
        assert_eq!(group_words(40), "forty");
        assert_eq!(group_words(99), "ninety-nine");
        assert_eq!(group_words(100), "one hundred");
        assert_eq!(group_words(305), "three hundred five");
        assert_eq!(group_words(999), "nine hundred ninety-nine");
    }

    #[test]
    fn test_integer_words_skip_empty_groups() {
        assert_eq!(integer_words("1000001"), "one million one");
        assert_eq!(integer_words("2000000000"), "two billion");
        assert_eq!(
            integer_words("123456"),
            "one hundred twenty-three thousand four hundred fifty-six"
        );
    }

    #[test]
    fn test_largest_scale() {
        let digits = format!("1{}", "0".repeat(62));
        assert_eq!(integer_words(&digits), "one hundred novemdecillion");
    }

    #[test]
    fn test_digit_groups() {
        assert_eq!(digit_groups("1234567", 3), vec![1, 234, 567]);
        assert_eq!(digit_groups("123", 3), vec![123]);
        assert_eq!(digit_groups("1234567", 6), vec![1, 234567]);
    }

    #[test]
    fn test_fraction_words() {
        assert_eq!(fraction_words("205"), "two zero five");
    }
}
