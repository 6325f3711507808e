//! Spanish Number Words
//!
//! Long scale: each -illón tier is a million times the previous one, so the
//! integer part is named in groups of six digits, each split again at "mil".
//!
//! Agreement rules carried by the tables:
//! - "cien" stands alone, "ciento" takes a remainder
//! - "uno" and "veintiuno" shorten to "un" and "veintiún" before a scale word
//! - one thousand is plain "mil", never "un mil"
//! - a tier of exactly one takes the singular ("un millón"), any other the
//!   plural ("dos millones", "mil millones")

use std::collections::HashMap;

use entities_numeral_base::Language;

use crate::category::{Category, CategorySet};
use crate::english::digit_groups;
use crate::grammar::{Agreement, Grammar, ScaleEntry};

/// Up to 999 999 vigintillones
pub const MAX_INTEGER_DIGITS: usize = 126;

const UNITS: [&str; 10] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

const APOCOPATED_ONE: &str = "un";

const TEENS: [&str; 10] = [
    "diez", "once", "doce", "trece", "catorce", "quince", "dieciséis", "diecisiete",
    "dieciocho", "diecinueve",
];

const TWENTIES: [&str; 10] = [
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
];

const APOCOPATED_TWENTY_ONE: &str = "veintiún";

const TENS: [&str; 10] = [
    "", "", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

const ONE_HUNDRED: &str = "cien";
const THOUSAND: &str = "mil";
const CONNECTOR: &str = "y";

/// Singular and plural of 10^6 through 10^120
const ILLIONS: [(&str, &str); 20] = [
    ("millón", "millones"),
    ("billón", "billones"),
    ("trillón", "trillones"),
    ("cuatrillón", "cuatrillones"),
    ("quintillón", "quintillones"),
    ("sextillón", "sextillones"),
    ("septillón", "septillones"),
    ("octillón", "octillones"),
    ("nonillón", "nonillones"),
    ("decillón", "decillones"),
    ("undecillón", "undecillones"),
    ("duodecillón", "duodecillones"),
    ("tredecillón", "tredecillones"),
    ("cuatordecillón", "cuatordecillones"),
    ("quindecillón", "quindecillones"),
    ("sexdecillón", "sexdecillones"),
    ("septendecillón", "septendecillones"),
    ("octodecillón", "octodecillones"),
    ("novendecillón", "novendecillones"),
    ("vigintillón", "vigintillones"),
];

pub const MINUS: &str = "menos";
pub const POINT: &str = "punto";

fn unit_word(value: u32, before_scale: bool) -> &'static str {
    if value == 1 && before_scale {
        APOCOPATED_ONE
    } else {
        UNITS[value as usize]
    }
}

/// Name a value from 1 to 999
///
/// `before_scale` selects the shortened forms used directly before "mil" or
/// an -illón word.
pub fn group_words(value: u32, before_scale: bool) -> String {
    let mut words = Vec::new();
    let (hundreds, rest) = (value / 100, value % 100);
    match (hundreds, rest) {
        (0, _) => {}
        (1, 0) => words.push(ONE_HUNDRED.to_string()),
        _ => words.push(HUNDREDS[hundreds as usize].to_string()),
    }
    match rest {
        0 => {}
        1..=9 => words.push(unit_word(rest, before_scale).to_string()),
        10..=19 => words.push(TEENS[(rest - 10) as usize].to_string()),
        21 if before_scale => words.push(APOCOPATED_TWENTY_ONE.to_string()),
        20..=29 => words.push(TWENTIES[(rest - 20) as usize].to_string()),
        _ => {
            let (tens, units) = (rest / 10, rest % 10);
            words.push(TENS[tens as usize].to_string());
            if units > 0 {
                words.push(CONNECTOR.to_string());
                words.push(unit_word(units, before_scale).to_string());
            }
        }
    }
    words.join(" ")
}

/// Name a value from 1 to 999 999 (one long-scale tier)
fn tier_words(value: u32, before_scale: bool) -> String {
    let (thousands, rest) = (value / 1000, value % 1000);
    let mut words = Vec::new();
    match thousands {
        0 => {}
        1 => words.push(THOUSAND.to_string()),
        _ => words.push(format!("{} {}", group_words(thousands, true), THOUSAND)),
    }
    if rest > 0 {
        words.push(group_words(rest, before_scale));
    }
    words.join(" ")
}

/// Name a non-zero integer of at most [`MAX_INTEGER_DIGITS`] digits
pub fn integer_words(digits: &str) -> String {
    let tiers = digit_groups(digits, 6);
    let count = tiers.len();
    tiers
        .iter()
        .enumerate()
        .filter(|&(_, &tier)| tier > 0)
        .map(|(index, &tier)| match count - 1 - index {
            0 => tier_words(tier, false),
            scale => {
                let (singular, plural) = ILLIONS[scale - 1];
                let name = if tier == 1 { singular } else { plural };
                format!("{} {}", tier_words(tier, true), name)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name the fractional digits
///
/// One to three digits with a non-zero leading digit are read as one number
/// ("veinticinco" for `25`); anything else digit by digit.
pub fn fraction_words(digits: &str) -> String {
    let cardinal = (1..=3).contains(&digits.len()) && !digits.starts_with('0');
    match digits.parse::<u32>() {
        Ok(value) if cardinal => group_words(value, false),
        _ => digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| UNITS[d as usize])
            .collect::<Vec<_>>()
            .join(" "),
    }
}

pub fn zero() -> &'static str {
    UNITS[0]
}

pub(crate) fn grammar() -> Grammar {
    let group_start =
        CategorySet::UNIT | CategorySet::TEEN | CategorySet::TEN | CategorySet::HUNDRED;
    let complete = CategorySet::THOUSAND | CategorySet::ILLION | CategorySet::POINT;
    let before_scale = CategorySet::THOUSAND | CategorySet::ILLION;
    let remainder = CategorySet::UNIT | CategorySet::TEEN | CategorySet::TEN;

    let mut words = HashMap::new();
    words.insert(UNITS[0], ScaleEntry::word(Category::Zero, 0, CategorySet::POINT).with_fraction_digit());
    words.insert(
        UNITS[1],
        ScaleEntry::word(Category::Unit, 1, CategorySet::POINT).with_fraction_digit(),
    );
    words.insert(APOCOPATED_ONE, ScaleEntry::word(Category::Unit, 1, before_scale).with_apocope());
    for (value, word) in UNITS.iter().enumerate().skip(2) {
        let entry = ScaleEntry::word(Category::Unit, value as u32, complete);
        words.insert(*word, entry.with_fraction_digit());
    }
    for (offset, word) in TEENS.iter().enumerate() {
        words.insert(*word, ScaleEntry::word(Category::Teen, 10 + offset as u32, complete));
    }
    words.insert(TWENTIES[0], ScaleEntry::word(Category::Ten, 20, complete));
    words.insert(TWENTIES[1], ScaleEntry::word(Category::Teen, 21, CategorySet::POINT));
    words.insert(
        APOCOPATED_TWENTY_ONE,
        ScaleEntry::word(Category::Teen, 21, before_scale).with_apocope(),
    );
    for (offset, word) in TWENTIES.iter().enumerate().skip(2) {
        words.insert(*word, ScaleEntry::word(Category::Teen, 20 + offset as u32, complete));
    }
    for (tens, word) in TENS.iter().enumerate().skip(3) {
        let entry = ScaleEntry::word(Category::Ten, 10 * tens as u32, CategorySet::CONNECTOR | complete);
        words.insert(*word, entry);
    }
    words.insert(CONNECTOR, ScaleEntry::word(Category::Connector, 0, CategorySet::UNIT));
    words.insert(ONE_HUNDRED, ScaleEntry::word(Category::Hundred, 100, complete));
    words.insert(HUNDREDS[1], ScaleEntry::word(Category::Hundred, 100, remainder));
    for (hundreds, word) in HUNDREDS.iter().enumerate().skip(2) {
        let entry = ScaleEntry::word(Category::Hundred, 100 * hundreds as u32, remainder | complete);
        words.insert(*word, entry);
    }
    words.insert(
        THOUSAND,
        ScaleEntry::scale(
            Category::Thousand,
            3,
            0,
            group_start | CategorySet::ILLION | CategorySet::POINT,
            Agreement::Any,
        ),
    );
    let after_illion = group_start | CategorySet::THOUSAND | CategorySet::POINT;
    for (index, (singular, plural)) in ILLIONS.iter().enumerate() {
        let exponent = 6 * (index + 1);
        words.insert(
            *singular,
            ScaleEntry::scale(Category::Illion, exponent, index + 1, after_illion, Agreement::Singular),
        );
        words.insert(
            *plural,
            ScaleEntry::scale(Category::Illion, exponent, index + 1, after_illion, Agreement::Plural),
        );
    }
    words.insert(
        POINT,
        ScaleEntry::word(
            Category::Point,
            0,
            CategorySet::ZERO | CategorySet::UNIT | CategorySet::TEEN | CategorySet::TEN | CategorySet::HUNDRED,
        ),
    );
    words.insert(
        MINUS,
        ScaleEntry::word(Category::Minus, 0, CategorySet::ZERO | group_start | CategorySet::THOUSAND),
    );

    Grammar {
        language: Language::Spanish,
        words,
        first: CategorySet::MINUS | CategorySet::ZERO | group_start | CategorySet::THOUSAND,
        fraction_start: CategorySet::ZERO
            | CategorySet::UNIT
            | CategorySet::TEEN
            | CategorySet::TEN
            | CategorySet::HUNDRED,
        hundred_multiplies: false,
        thousand_ranked: false,
        cardinal_fractions: true,
        max_integer_digits: MAX_INTEGER_DIGITS,
    }
}
