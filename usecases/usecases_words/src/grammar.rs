//! Grammar Tables
//!
//! One immutable [`Grammar`] per language, built on first use and shared for
//! the rest of the process. Each known word maps to a [`ScaleEntry`] holding
//! its category, its numeric value, the categories that may follow it and
//! whether it can name a single fractional digit.

use std::collections::HashMap;

use entities_big_string::shift_left;
use entities_numeral_base::Language;
use lazy_static::lazy_static;

use crate::category::{Category, CategorySet};
use crate::{english, spanish};

/// Number agreement a scale word demands of the value it multiplies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agreement {
    /// Invariant word ("million", "mil")
    Any,
    /// Only a value of exactly one ("millón")
    Singular,
    /// Only a value greater than one ("millones")
    Plural,
}

impl Agreement {
    pub fn accepts(self, value: u64) -> bool {
        match self {
            Agreement::Any => value > 0,
            Agreement::Singular => value == 1,
            Agreement::Plural => value > 1,
        }
    }
}

/// Lookup-table entry for one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleEntry {
    pub category: Category,
    /// Value of a word below the thousand scale
    pub value: u32,
    /// Power of ten named by a scale word, zero otherwise
    pub exponent: usize,
    /// Ordering of -illion words, larger is bigger
    pub rank: usize,
    /// Categories allowed after this word
    pub next: CategorySet,
    /// The word can name one digit after the point
    pub fraction_digit: bool,
    /// Shortened form that is only valid directly before a scale word
    pub apocope: bool,
    pub agreement: Agreement,
}

impl ScaleEntry {
    /// A word with a small numeric value
    pub fn word(category: Category, value: u32, next: CategorySet) -> Self {
        Self {
            category,
            value,
            exponent: 0,
            rank: 0,
            next,
            fraction_digit: false,
            apocope: false,
            agreement: Agreement::Any,
        }
    }

    /// A scale word naming `10^exponent`
    pub fn scale(
        category: Category,
        exponent: usize,
        rank: usize,
        next: CategorySet,
        agreement: Agreement,
    ) -> Self {
        Self { exponent, rank, agreement, ..Self::word(category, 0, next) }
    }

    pub fn with_fraction_digit(mut self) -> Self {
        self.fraction_digit = true;
        self
    }

    pub fn with_apocope(mut self) -> Self {
        self.apocope = true;
        self
    }

    /// Numeric value as a decimal string
    pub fn numeric_value(&self) -> String {
        if self.exponent > 0 {
            shift_left("1", self.exponent)
        } else {
            self.value.to_string()
        }
    }

    /// The word completes a number, so the point or the end may follow
    pub fn is_complete(&self) -> bool {
        self.next.contains(CategorySet::POINT)
    }
}

/// Complete word grammar of one language
#[derive(Debug, Clone)]
pub struct Grammar {
    pub language: Language,
    pub(crate) words: HashMap<&'static str, ScaleEntry>,
    /// Categories a number may start with
    pub first: CategorySet,
    /// Categories allowed right after the point
    pub fraction_start: CategorySet,
    /// "hundred" multiplies the unit before it instead of being a value
    pub hundred_multiplies: bool,
    /// "thousand" is the lowest scale word and takes part in the
    /// decreasing-scale check; otherwise it only counts within a tier
    pub thousand_ranked: bool,
    /// Short fractions may be read as one cardinal number
    pub cardinal_fractions: bool,
    /// Longest integer part the generator can name
    pub max_integer_digits: usize,
}

impl Grammar {
    pub fn lookup(&self, word: &str) -> Option<&ScaleEntry> {
        self.words.get(word)
    }

    /// Number of known words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

lazy_static! {
    static ref ENGLISH: Grammar = english::grammar();
    static ref SPANISH: Grammar = spanish::grammar();
}

/// The shared grammar for `language`
pub fn grammar_for(language: Language) -> &'static Grammar {
    match language {
        Language::English => &ENGLISH,
        Language::Spanish => &SPANISH,
    }
}
