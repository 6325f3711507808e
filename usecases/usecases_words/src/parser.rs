//! Words to Decimal
//!
//! A fold over the word tokens. Each step looks the token up in the language's
//! [`Grammar`], checks it against the categories the previous word allows, and
//! produces the next [`ParseState`]; any violation ends the fold with a
//! [`Rejection`], which the public entry point reports as `NaN`.
//!
//! Values accumulate in three places: the current group (below one thousand),
//! the current tier (the group times one thousand, once "thousand" is seen) and
//! the total of every completed -illion tier, kept as a decimal string.

use entities_big_string::{add, shift_left};
use entities_numeral_base::numeral::{standardize, standardize_text};
use entities_numeral_base::{ConversionOutcome, Language, POINT, SIGN};
use thiserror::Error;
use tracing::{debug, trace};

use crate::category::{Category, CategorySet};
use crate::grammar::{grammar_for, Grammar, ScaleEntry};

const HYPHEN: char = '-';
const HYPHEN_TOKEN: &str = "-";

/// Categories that may continue a fraction read as one cardinal number
const CARDINAL_FRACTION: CategorySet = CategorySet::UNIT
    .union(CategorySet::TEEN)
    .union(CategorySet::TEN)
    .union(CategorySet::HUNDRED)
    .union(CategorySet::CONNECTOR);

/// Why a word sequence is not a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no words")]
    Empty,
    #[error("unknown word '{0}'")]
    UnknownWord(String),
    #[error("'{word}' ({category:?}) cannot follow the previous word")]
    OutOfOrder { word: String, category: Category },
    #[error("scale word '{0}' is not smaller than the previous scale")]
    ScaleNotDecreasing(String),
    #[error("second thousand in the same tier")]
    RepeatedThousand,
    #[error("'{0}' does not agree with the value it multiplies")]
    Agreement(String),
    #[error("'{0}' cannot name a fractional digit here")]
    FractionGrammar(String),
    #[error("malformed hyphenated word '{0}'")]
    MalformedCompound(String),
    #[error("number ends in an incomplete phrase")]
    Dangling,
}

/// How the words after the point are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionMode {
    /// One word per digit ("punto dos cinco")
    Digits,
    /// A single number up to 999 ("punto veinticinco")
    Cardinal,
}

/// State between two tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState {
    pub negative: bool,
    /// Sum of every completed -illion tier
    pub accumulated: String,
    /// Thousands of the current tier
    pub tier: u64,
    /// Current group, below one thousand
    pub group: u32,
    /// Categories allowed for the next token
    pub expected: CategorySet,
    /// The words so far form a whole number
    pub complete: bool,
    pub in_fraction: bool,
    pub fraction_mode: Option<FractionMode>,
    pub fraction_digits: String,
    pub fraction_value: u32,
    pub last_illion_rank: Option<usize>,
    pub thousand_used: bool,
}

impl ParseState {
    pub fn start(grammar: &Grammar) -> Self {
        Self {
            negative: false,
            accumulated: "0".to_string(),
            tier: 0,
            group: 0,
            expected: grammar.first,
            complete: false,
            in_fraction: false,
            fraction_mode: None,
            fraction_digits: String::new(),
            fraction_value: 0,
            last_illion_rank: None,
            thousand_used: false,
        }
    }

    /// Consume one token
    pub fn advance(&self, token: &str, grammar: &Grammar) -> Result<ParseState, Rejection> {
        let entry = grammar
            .lookup(token)
            .ok_or_else(|| Rejection::UnknownWord(token.to_string()))?;
        if !self.expected.contains(entry.category.flag()) {
            return Err(Rejection::OutOfOrder { word: token.to_string(), category: entry.category });
        }
        trace!(token, category = ?entry.category, "accepted word");

        if self.in_fraction {
            return self.advance_fraction(token, entry, grammar);
        }

        let mut next = self.clone();
        match entry.category {
            Category::Minus => next.negative = true,
            Category::Point => {
                next.in_fraction = true;
                next.complete = false;
                next.expected = grammar.fraction_start;
                return Ok(next);
            }
            Category::Zero | Category::Connector => {}
            Category::Unit | Category::Teen | Category::Ten => next.group += entry.value,
            Category::Hundred if grammar.hundred_multiplies => next.group *= 100,
            Category::Hundred => next.group += entry.value,
            Category::Thousand => {
                if self.thousand_used {
                    return Err(Rejection::RepeatedThousand);
                }
                if grammar.thousand_ranked {
                    if self.last_illion_rank.map_or(false, |last| entry.rank >= last) {
                        return Err(Rejection::ScaleNotDecreasing(token.to_string()));
                    }
                    next.last_illion_rank = Some(entry.rank);
                }
                // bare "mil" is one thousand
                let count = if self.group == 0 { 1 } else { self.group };
                next.tier = u64::from(count) * 1000;
                next.group = 0;
                next.thousand_used = true;
            }
            Category::Illion => {
                if self.last_illion_rank.map_or(false, |last| entry.rank >= last) {
                    return Err(Rejection::ScaleNotDecreasing(token.to_string()));
                }
                let value = self.tier + u64::from(self.group);
                if !entry.agreement.accepts(value) {
                    return Err(Rejection::Agreement(token.to_string()));
                }
                next.accumulated = add(&self.accumulated, &shift_left(&value.to_string(), entry.exponent));
                next.tier = 0;
                next.group = 0;
                next.thousand_used = false;
                next.last_illion_rank = Some(entry.rank);
            }
        }
        next.expected = refine(entry, next.group, grammar);
        next.complete = entry.is_complete();
        Ok(next)
    }

    fn advance_fraction(
        &self,
        token: &str,
        entry: &ScaleEntry,
        grammar: &Grammar,
    ) -> Result<ParseState, Rejection> {
        let mode = match self.fraction_mode {
            Some(mode) => mode,
            None if entry.fraction_digit => FractionMode::Digits,
            None if grammar.cardinal_fractions && entry.category != Category::Unit => FractionMode::Cardinal,
            None => return Err(Rejection::FractionGrammar(token.to_string())),
        };

        let mut next = self.clone();
        next.fraction_mode = Some(mode);
        match mode {
            FractionMode::Digits => {
                if !entry.fraction_digit {
                    return Err(Rejection::FractionGrammar(token.to_string()));
                }
                next.fraction_digits.push_str(&entry.value.to_string());
                next.expected = CategorySet::ZERO | CategorySet::UNIT;
                next.complete = true;
            }
            FractionMode::Cardinal => {
                match entry.category {
                    Category::Unit | Category::Teen | Category::Ten | Category::Hundred => {
                        next.fraction_value += entry.value;
                    }
                    Category::Connector => {}
                    _ => return Err(Rejection::FractionGrammar(token.to_string())),
                }
                next.expected = refine(entry, next.fraction_value, grammar) & CARDINAL_FRACTION;
                next.complete = entry.is_complete();
            }
        }
        Ok(next)
    }

    /// Decimal value of a completed parse
    pub fn finish(self) -> Result<String, Rejection> {
        if !self.complete {
            return Err(Rejection::Dangling);
        }
        let integer = add(&self.accumulated, &(self.tier + u64::from(self.group)).to_string());
        let mut number = String::with_capacity(integer.len() + self.fraction_digits.len() + 2);
        if self.negative {
            number.push(SIGN);
        }
        number.push_str(&integer);
        if self.in_fraction {
            number.push(POINT);
            match self.fraction_mode {
                Some(FractionMode::Cardinal) => number.push_str(&self.fraction_value.to_string()),
                _ => number.push_str(&self.fraction_digits),
            }
        }
        Ok(standardize(&number, '0'))
    }
}

/// Narrow a word's follow set to what the current group still allows
fn refine(entry: &ScaleEntry, group: u32, grammar: &Grammar) -> CategorySet {
    let mut expected = entry.next;
    let hundred_allowed = if grammar.hundred_multiplies {
        (1..=9).contains(&group)
    } else {
        group == 0
    };
    if !hundred_allowed {
        expected.remove(CategorySet::HUNDRED);
    }
    // "un mil" is written "mil"
    if entry.apocope && group == 1 {
        expected.remove(CategorySet::THOUSAND);
    }
    expected
}

/// Split text into word tokens; hyphenated compounds become three tokens
pub fn tokenize(text: &str) -> Result<Vec<&str>, Rejection> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        for (index, piece) in word.split(HYPHEN).enumerate() {
            if piece.is_empty() {
                return Err(Rejection::MalformedCompound(word.to_string()));
            }
            if index > 0 {
                tokens.push(HYPHEN_TOKEN);
            }
            tokens.push(piece);
        }
    }
    Ok(tokens)
}

/// Read number words as a canonical decimal numeral
///
/// # Arguments
/// * `words` - Number words, any case and spacing
/// * `language` - Language of the words
///
/// # Returns
/// * `Ok(String)` - Standardized decimal numeral
/// * `Err(Rejection)` - The words do not form a number
pub fn parse_words(words: &str, language: Language) -> Result<String, Rejection> {
    let grammar = grammar_for(language);
    let text = standardize_text(words);
    let tokens = tokenize(&text)?;
    if tokens.is_empty() {
        return Err(Rejection::Empty);
    }
    tokens
        .iter()
        .try_fold(ParseState::start(grammar), |state, token| state.advance(token, grammar))?
        .finish()
}

/// Words to decimal, with `NaN` for anything that is not a number
///
/// # Examples
/// ```
/// use entities_numeral_base::Language;
/// use usecases_words::words_to_decimal;
///
/// assert_eq!(words_to_decimal("menos dos punto cinco", Language::Spanish).to_string(), "-2.5");
/// assert_eq!(words_to_decimal("one million two billion", Language::English).to_string(), "NaN");
/// ```
pub fn words_to_decimal(words: &str, language: Language) -> ConversionOutcome {
    match parse_words(words, language) {
        Ok(decimal) => ConversionOutcome::Value(decimal),
        Err(rejection) => {
            debug!(%rejection, %language, "words rejected");
            ConversionOutcome::NotANumber
        }
    }
}
