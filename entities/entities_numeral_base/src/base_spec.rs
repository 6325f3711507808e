//! Base Specifications
//!
//! A [`BaseSpec`] is the value every conversion works against: the ordered
//! alphabet, the resolved zero character and the sign/point/whitespace policy.
//! It is built once per request from the static defaults of a [`BaseId`] plus
//! optional [`BaseOptions`], and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{
    assemble, check_extra_characters, resolve_order, Segment, BINARY_DIGITS, DECIMAL_DIGITS,
    DEFAULT_EXTRA_CHARACTERS, HEXADECIMAL_DIGITS, OCTAL_DIGITS,
};
use crate::base_id::BaseId;
use crate::error::NumeralError;
use crate::numeral;

/// Characters accepted in a text numeral besides ASCII lowercase letters
const TEXT_EXTRA_CHARACTERS: &str = "áéíóúüñ -";

/// Language of a text numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" | "español" | "espanol" => Ok(Language::Spanish),
            _ => Err(NumeralError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Per-request overrides for a base
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseOptions {
    /// Segment sequence (base62/base64 only)
    pub order: Option<Vec<Segment>>,
    /// Replacement for the two default symbols (base64 only)
    pub extra_characters: Option<[char; 2]>,
    /// Language of the words (text only)
    pub lang: Option<Language>,
}

impl BaseOptions {
    pub fn with_order(mut self, order: Vec<Segment>) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_extra_characters(mut self, extra: [char; 2]) -> Self {
        self.extra_characters = Some(extra);
        self
    }

    pub fn with_lang(mut self, lang: Language) -> Self {
        self.lang = Some(lang);
        self
    }
}

/// Resolved description of a numeral system for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSpec {
    base: BaseId,
    alphabet: Vec<char>,
    zero_char: Option<char>,
    allow_sign: bool,
    allow_point: bool,
    collapse_whitespace: bool,
    uppercase_input: bool,
    language: Option<Language>,
}

impl BaseSpec {
    /// Build the spec for `base`, applying `options`
    ///
    /// # Arguments
    /// * `base` - Numeral system
    /// * `options` - Per-request overrides; each is only valid for some bases
    ///
    /// # Returns
    /// * `Ok(BaseSpec)` - Ready-to-use specification
    /// * `Err(NumeralError)` - Option not valid for the base, or malformed
    pub fn new(base: BaseId, options: &BaseOptions) -> Result<Self, NumeralError> {
        if options.order.is_some() && !matches!(base, BaseId::Base62 | BaseId::Base64) {
            return Err(NumeralError::OptionNotSupported { option: "order", base });
        }
        if options.extra_characters.is_some() && base != BaseId::Base64 {
            return Err(NumeralError::OptionNotSupported { option: "extra_characters", base });
        }
        if options.lang.is_some() && base != BaseId::Text {
            return Err(NumeralError::OptionNotSupported { option: "lang", base });
        }

        let alphabet: Vec<char> = match base {
            BaseId::Binary => BINARY_DIGITS.chars().collect(),
            BaseId::Octal => OCTAL_DIGITS.chars().collect(),
            BaseId::Decimal => DECIMAL_DIGITS.chars().collect(),
            BaseId::Hexadecimal => HEXADECIMAL_DIGITS.chars().collect(),
            BaseId::Base62 | BaseId::Base64 => {
                let order = resolve_order(base, options.order.as_deref())?;
                let extra = options.extra_characters.unwrap_or(DEFAULT_EXTRA_CHARACTERS);
                check_extra_characters(extra)?;
                assemble(&order, extra)
            }
            BaseId::Text => ('a'..='z').chain(TEXT_EXTRA_CHARACTERS.chars()).collect(),
        };
        if alphabet.is_empty() {
            return Err(NumeralError::EmptyAlphabet(base));
        }

        let is_text = base == BaseId::Text;
        Ok(Self {
            base,
            zero_char: if is_text { None } else { alphabet.first().copied() },
            alphabet,
            allow_sign: !is_text,
            allow_point: !is_text,
            collapse_whitespace: is_text,
            uppercase_input: base == BaseId::Hexadecimal,
            language: if is_text { Some(options.lang.unwrap_or_default()) } else { None },
        })
    }

    /// Spec with every default for `base`
    pub fn default_for(base: BaseId) -> Result<Self, NumeralError> {
        Self::new(base, &BaseOptions::default())
    }

    pub fn base(&self) -> BaseId {
        self.base
    }

    /// Ordered digit alphabet (for text: the accepted characters)
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Number of digits; for text the size of the accepted character set
    pub fn radix(&self) -> u32 {
        self.alphabet.len() as u32
    }

    /// Character standing for zero, `None` for text
    pub fn zero_char(&self) -> Option<char> {
        self.zero_char
    }

    pub fn allows_sign(&self) -> bool {
        self.allow_sign
    }

    pub fn allows_point(&self) -> bool {
        self.allow_point
    }

    pub fn collapses_whitespace(&self) -> bool {
        self.collapse_whitespace
    }

    /// Language of a text spec
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Position of `c` in the alphabet
    pub fn digit_value(&self, c: char) -> Option<u32> {
        self.alphabet.iter().position(|&a| a == c).map(|i| i as u32)
    }

    /// Character for digit value `value`
    pub fn digit(&self, value: u32) -> Option<char> {
        self.alphabet.get(value as usize).copied()
    }

    /// Normalise `raw` to the canonical form of this base
    pub fn standardize(&self, raw: &str) -> String {
        match self.zero_char {
            Some(zero) if !self.collapse_whitespace => {
                let folded;
                let raw = if self.uppercase_input {
                    folded = raw.to_ascii_uppercase();
                    folded.as_str()
                } else {
                    raw
                };
                numeral::standardize(raw, zero)
            }
            _ => numeral::standardize_text(raw),
        }
    }

    /// Structural check of an already standardized value
    pub fn validate(&self, value: &str) -> bool {
        numeral::validate(value, &self.alphabet, self.allow_sign, self.allow_point)
    }
}
