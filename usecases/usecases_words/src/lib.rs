//! Use Cases Layer: Number Words
//!
//! Converts decimal numerals to English or Spanish words and reads such words
//! back as decimal numerals.
//!
//! ## Overview
//!
//! The generator is a direct top-down naming of the integer groups and the
//! fractional digits. The parser is a state machine over word tokens driven
//! by per-language grammar tables; it rejects anything that is not a
//! well-formed number with `NaN` instead of guessing.
//!
//! ## Modules
//!
//! - **[`category`](category/index.html)**: Word categories and category sets
//! - **[`grammar`](grammar/index.html)**: Per-language lookup tables, built once
//! - **[`english`](english/index.html)**: English short-scale names
//! - **[`spanish`](spanish/index.html)**: Spanish long-scale names and agreement
//! - **[`generator`](generator/index.html)**: Decimal to words
//! - **[`parser`](parser/index.html)**: Words to decimal
//!
//! ## Usage
//!
//! ```rust
//! use entities_numeral_base::Language;
//! use usecases_words::{decimal_to_words, words_to_decimal};
//!
//! let words = decimal_to_words("2021", Language::Spanish);
//! assert_eq!(words.to_string(), "dos mil veintiuno");
//! assert_eq!(words_to_decimal("dos mil veintiuno", Language::Spanish).to_string(), "2021");
//! ```

pub mod category;
pub mod english;
pub mod generator;
pub mod grammar;
pub mod parser;
pub mod spanish;

pub use category::{Category, CategorySet};
pub use generator::decimal_to_words;
pub use grammar::{grammar_for, Agreement, Grammar, ScaleEntry};
pub use parser::{parse_words, tokenize, words_to_decimal, FractionMode, ParseState, Rejection};
