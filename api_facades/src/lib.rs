//! API Facades Layer
//!
//! The public surface of the numeral codec.
//!
//! ## Overview
//!
//! Request layers see one operation, [`convert`], plus the helpers in
//! [`contracts`]. Everything below is pure: no I/O, no shared mutable state,
//! safe to call from any number of threads.
//!
//! ## Modules
//!
//! - **[`convert`](convert/index.html)**: Any base or language to any other
//! - **[`contracts`](contracts/index.html)**: `standardize`, `validate`,
//!   `zero_char`, `remove_zeros`
//! - **[`error`](error/index.html)**: `ConversionError`
//!
//! ## Usage
//!
//! ```rust
//! use api_facades::{convert, BaseId, BaseOptions, Language};
//!
//! let decimal = BaseOptions::default();
//! let spanish = BaseOptions::default().with_lang(Language::Spanish);
//! let outcome = convert("-2.5", BaseId::Decimal, &decimal, BaseId::Text, &spanish).unwrap();
//! assert_eq!(outcome.to_string(), "menos dos punto cinco");
//! ```

pub mod contracts;
pub mod convert;
pub mod error;

pub use contracts::{remove_zeros, standardize, validate, zero_char};
pub use convert::{convert, convert_with_specs};
pub use entities_numeral_base::{
    parse_extra_characters, parse_order, BaseId, BaseOptions, ConversionOutcome, Language, Segment,
    WarningKind,
};
pub use error::ConversionError;
