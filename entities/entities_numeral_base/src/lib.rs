//! Entities Layer: Numeral Bases
//!
//! This crate describes the numeral systems the codec converts between and the
//! string-level rules every numeral obeys.
//!
//! ## Overview
//!
//! The `entities_numeral_base` crate sits next to `entities_big_string` in the
//! innermost layer. It knows nothing about arithmetic: it builds alphabets,
//! resolves the zero character, and standardizes and validates numeral strings
//! using only the alphabet.
//!
//! ## Modules
//!
//! - **[`base_id`](base_id/index.html)**: The supported numeral systems and
//!   their radix.
//!
//! - **[`alphabet`](alphabet/index.html)**: Fixed alphabets and the segment
//!   assembly used by Base62/Base64 custom orderings and extra characters.
//!
//! - **[`base_spec`](base_spec/index.html)**: `BaseSpec`, the immutable
//!   per-request description of a base, plus `BaseOptions` and `Language`.
//!
//! - **[`numeral`](numeral/index.html)**: `standardize`, `validate` and
//!   `remove_zeros`, all aware of the base's own zero character.
//!
//! - **[`outcome`](outcome/index.html)**: `ConversionOutcome`, the value every
//!   conversion returns, including the truncated/too-long/not-a-number cases.
//!
//! ## Usage
//!
//! ```rust
//! use entities_numeral_base::{BaseId, BaseOptions, BaseSpec, Segment};
//!
//! let options = BaseOptions::default()
//!     .with_order(vec![Segment::Lowercase, Segment::Uppercase, Segment::Numbers]);
//! let spec = BaseSpec::new(BaseId::Base62, &options).unwrap();
//!
//! assert_eq!(spec.zero_char(), Some('a'));
//! assert_eq!(spec.standardize(" aaz.ba "), "z.b");
//! assert!(spec.validate("-z.b"));
//! ```

pub mod alphabet;
pub mod base_id;
pub mod base_spec;
pub mod error;
pub mod numeral;
pub mod outcome;

pub use alphabet::{parse_extra_characters, parse_order, Segment, DEFAULT_EXTRA_CHARACTERS};
pub use base_id::BaseId;
pub use base_spec::{BaseOptions, BaseSpec, Language};
pub use error::NumeralError;
pub use numeral::{remove_zeros, NumeralParts, POINT, SIGN};
pub use outcome::{ConversionOutcome, WarningKind, NOT_A_NUMBER, NUMBER_TOO_LONG, TRUNCATION_MARKER};
