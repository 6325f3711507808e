//! Use Cases Layer: Base Conversion
//!
//! Converts numerals between every pair of numeral bases.
//!
//! ## Overview
//!
//! The `usecases_base_conversion` crate builds on the entities layer: numeral
//! specs from `entities_numeral_base` and exact arithmetic from
//! `entities_big_string`. All paths are instantiations of one generic template
//! that splits a numeral into sign, integer and fractional halves.
//!
//! ## Modules
//!
//! - **[`generic`](generic/index.html)**: The shared conversion template
//! - **[`decimal_hub`](decimal_hub/index.html)**: To and from decimal for any base
//! - **[`power_of_two`](power_of_two/index.html)**: Bit grouping for binary,
//!   octal and hexadecimal
//! - **[`remap`](remap/index.html)**: Digit substitution between alphabets of
//!   the same radix
//! - **[`router`](router/index.html)**: Chooses the path for a pair of bases
//!
//! ## Usage
//!
//! ```rust
//! use entities_numeral_base::{BaseId, BaseSpec};
//! use usecases_base_conversion::route;
//!
//! let from = BaseSpec::default_for(BaseId::Hexadecimal).unwrap();
//! let to = BaseSpec::default_for(BaseId::Decimal).unwrap();
//! let outcome = route("FF", &from, &to).unwrap();
//! assert_eq!(outcome.to_string(), "255");
//! ```

pub mod decimal_hub;
pub mod generic;
pub mod power_of_two;
pub mod remap;
pub mod router;

pub use decimal_hub::{from_decimal, to_decimal};
pub use generic::{convert_generic, ConvertedFraction};
pub use power_of_two::{from_binary, to_binary};
pub use remap::remap;
pub use router::{plan, route, Route, RoutingError};
