//! Entities Layer: BigString Arithmetic
//!
//! Provides exact arithmetic over unsigned decimal-digit strings:
//! - Addition of arbitrarily long integers
//! - Multiplication by a small integer (with a radix point in the value)
//! - Integer long division with remainder
//! - Full division bounded to a fixed number of fractional digits
//!
//! ## Overview
//!
//! The `entities_big_string` crate is the innermost layer of the numeral codec.
//! Every other component that needs arithmetic (the decimal hub, the words
//! generator and the words parser) goes through these functions; none of them
//! replicates digit arithmetic. Values never pass through machine integers or
//! floating point, so their magnitude is bounded only by memory.
//!
//! Signs are not handled here. Callers strip the sign before calling and
//! re-attach it afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use entities_big_string::{add, divide_full, divide_int, multiply_small};
//!
//! assert_eq!(add("999", "1"), "1000");
//!
//! let product = multiply_small("0.6789", 62);
//! assert_eq!(product.integer_part, "42");
//! assert_eq!(product.fractional_part, "0918");
//!
//! let division = divide_int("255", 16);
//! assert_eq!(division.quotient, "15");
//! assert_eq!(division.remainder, 15);
//!
//! let third = divide_full("1", 3);
//! assert!(third.truncated);
//! ```

pub mod big_string;

pub use big_string::{
    add, divide_full, divide_int, is_zero, long_division_steps, multiply_small, shift_left,
    strip_leading_zeros, DivisionStep, FullDivision, IntegerDivision, MultiplicationResult,
    MAX_FRACTION_DIGITS,
};
