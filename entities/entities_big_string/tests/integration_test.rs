//! Integration tests for entities_big_string crate
//!
//! These tests cross-check the string kernel against malachite's Natural on
//! values far beyond machine integer range.

use entities_big_string::*;
use malachite::Natural;
use std::str::FromStr;

/// Deterministic pseudo-random digit strings (LCG) so failures are reproducible
fn digit_strings(seed: u64, count: usize, max_len: usize) -> Vec<String> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };
    (0..count)
        .map(|_| {
            let len = 1 + (next() as usize % max_len);
            (0..len)
                .map(|_| char::from(b'0' + (next() % 10) as u8))
                .collect()
        })
        .collect()
}

fn natural(value: &str) -> Natural {
    Natural::from_str(value).unwrap()
}

#[test]
fn test_add_matches_malachite() {
    let left = digit_strings(7, 40, 120);
    let right = digit_strings(11, 40, 90);
    for (a, b) in left.iter().zip(&right) {
        let expected = (natural(a) + natural(b)).to_string();
        assert_eq!(add(a, b), expected, "{} + {}", a, b);
    }
}

#[test]
fn test_divide_int_matches_malachite() {
    for (i, dividend) in digit_strings(23, 40, 150).iter().enumerate() {
        let divisor = [2u32, 3, 7, 8, 10, 16, 62, 64][i % 8];
        let result = divide_int(dividend, divisor);
        let n = natural(dividend);
        let d = Natural::from(divisor);
        assert_eq!(result.quotient, (&n / &d).to_string());
        assert_eq!(result.remainder.to_string(), (&n % &d).to_string());
    }
}

#[test]
fn test_multiply_small_integer_matches_malachite() {
    for (i, value) in digit_strings(31, 30, 100).iter().enumerate() {
        let multiplier = [2u32, 8, 16, 62, 64][i % 5];
        let result = multiply_small(value, multiplier);
        let expected = (natural(value) * Natural::from(multiplier)).to_string();
        assert_eq!(result.integer_part, expected);
        assert_eq!(result.fractional_part, "0");
    }
}

#[test]
fn test_divide_then_multiply_restores_value() {
    // q * d + r == n, checked with the kernel itself
    let dividend = "98765432109876543210987654321098765432109876543210";
    let result = divide_int(dividend, 62);
    let product = multiply_small(&result.quotient, 62);
    assert_eq!(add(&product.integer_part, &result.remainder.to_string()), dividend);
}

#[test]
fn test_divide_full_by_power_of_two_terminates() {
    // 1 / 2^20 has exactly 20 fractional digits
    let mut value = "1".to_string();
    for _ in 0..20 {
        let step = divide_full(&value, 2);
        assert!(!step.truncated);
        value = step.quotient;
    }
    assert_eq!(value, "0.00000095367431640625");
}

#[test]
fn test_divide_full_by_sixty_two_truncates() {
    let result = divide_full("1", 62);
    assert!(result.truncated);
    assert!(result.quotient.starts_with("0.0161290322580645161290"));
    assert_eq!(result.quotient.len(), 2 + MAX_FRACTION_DIGITS);
}

#[test]
fn test_shift_left_matches_power_of_ten() {
    let shifted = shift_left("123", 60);
    let expected = natural("123") * natural(&format!("1{}", "0".repeat(60)));
    assert_eq!(shifted, expected.to_string());
}
