//! BigString Operations
//!
//! Schoolbook arithmetic over ASCII decimal-digit strings.
//!
//! All inputs are expected to be unsigned and to contain only the digits
//! `0`-`9` (plus at most one `.` where a function says so). Inputs are not
//! re-validated here: the numeral layer validates before anything reaches the
//! kernel.

/// Maximum number of digits produced after the radix point by [`divide_full`].
pub const MAX_FRACTION_DIGITS: usize = 25;

/// Result of multiplying a (possibly fractional) value by a small integer.
///
/// The halves are kept apart because callers place them on different sides of
/// their result: the hub-to-base direction consumes `integer_part` as the next
/// output digit and keeps multiplying `fractional_part`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicationResult {
    /// Integer digits, without superfluous leading zeros ("0" when empty)
    pub integer_part: String,
    /// Fractional digits, without trailing zeros ("0" when empty)
    pub fractional_part: String,
}

impl MultiplicationResult {
    /// Check whether the fractional half is exactly zero
    pub fn fraction_is_zero(&self) -> bool {
        is_zero(&self.fractional_part)
    }
}

/// One digit-step of a long division
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionStep {
    /// Quotient digit produced by this step (0-9)
    pub quotient_digit: u8,
    /// Remainder carried into the next step
    pub remainder: u64,
}

/// Final quotient and remainder of an integer long division
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerDivision {
    /// Quotient with leading zeros suppressed ("0" when empty)
    pub quotient: String,
    /// Remainder, always smaller than the divisor
    pub remainder: u64,
}

/// Result of a division continued past the radix point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullDivision {
    /// Quotient as `I` or `I.F`; `F` never has trailing zeros
    pub quotient: String,
    /// True when the expansion was cut at [`MAX_FRACTION_DIGITS`]
    pub truncated: bool,
}

/// Add two unsigned decimal integers
///
/// # Arguments
/// * `a` - First addend (decimal digits)
/// * `b` - Second addend (decimal digits)
///
/// # Returns
/// The sum, with no leading zero beyond a single "0"
///
/// # Examples
/// ```
/// use entities_big_string::add;
///
/// assert_eq!(add("123", "877"), "1000");
/// assert_eq!(add("0", "0"), "0");
/// ```
pub fn add(a: &str, b: &str) -> String {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut digits = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u8;

    let mut ia = a.iter().rev();
    let mut ib = b.iter().rev();
    loop {
        let da = ia.next();
        let db = ib.next();
        if da.is_none() && db.is_none() {
            break;
        }
        let sum = da.map_or(0, |d| d - b'0') + db.map_or(0, |d| d - b'0') + carry;
        digits.push(b'0' + sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        digits.push(b'0' + carry);
    }

    digits.reverse();
    strip_leading_zeros(&bytes_to_string(digits)).to_string()
}

/// Multiply a decimal value by a small non-negative integer
///
/// `value` may contain one radix point. Digits are processed right to left
/// with carry; the radix point keeps its distance from the right end.
///
/// # Arguments
/// * `value` - Decimal digits, optionally with one `.`
/// * `multiplier` - Small multiplier (at most the largest radix, 64)
///
/// # Returns
/// The product split into integer and fractional halves
pub fn multiply_small(value: &str, multiplier: u32) -> MultiplicationResult {
    let (int_digits, frac_digits) = match value.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (value, ""),
    };

    let multiplier = u64::from(multiplier);
    let mut product = Vec::with_capacity(value.len() + 3);
    let mut carry = 0u64;
    for &digit in int_digits.as_bytes().iter().chain(frac_digits.as_bytes()).rev() {
        let current = u64::from(digit - b'0') * multiplier + carry;
        product.push(b'0' + (current % 10) as u8);
        carry = current / 10;
    }
    while carry > 0 {
        product.push(b'0' + (carry % 10) as u8);
        carry /= 10;
    }
    product.reverse();

    let split = product.len().saturating_sub(frac_digits.len());
    let fractional = product.split_off(split);

    let integer_part = strip_leading_zeros(&bytes_to_string(product)).to_string();
    let fractional_part = bytes_to_string(fractional).trim_end_matches('0').to_string();

    MultiplicationResult {
        integer_part,
        fractional_part: if fractional_part.is_empty() {
            "0".to_string()
        } else {
            fractional_part
        },
    }
}

/// Iterate over the digit-steps of dividing `dividend` by `divisor`
///
/// Yields one [`DivisionStep`] per dividend digit, most significant first.
///
/// # Panics
/// Panics if `divisor` is zero. A zero radix is a caller contract violation.
pub fn long_division_steps(dividend: &str, divisor: u32) -> impl Iterator<Item = DivisionStep> + '_ {
    assert!(divisor != 0, "division by zero radix");
    let divisor = u64::from(divisor);
    dividend.bytes().scan(0u64, move |remainder, digit| {
        let current = *remainder * 10 + u64::from(digit - b'0');
        *remainder = current % divisor;
        Some(DivisionStep {
            quotient_digit: (current / divisor) as u8,
            remainder: *remainder,
        })
    })
}

/// Divide an unsigned decimal integer by a small divisor
///
/// # Arguments
/// * `dividend` - Decimal digits, no radix point
/// * `divisor` - Non-zero divisor
///
/// # Returns
/// Final quotient (leading zeros suppressed) and final remainder
///
/// # Examples
/// ```
/// use entities_big_string::divide_int;
///
/// let result = divide_int("1000", 7);
/// assert_eq!(result.quotient, "142");
/// assert_eq!(result.remainder, 6);
/// ```
pub fn divide_int(dividend: &str, divisor: u32) -> IntegerDivision {
    let mut quotient = Vec::with_capacity(dividend.len());
    let mut remainder = 0;
    for step in long_division_steps(dividend, divisor) {
        if !(quotient.is_empty() && step.quotient_digit == 0) {
            quotient.push(b'0' + step.quotient_digit);
        }
        remainder = step.remainder;
    }

    IntegerDivision {
        quotient: if quotient.is_empty() {
            "0".to_string()
        } else {
            bytes_to_string(quotient)
        },
        remainder,
    }
}

/// Divide a decimal value by a small divisor, continuing past the radix point
///
/// The division produces at most [`MAX_FRACTION_DIGITS`] digits after the
/// point. If the remainder (or unread dividend digits) is still non-zero at
/// that point the quotient is cut and `truncated` is set; no marker is added
/// here.
///
/// # Arguments
/// * `dividend` - Decimal digits, optionally with one `.`
/// * `divisor` - Non-zero divisor
///
/// # Returns
/// The quotient and whether it was truncated
pub fn divide_full(dividend: &str, divisor: u32) -> FullDivision {
    assert!(divisor != 0, "division by zero radix");
    let (int_digits, frac_digits) = match dividend.split_once('.') {
        Some((int, frac)) => (int, frac.as_bytes()),
        None => (dividend, &[][..]),
    };

    let integer = divide_int(if int_digits.is_empty() { "0" } else { int_digits }, divisor);

    let divisor = u64::from(divisor);
    let mut remainder = integer.remainder;
    let mut fraction = Vec::new();
    let mut position = 0;
    while position < MAX_FRACTION_DIGITS {
        let digit = frac_digits.get(position).map_or(0, |d| u64::from(d - b'0'));
        if remainder == 0 && position >= frac_digits.len() {
            break;
        }
        let current = remainder * 10 + digit;
        fraction.push(b'0' + (current / divisor) as u8);
        remainder = current % divisor;
        position += 1;
    }

    let unread_nonzero = frac_digits
        .get(position..)
        .map_or(false, |rest| rest.iter().any(|&d| d != b'0'));
    let truncated = remainder != 0 || unread_nonzero;

    let fraction = bytes_to_string(fraction);
    let fraction = fraction.trim_end_matches('0');
    let quotient = if fraction.is_empty() {
        integer.quotient
    } else {
        format!("{}.{}", integer.quotient, fraction)
    };

    FullDivision { quotient, truncated }
}

/// Multiply an unsigned decimal integer by `10^places`
///
/// # Examples
/// ```
/// use entities_big_string::shift_left;
///
/// assert_eq!(shift_left("12", 3), "12000");
/// assert_eq!(shift_left("0", 6), "0");
/// ```
pub fn shift_left(value: &str, places: usize) -> String {
    let value = strip_leading_zeros(value);
    if value == "0" {
        return value.to_string();
    }
    let mut shifted = String::with_capacity(value.len() + places);
    shifted.push_str(value);
    shifted.extend(std::iter::repeat('0').take(places));
    shifted
}

/// Strip leading zeros from a decimal integer, keeping a single "0"
pub fn strip_leading_zeros(value: &str) -> &str {
    let stripped = value.trim_start_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Check whether a decimal string (optionally with a point) is zero
pub fn is_zero(value: &str) -> bool {
    value.bytes().all(|b| b == b'0' || b == b'.')
}

fn bytes_to_string(digits: Vec<u8>) -> String {
    // Only ASCII digits are ever pushed
    digits.into_iter().map(char::from).collect()
}
