//! Numeric form input rules
//!
//! Integer fields accept an optional leading minus sign followed by digits.
//! Amount fields (specimen volumes, concentrations) accept non-negative
//! decimals with an optional fractional part (`1`, `1.10`, `.5`).

use crate::error::DomainError;

/// Parses an integer field such as a count or a sequence number.
///
/// - `"1"`, `"-1"` are accepted
/// - `"1.1"`, `"x110"` are rejected
pub fn parse_integer_input(input: &str) -> Result<i64, DomainError> {
    let digits = input.strip_prefix('-').unwrap_or(input);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::validation(format!(
            "'{}' is not an integer",
            input
        )));
    }
    input
        .parse()
        .map_err(|_| DomainError::validation(format!("'{}' is out of range", input)))
}

/// Parses a non-negative decimal amount.
///
/// - `"1"`, `"1.10"`, `".5"` are accepted
/// - `"-1"`, `"-1.10"`, `"x1.10"`, `"1."` are rejected
pub fn parse_amount_input(input: &str) -> Result<f64, DomainError> {
    let invalid = || DomainError::validation(format!("'{}' is not a valid amount", input));

    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (input, None),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    if !all_digits(whole) {
        return Err(invalid());
    }
    match fraction {
        Some(f) if f.is_empty() || !all_digits(f) => return Err(invalid()),
        None if whole.is_empty() => return Err(invalid()),
        _ => {}
    }

    input.parse().map_err(|_| invalid())
}
